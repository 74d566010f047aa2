//! Static copy for the page. Nothing here changes at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Section id, without the leading `#`.
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub badge: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentCatalog {
    pub nav_items: &'static [NavItem],
    /// Extra entry appended to the mobile overlay.
    pub contact_item: NavItem,
    pub stats: &'static [Stat],
    pub bio_points: &'static [&'static str],
    pub courses: &'static [Course],
    pub highlights: &'static [Highlight],
    pub testimonials: &'static [Testimonial],
}

impl ContentCatalog {
    /// Entries of the mobile overlay: every nav item, then contact.
    pub fn overlay_items(&self) -> impl Iterator<Item = &NavItem> + '_ {
        self.nav_items.iter().chain(std::iter::once(&self.contact_item))
    }
}

const TESTIMONIAL_QUOTE: &str = "O curso da Dra. Val foi um divisor de águas na minha carreira. A segurança que ela passa nas aulas práticas é impagável. Hoje tenho minha própria clínica.";

pub static CATALOG: ContentCatalog = ContentCatalog {
    nav_items: &[
        NavItem { label: "Início", anchor: "início" },
        NavItem { label: "Sobre", anchor: "sobre" },
        NavItem { label: "Cursos", anchor: "cursos" },
        NavItem { label: "Depoimentos", anchor: "depoimentos" },
    ],
    contact_item: NavItem { label: "Contato", anchor: "contato" },
    stats: &[
        Stat { number: "+8.5K", label: "Seguidores" },
        Stat { number: "MEC", label: "Reconhecimento" },
        Stat { number: "+10", label: "Anos de Docência" },
        Stat { number: "100%", label: "Excelência" },
    ],
    bio_points: &[
        "Pós-graduada em Estética Facial e Corporal",
        "Especialista em Pós-operatório de Cirurgia Plástica",
        "Pós-graduada em Biofotônica",
        "Docente do Ensino Superior",
        "Proprietária da Clínica Renove",
    ],
    courses: &[
        Course {
            title: "Residência em Biomedicina",
            description: "Uma imersão prática completa para quem deseja segurança nos procedimentos injetáveis.",
            features: &[
                "Prática em pacientes reais",
                "Supervisão direta",
                "Material didático incluso",
                "Certificado",
            ],
            badge: Some("Matrículas Abertas"),
        },
        Course {
            title: "Pós-Graduação Estética",
            description: "Especialize-se com profundidade teórica e validação pelo MEC. O passo definitivo para sua carreira.",
            features: &[
                "Docentes renomados",
                "Módulos híbridos",
                "Foco em harmonização",
                "Networking",
            ],
            badge: None,
        },
        Course {
            title: "Mentoria VIP",
            description: "Acompanhamento exclusivo para profissionais que desejam escalar seu negócio e aprimorar técnicas.",
            features: &[
                "Análise de business",
                "Técnicas avançadas",
                "Suporte pós-curso",
                "Estratégia de carreira",
            ],
            badge: Some("Exclusivo"),
        },
    ],
    highlights: &[
        Highlight { title: "Prática", text: "Modelos reais para treinamento intensivo." },
        Highlight { title: "Suporte", text: "Acompanhamento vitalício no grupo de alunos." },
    ],
    testimonials: &[
        Testimonial { quote: TESTIMONIAL_QUOTE, author: "Dra. Aluna Exemplo", role: "Biomédica Esteta" },
        Testimonial { quote: TESTIMONIAL_QUOTE, author: "Dra. Aluna Exemplo", role: "Biomédica Esteta" },
        Testimonial { quote: TESTIMONIAL_QUOTE, author: "Dra. Aluna Exemplo", role: "Biomédica Esteta" },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn href_prefixes_anchor() {
        assert_eq!(CATALOG.nav_items[0].href(), "#início");
        assert_eq!(CATALOG.contact_item.href(), "#contato");
    }

    #[test]
    fn overlay_has_nav_items_then_contact() {
        let labels: Vec<_> = CATALOG.overlay_items().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["Início", "Sobre", "Cursos", "Depoimentos", "Contato"]
        );
    }

    #[test]
    fn catalog_shape() {
        assert_eq!(CATALOG.stats.len(), 4);
        assert_eq!(CATALOG.bio_points.len(), 5);
        assert_eq!(CATALOG.courses.len(), 3);
        assert_eq!(CATALOG.testimonials.len(), 3);
        assert_eq!(CATALOG.highlights.len(), 2);
        let badged = CATALOG.courses.iter().filter(|c| c.badge.is_some()).count();
        assert_eq!(badged, 2);
        assert!(CATALOG.courses.iter().all(|c| c.features.len() == 4));
    }
}
