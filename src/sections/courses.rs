use yew::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::icon::{Glyph, Icon};
use crate::components::section_title::SectionTitle;
use crate::content::{Course, NavItem};

#[derive(Properties, PartialEq)]
pub struct CoursesProps {
    pub courses: &'static [Course],
    pub contact: NavItem,
}

#[function_component(Courses)]
pub fn courses(props: &CoursesProps) -> Html {
    let enquire_href: AttrValue = props.contact.href().into();

    html! {
        <section id="cursos" class="courses">
            <div class="courses__content">
                <SectionTitle title="Cursos e Mentorias" subtitle="Educação de Alto Nível" />

                <div class="courses__grid">
                    {
                        props.courses.iter().map(|course| html! {
                            <CourseCard course={*course} enquire_href={enquire_href.clone()} />
                        }).collect::<Html>()
                    }
                </div>

                <div class="courses__enquiry">
                    <p>{"Dúvida sobre qual é o melhor caminho para você?"}</p>
                    <a href={enquire_href.clone()} class="courses__enquiry-link">
                        {"Falar com a equipe de matrículas"}
                        <Icon glyph={Glyph::ChevronRight} />
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .courses {
                    padding: 6rem 0;
                    background: #0a0a0a;
                }

                .courses__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .courses__grid {
                    display: grid;
                    gap: 2rem;
                }

                .course-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    background: #171717;
                    border: 1px solid #262626;
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: all 0.5s ease;
                }

                .course-card:hover {
                    border-color: rgba(234, 179, 8, 0.5);
                    transform: translateY(-0.5rem);
                }

                .course-card__badge {
                    position: absolute;
                    top: -1rem;
                    right: 2rem;
                    background: #eab308;
                    color: #000;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .course-card__icon {
                    width: fit-content;
                    margin-bottom: 1.5rem;
                    padding: 1rem;
                    border-radius: 9999px;
                    background: #262626;
                    color: #eab308;
                }

                .course-card__title {
                    font-family: serif;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }

                .course-card__description {
                    color: #a3a3a3;
                    flex-grow: 1;
                    margin-bottom: 1.5rem;
                }

                .course-card__features {
                    list-style: none;
                    padding: 0;
                    margin-bottom: 2rem;
                }

                .course-card__feature {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #d4d4d4;
                    margin-bottom: 0.75rem;
                }

                .course-card__feature .icon {
                    width: 1rem;
                    height: 1rem;
                    color: #eab308;
                    flex-shrink: 0;
                }

                .course-card__cta {
                    width: 100%;
                    box-sizing: border-box;
                }

                .courses__enquiry {
                    margin-top: 4rem;
                    text-align: center;
                    color: #a3a3a3;
                }

                .courses__enquiry-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #eab308;
                    font-weight: 700;
                    text-decoration: none;
                    border-bottom: 1px solid #eab308;
                    padding-bottom: 0.25rem;
                }

                @media (min-width: 768px) {
                    .courses__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;
    use crate::test_support::render_props;
    use pretty_assertions::assert_eq;

    fn props() -> CoursesProps {
        CoursesProps {
            courses: CATALOG.courses,
            contact: CATALOG.contact_item,
        }
    }

    #[tokio::test]
    async fn renders_one_card_per_course_in_order() {
        let html = render_props::<Courses>(props()).await;
        assert_eq!(html.matches("class=\"course-card\"").count(), CATALOG.courses.len());

        let positions: Vec<usize> = CATALOG
            .courses
            .iter()
            .map(|course| html.find(course.title).unwrap_or(usize::MAX))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(positions.iter().all(|&p| p != usize::MAX));
    }

    #[tokio::test]
    async fn only_badged_courses_get_a_badge() {
        let html = render_props::<Courses>(props()).await;
        let badged = CATALOG.courses.iter().filter(|c| c.badge.is_some()).count();
        assert_eq!(html.matches("class=\"course-card__badge\"").count(), badged);
        assert!(html.contains("Matrículas Abertas"));
        assert!(html.contains("Exclusivo"));
    }
}
