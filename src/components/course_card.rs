use yew::prelude::*;

use crate::components::cta_link::{CtaLink, CtaStyle};
use crate::components::icon::{Glyph, Icon};
use crate::content::Course;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
    /// Where "Saiba Mais" leads.
    pub enquire_href: AttrValue,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;

    html! {
        <div class="course-card">
            {
                if let Some(badge) = course.badge {
                    html! { <div class="course-card__badge">{badge}</div> }
                } else {
                    html! {}
                }
            }
            <div class="course-card__icon">
                <Icon glyph={Glyph::GraduationCap} />
            </div>
            <h3 class="course-card__title">{course.title}</h3>
            <p class="course-card__description">{course.description}</p>
            <ul class="course-card__features">
                {
                    course.features.iter().map(|feature| html! {
                        <li class="course-card__feature">
                            <Icon glyph={Glyph::CheckCircle} />
                            {*feature}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <CtaLink href={props.enquire_href.clone()} variant={CtaStyle::Outline} class="course-card__cta">
                {"Saiba Mais"}
            </CtaLink>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_props;
    use pretty_assertions::assert_eq;

    const UNBADGED: Course = Course {
        title: "Curso",
        description: "Descrição",
        features: &["Um", "Dois"],
        badge: None,
    };

    #[tokio::test]
    async fn no_badge_means_no_badge_element() {
        let html = render_props::<CourseCard>(CourseCardProps {
            course: UNBADGED,
            enquire_href: "#contato".into(),
        })
        .await;
        assert!(!html.contains("course-card__badge"));
        assert_eq!(html.matches("class=\"course-card__feature\"").count(), 2);
    }

    #[tokio::test]
    async fn badge_is_rendered_when_present() {
        let html = render_props::<CourseCard>(CourseCardProps {
            course: Course {
                badge: Some("Exclusivo"),
                ..UNBADGED
            },
            enquire_href: "#contato".into(),
        })
        .await;
        assert!(html.contains("<div class=\"course-card__badge\">Exclusivo</div>"));
        assert!(html.contains("href=\"#contato\""));
    }
}
