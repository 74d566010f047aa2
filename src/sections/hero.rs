use yew::prelude::*;

use crate::components::cta_link::{CtaLink, CtaStyle};
use crate::components::icon::{Glyph, Icon};
use crate::config::HERO_IMAGE_URL;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="início" class="hero">
            <div class="hero__background">
                <div class="hero__shade"></div>
                <img src={HERO_IMAGE_URL} alt="Clínica Estética Luxo" class="hero__image" />
            </div>

            <div class="hero__content">
                <div class="hero__eyebrow">
                    <Icon glyph={Glyph::Star} filled={true} class="hero__eyebrow-star" />
                    {"Mentora de Biomédicas Estetas"}
                </div>

                <h1 class="hero__title">
                    {"Excelência em "}<br />
                    <span class="hero__title-gradient">{"Harmonização & Ensino"}</span>
                </h1>

                <p class="hero__subtitle">
                    {"Transforme sua carreira com a metodologia exclusiva da Dra. Val Rangel. Pós-graduação, residências e mentorias reconhecidas pelo MEC."}
                </p>

                <div class="hero__actions">
                    <CtaLink href="#cursos">{"Conhecer Cursos"}</CtaLink>
                    <CtaLink href="#sobre" variant={CtaStyle::Outline}>{"Minha Trajetória"}</CtaLink>
                </div>
            </div>

            <div class="hero__scroll-indicator">
                <div class="hero__scroll-dot"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                }

                .hero__shade {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4));
                }

                .hero__image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                }

                .hero__content {
                    position: relative;
                    z-index: 2;
                    max-width: 1200px;
                    width: 100%;
                    padding: 5rem 1.5rem 0;
                    text-align: center;
                }

                .hero__eyebrow {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(234, 179, 8, 0.1);
                    border: 1px solid rgba(234, 179, 8, 0.3);
                    color: #eab308;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .hero__eyebrow-star {
                    width: 0.75rem;
                    height: 0.75rem;
                }

                .hero__title {
                    font-family: serif;
                    font-size: 3rem;
                    font-weight: 500;
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }

                .hero__title-gradient {
                    background: linear-gradient(90deg, #fde047, #eab308, #ca8a04);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero__subtitle {
                    font-size: 1.125rem;
                    color: #d4d4d4;
                    max-width: 36rem;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .hero__scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid rgba(234, 179, 8, 0.5);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                    padding-top: 0.5rem;
                    box-sizing: border-box;
                    animation: bounce 1s infinite;
                }

                .hero__scroll-dot {
                    width: 0.25rem;
                    height: 0.5rem;
                    background: #eab308;
                    border-radius: 9999px;
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }

                @media (min-width: 768px) {
                    .hero__content {
                        text-align: left;
                    }

                    .hero__title {
                        font-size: 4.5rem;
                        max-width: 60%;
                    }

                    .hero__actions {
                        flex-direction: row;
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
    use crate::test_support::render;

    #[tokio::test]
    async fn calls_to_action_point_at_sections() {
        let html = render::<Hero>().await;
        assert!(html.contains("id=\"início\""));
        assert!(html.contains("href=\"#cursos\""));
        assert!(html.contains("href=\"#sobre\""));
        assert!(html.contains(HERO_IMAGE_URL.split('?').next().unwrap_or_default()));
    }
}
