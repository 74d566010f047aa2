use yew::prelude::*;

use crate::config::METHODOLOGY_IMAGE_URL;
use crate::content::Highlight;

#[derive(Properties, PartialEq)]
pub struct MethodologyProps {
    pub highlights: &'static [Highlight],
}

#[function_component(Methodology)]
pub fn methodology(props: &MethodologyProps) -> Html {
    html! {
        <section class="methodology">
            <div class="methodology__panel">
                <div class="methodology__text">
                    <h3 class="methodology__title">{"Metodologia Hands-on"}</h3>
                    <p class="methodology__body">
                        {"Acreditamos que a estética se aprende fazendo. Nossos cursos priorizam a prática clínica supervisionada, garantindo que você saia pronta para o mercado de trabalho."}
                    </p>
                    <div class="methodology__highlights">
                        {
                            props.highlights.iter().map(|highlight| html! {
                                <div class="methodology__highlight">
                                    <h4>{highlight.title}</h4>
                                    <p>{highlight.text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="methodology__media">
                    <img src={METHODOLOGY_IMAGE_URL} alt="Procedimento Estético" />
                </div>
            </div>

            <style>
                {r#"
                .methodology {
                    padding: 6rem 1.5rem;
                    background: #000;
                    overflow: hidden;
                }

                .methodology__panel {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    background: #171717;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }

                .methodology__text {
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .methodology__title {
                    font-family: serif;
                    font-size: 1.875rem;
                    margin-bottom: 1.5rem;
                }

                .methodology__body {
                    color: #a3a3a3;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .methodology__highlights {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }

                .methodology__highlight h4 {
                    color: #eab308;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 0.25rem;
                }

                .methodology__highlight p {
                    font-size: 0.875rem;
                    color: #737373;
                }

                .methodology__media {
                    position: relative;
                    min-height: 400px;
                }

                .methodology__media img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }

                .methodology__media img:hover {
                    transform: scale(1.05);
                }

                @media (min-width: 768px) {
                    .methodology__panel {
                        flex-direction: row;
                    }

                    .methodology__text,
                    .methodology__media {
                        width: 50%;
                    }

                    .methodology__text {
                        padding: 5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
