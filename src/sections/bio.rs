use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::config::{INSTAGRAM_HANDLE, INSTAGRAM_URL, PORTRAIT_IMAGE_URL};

#[derive(Properties, PartialEq)]
pub struct BioProps {
    pub points: &'static [&'static str],
}

#[function_component(Bio)]
pub fn bio(props: &BioProps) -> Html {
    html! {
        <section id="sobre" class="bio">
            <div class="bio__glow"></div>

            <div class="bio__content">
                <div class="bio__portrait">
                    <div class="bio__frame"></div>
                    <img src={PORTRAIT_IMAGE_URL} alt="Dra Val Rangel" class="bio__image" />
                    <div class="bio__badge">
                        <div class="bio__badge-title">
                            <Icon glyph={Glyph::Award} class="accent" />
                            <span>{"CEO Renove"}</span>
                        </div>
                        <p>{"Referência em rejuvenescimento facial com naturalidade."}</p>
                    </div>
                </div>

                <div class="bio__text">
                    <span class="bio__eyebrow">{"Quem Sou Eu"}</span>
                    <h2 class="bio__name">{"Dra. Val Rangel"}</h2>
                    <p class="bio__intro">
                        {"Biomédica Esteta e docente do ensino superior, dedico minha carreira a elevar o padrão da estética no Brasil. Minha missão é formar profissionais capazes de entregar resultados de excelência e naturalidade."}
                    </p>

                    <ul class="bio__points">
                        {
                            props.points.iter().map(|point| html! {
                                <li class="bio__point">
                                    <span class="bio__bullet"></span>
                                    {*point}
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>

                    <div class="bio__footer">
                        <div>
                            <p class="bio__clinic">{"Renove"}</p>
                            <p class="bio__clinic-kind">{"Clínica de Estética"}</p>
                        </div>
                        <a href={INSTAGRAM_URL} target="_blank" rel="noreferrer" class="bio__social">
                            <Icon glyph={Glyph::Instagram} />
                            {INSTAGRAM_HANDLE}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .bio {
                    position: relative;
                    padding: 6rem 0;
                    background: #000;
                    overflow: hidden;
                }

                .bio__glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 33%;
                    height: 100%;
                    background: rgba(234, 179, 8, 0.05);
                    filter: blur(120px);
                }

                .bio__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 4rem;
                }

                .bio__portrait {
                    position: relative;
                    width: 100%;
                }

                .bio__frame {
                    position: absolute;
                    inset: -1rem;
                    border: 1px solid rgba(234, 179, 8, 0.3);
                    border-radius: 9999px;
                }

                .bio__image {
                    position: relative;
                    width: 100%;
                    height: 600px;
                    object-fit: cover;
                    border-radius: 1.5rem;
                    filter: grayscale(100%);
                    transition: filter 0.7s;
                }

                .bio__image:hover {
                    filter: none;
                }

                .bio__badge {
                    position: absolute;
                    bottom: 2.5rem;
                    right: -1.5rem;
                    max-width: 200px;
                    background: #171717;
                    padding: 1.5rem;
                    border: 1px solid #eab308;
                    border-radius: 0.75rem;
                    font-size: 0.75rem;
                    color: #a3a3a3;
                }

                .bio__badge-title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    font-size: 1rem;
                    color: #fff;
                }

                .bio__eyebrow {
                    display: block;
                    color: #eab308;
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }

                .bio__name {
                    font-family: serif;
                    font-size: 2.25rem;
                    margin-bottom: 2rem;
                }

                .bio__intro {
                    color: #a3a3a3;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .bio__points {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .bio__point {
                    display: flex;
                    align-items: center;
                    color: #d4d4d4;
                }

                .bio__bullet {
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-right: 1rem;
                    border-radius: 9999px;
                    background: #eab308;
                    box-shadow: 0 0 0 0.5rem rgba(234, 179, 8, 0.2);
                }

                .bio__footer {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #262626;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .bio__clinic {
                    font-family: serif;
                    font-size: 1.5rem;
                }

                .bio__clinic-kind {
                    font-size: 0.75rem;
                    color: #737373;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .bio__social {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #eab308;
                    text-decoration: none;
                }

                @media (min-width: 768px) {
                    .bio__content {
                        flex-direction: row;
                    }

                    .bio__portrait,
                    .bio__text {
                        width: 50%;
                    }

                    .bio__name {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
