use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::config::INSTAGRAM_HANDLE;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="footer__content">
                <div class="footer__grid">
                    <div class="footer__about">
                        <div class="footer__brand">
                            {"Dra. Val "}<span class="accent">{"Rangel"}</span>
                        </div>
                        <p>
                            {"Transformando profissionais através do conhecimento e da técnica refinada. Referência em pós-graduação e cursos de extensão."}
                        </p>
                    </div>

                    <div>
                        <h4 class="footer__heading">{"Links Rápidos"}</h4>
                        <ul class="footer__list">
                            <li><a href="#cursos">{"Cursos"}</a></li>
                            <li><a href="#sobre">{"Sobre"}</a></li>
                            <li><a href="#depoimentos">{"Alunas"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer__heading">{"Contato"}</h4>
                        <ul class="footer__list">
                            <li><Icon glyph={Glyph::MapPin} class="accent" />{"Clínica Renove"}</li>
                            <li><Icon glyph={Glyph::Instagram} class="accent" />{INSTAGRAM_HANDLE}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p class="footer__copyright">
                        {format!("© {} Dra. Val Rangel. Todos os direitos reservados.", props.year)}
                    </p>
                    <p>{"Desenvolvido com excelência."}</p>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    background: #0a0a0a;
                    border-top: 1px solid #171717;
                    padding: 4rem 0 2rem;
                }

                .footer__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .footer__grid {
                    display: grid;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }

                .footer__about p {
                    color: #a3a3a3;
                    max-width: 24rem;
                }

                .footer__brand {
                    font-family: serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .footer__heading {
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .footer__list {
                    list-style: none;
                    padding: 0;
                    color: #a3a3a3;
                }

                .footer__list li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }

                .footer__list a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer__list a:hover {
                    color: #eab308;
                }

                .footer__list .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .footer__bottom {
                    border-top: 1px solid #171717;
                    padding-top: 2rem;
                    color: #525252;
                    font-size: 0.875rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                @media (min-width: 768px) {
                    .footer__grid {
                        grid-template-columns: 2fr 1fr 1fr;
                    }

                    .footer__bottom {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
