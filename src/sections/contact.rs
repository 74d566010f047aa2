use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::config::WHATSAPP_URL;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contato" class="contact">
            <div class="contact__tint"></div>
            <div class="contact__content">
                <h2 class="contact__title">{"Pronta para se tornar uma referência em Estética?"}</h2>
                <p class="contact__subtitle">{"Garanta sua vaga na próxima turma ou agende sua mentoria."}</p>
                <a href={WHATSAPP_URL} target="_blank" rel="noreferrer" class="contact__whatsapp">
                    <Icon glyph={Glyph::Phone} />
                    {"Chamar no WhatsApp"}
                </a>
            </div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 6rem 0;
                }

                .contact__tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(202, 138, 4, 0.1);
                }

                .contact__content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .contact__title {
                    font-family: serif;
                    font-size: 2.25rem;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                }

                .contact__subtitle {
                    font-size: 1.25rem;
                    color: #d4d4d4;
                    margin-bottom: 2.5rem;
                }

                .contact__whatsapp {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    border-radius: 9999px;
                    background: #16a34a;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: all 0.3s;
                    box-shadow: 0 20px 25px rgba(20, 83, 45, 0.2);
                }

                .contact__whatsapp:hover {
                    background: #22c55e;
                    transform: scale(1.05);
                }

                @media (min-width: 768px) {
                    .contact__title {
                        font-size: 3.75rem;
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
    async fn whatsapp_opens_in_new_context() {
        let html = render::<Contact>().await;
        assert!(html.contains("id=\"contato\""));
        assert!(html.contains(&format!("href=\"{}\"", WHATSAPP_URL)));
        assert!(html.contains("target=\"_blank\""));
    }
}
