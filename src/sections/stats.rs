use yew::prelude::*;

use crate::content::Stat;

#[derive(Properties, PartialEq)]
pub struct StatsStripProps {
    pub stats: &'static [Stat],
}

#[function_component(StatsStrip)]
pub fn stats_strip(props: &StatsStripProps) -> Html {
    html! {
        <div class="stats">
            <div class="stats__grid">
                {
                    props.stats.iter().map(|stat| html! {
                        <div class="stats__cell">
                            <div class="stats__number">{stat.number}</div>
                            <div class="stats__label">{stat.label}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .stats {
                    background: #171717;
                    border-top: 1px solid #262626;
                    border-bottom: 1px solid #262626;
                    position: relative;
                    z-index: 30;
                }

                .stats__grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    text-align: center;
                }

                .stats__number {
                    font-family: serif;
                    font-size: 1.875rem;
                    color: #eab308;
                    margin-bottom: 0.5rem;
                }

                .stats__label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #a3a3a3;
                }

                @media (min-width: 768px) {
                    .stats__grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
