use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::components::section_title::SectionTitle;
use crate::content::Testimonial;

/// Every testimonial shows a full rating; it is not part of the record.
pub const RATING_MARKS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: &'static [Testimonial],
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section id="depoimentos" class="testimonials">
            <div class="testimonials__content">
                <SectionTitle title="O que dizem as alunas" subtitle="Feedbacks" />

                <div class="testimonials__grid">
                    {
                        props.testimonials.iter().map(|testimonial| html! {
                            <div class="testimonial">
                                <div class="testimonial__rating">
                                    {
                                        (0..RATING_MARKS).map(|_| html! {
                                            <Icon glyph={Glyph::Star} filled={true} />
                                        }).collect::<Html>()
                                    }
                                </div>
                                <p class="testimonial__quote">{format!("\"{}\"", testimonial.quote)}</p>
                                <div class="testimonial__author">
                                    <div class="testimonial__avatar"></div>
                                    <div>
                                        <p class="testimonial__name">{testimonial.author}</p>
                                        <p class="testimonial__role">{testimonial.role}</p>
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 6rem 0;
                    background: linear-gradient(to bottom, #0a0a0a, #000);
                }

                .testimonials__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .testimonials__grid {
                    display: grid;
                    gap: 2rem;
                }

                .testimonial {
                    background: rgba(23, 23, 23, 0.5);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #262626;
                }

                .testimonial__rating {
                    display: flex;
                    color: #eab308;
                    margin-bottom: 1rem;
                }

                .testimonial__rating .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .testimonial__quote {
                    color: #d4d4d4;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }

                .testimonial__author {
                    display: flex;
                    align-items: center;
                }

                .testimonial__avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #404040;
                    margin-right: 0.75rem;
                }

                .testimonial__name {
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .testimonial__role {
                    font-size: 0.75rem;
                    color: #737373;
                }

                @media (min-width: 768px) {
                    .testimonials__grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
