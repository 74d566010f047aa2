use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            <span class="section-title__eyebrow">{&props.subtitle}</span>
            <h2 class="section-title__heading">{&props.title}</h2>
            <div class="section-title__rule"></div>
        </div>
    }
}
