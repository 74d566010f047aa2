use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CtaStyle {
    #[default]
    Primary,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct CtaLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub variant: CtaStyle,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Pill-shaped call to action. Navigates with a plain link, so in-page
/// anchors need no handler.
#[function_component(CtaLink)]
pub fn cta_link(props: &CtaLinkProps) -> Html {
    let variant = match props.variant {
        CtaStyle::Primary => "cta--primary",
        CtaStyle::Outline => "cta--outline",
    };

    html! {
        <a href={props.href.clone()} class={classes!("cta", variant, props.class.clone())}>
            { for props.children.iter() }
        </a>
    }
}
