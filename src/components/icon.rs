use yew::prelude::*;

/// Line glyphs drawn on a 24x24 grid with the current text colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Close,
    CheckCircle,
    Star,
    Award,
    GraduationCap,
    MapPin,
    Instagram,
    ChevronRight,
    Phone,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Menu => "menu",
            Glyph::Close => "close",
            Glyph::CheckCircle => "check-circle",
            Glyph::Star => "star",
            Glyph::Award => "award",
            Glyph::GraduationCap => "graduation-cap",
            Glyph::MapPin => "map-pin",
            Glyph::Instagram => "instagram",
            Glyph::ChevronRight => "chevron-right",
            Glyph::Phone => "phone",
        }
    }

    fn shapes(self) -> Html {
        match self {
            Glyph::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="6" y2="6" />
                    <line x1="4" x2="20" y1="12" y2="12" />
                    <line x1="4" x2="20" y1="18" y2="18" />
                </>
            },
            Glyph::Close => html! {
                <>
                    <path d="M18 6 6 18" />
                    <path d="m6 6 12 12" />
                </>
            },
            Glyph::CheckCircle => html! {
                <>
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                    <polyline points="22 4 12 14.01 9 11.01" />
                </>
            },
            Glyph::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            Glyph::Award => html! {
                <>
                    <circle cx="12" cy="8" r="6" />
                    <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
                </>
            },
            Glyph::GraduationCap => html! {
                <>
                    <path d="M22 10v6M2 10l10-5 10 5-10 5z" />
                    <path d="M6 12v5c3 3 9 3 12 0v-5" />
                </>
            },
            Glyph::MapPin => html! {
                <>
                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            Glyph::Instagram => html! {
                <>
                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            Glyph::ChevronRight => html! {
                <path d="m9 18 6-6-6-6" />
            },
            Glyph::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the shape as well as stroking it (rating stars).
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            data-glyph={props.glyph.name()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { props.glyph.shapes() }
        </svg>
    }
}
