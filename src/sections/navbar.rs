use yew::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::content::ContentCatalog;
use crate::state::{PageAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub state: ViewState,
    pub catalog: &'static ContentCatalog,
    pub on_action: Callback<PageAction>,
}

/// What each navbar control sends to the page reducer.
pub struct NavHandlers {
    pub toggle: Callback<()>,
    pub overlay_link: Callback<()>,
}

impl NavHandlers {
    pub fn new(on_action: &Callback<PageAction>) -> Self {
        Self {
            toggle: on_action.reform(|_: ()| PageAction::ToggleMenu),
            overlay_link: on_action.reform(|_: ()| PageAction::CloseMenu),
        }
    }
}

pub fn nav_variant(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar--scrolled"
    } else {
        "navbar--transparent"
    }
}

pub fn toggle_glyph(menu_open: bool) -> Glyph {
    if menu_open {
        Glyph::Close
    } else {
        Glyph::Menu
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { state, catalog, on_action } = props;
    let handlers = NavHandlers::new(on_action);

    let toggle_menu = handlers.toggle.reform(|_: MouseEvent| ());
    // Overlay links keep their default action so the anchor still scrolls.
    let close_menu = handlers.overlay_link.reform(|_: MouseEvent| ());

    html! {
        <nav class={classes!("navbar", nav_variant(state.scrolled))}>
            <div class="navbar__content">
                <div class="navbar__brand">
                    {"Dra. Val "}<span class="accent">{"Rangel"}</span>
                </div>

                <div class="navbar__links">
                    {
                        catalog.nav_items.iter().map(|item| html! {
                            <a href={item.href()} class="navbar__link">{item.label}</a>
                        }).collect::<Html>()
                    }
                    <a href={catalog.contact_item.href()} class="navbar__contact">{"Fale Comigo"}</a>
                </div>

                <button class="navbar__toggle" onclick={toggle_menu}>
                    <Icon glyph={toggle_glyph(state.menu_open)} />
                </button>
            </div>

            {
                if state.menu_open {
                    html! {
                        <div class="navbar__overlay">
                            {
                                catalog.overlay_items().map(|item| html! {
                                    <a href={item.href()} class="navbar__overlay-link" onclick={close_menu.clone()}>
                                        {item.label}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .navbar {
                    position: fixed;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }

                .navbar--transparent {
                    background: transparent;
                    padding: 1.5rem 0;
                }

                .navbar--scrolled {
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(12px);
                    padding: 1rem 0;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.5);
                    border-bottom: 1px solid #262626;
                }

                .navbar__content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .navbar__brand {
                    font-family: serif;
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                }

                .navbar__links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .navbar__link {
                    color: #fff;
                    text-decoration: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    transition: color 0.2s;
                }

                .navbar__link:hover {
                    color: #eab308;
                }

                .navbar__contact {
                    background: #eab308;
                    color: #000;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-decoration: none;
                }

                .navbar__toggle {
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }

                .navbar__overlay {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    background: #000;
                    border-bottom: 1px solid #262626;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    box-sizing: border-box;
                }

                .navbar__overlay-link {
                    color: #fff;
                    text-decoration: none;
                    font-family: serif;
                    font-size: 1.125rem;
                    border-bottom: 1px solid #262626;
                    padding-bottom: 0.5rem;
                }

                @media (min-width: 768px) {
                    .navbar__links {
                        display: flex;
                    }

                    .navbar__toggle,
                    .navbar__overlay {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATALOG;
    use crate::test_support::{render_props, ActionLog};
    use pretty_assertions::assert_eq;

    fn props(state: ViewState) -> NavbarProps {
        NavbarProps {
            state,
            catalog: &CATALOG,
            on_action: Callback::noop(),
        }
    }

    #[test]
    fn toggle_button_toggles_and_overlay_link_closes() {
        let log = ActionLog::default();
        let handlers = NavHandlers::new(&log.callback());

        handlers.toggle.emit(());
        assert_eq!(log.take(), vec![PageAction::ToggleMenu]);

        handlers.overlay_link.emit(());
        assert_eq!(log.take(), vec![PageAction::CloseMenu]);
    }

    #[test]
    fn variant_and_glyph_follow_state() {
        assert_eq!(nav_variant(false), "navbar--transparent");
        assert_eq!(nav_variant(true), "navbar--scrolled");
        assert_eq!(toggle_glyph(false), Glyph::Menu);
        assert_eq!(toggle_glyph(true), Glyph::Close);
    }

    #[tokio::test]
    async fn closed_menu_renders_no_overlay() {
        let html = render_props::<Navbar>(props(ViewState::default())).await;
        assert!(html.contains("class=\"navbar navbar--transparent\""));
        assert!(html.contains("data-glyph=\"menu\""));
        assert!(!html.contains("class=\"navbar__overlay\""));
        assert_eq!(html.matches("class=\"navbar__link\"").count(), 4);
    }

    #[tokio::test]
    async fn open_menu_lists_sections_and_contact() {
        let state = ViewState::default().toggle_menu();
        let html = render_props::<Navbar>(props(state)).await;
        assert!(html.contains("class=\"navbar__overlay\""));
        assert!(html.contains("data-glyph=\"close\""));
        assert_eq!(html.matches("class=\"navbar__overlay-link\"").count(), 5);
        // Desktop pill plus the overlay entry.
        assert_eq!(html.matches("href=\"#contato\"").count(), 2);
    }

    #[tokio::test]
    async fn scrolled_switches_to_opaque_variant() {
        let state = ViewState::default().on_scroll(120.0);
        let html = render_props::<Navbar>(props(state)).await;
        assert!(html.contains("class=\"navbar navbar--scrolled\""));
        assert!(html.contains("data-glyph=\"menu\""));
    }
}
