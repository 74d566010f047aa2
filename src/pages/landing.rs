use log::{info, warn};
use yew::prelude::*;

use crate::clock::{Clock, ClockHandle};
use crate::content::{ContentCatalog, CATALOG};
use crate::scroll::ScrollWatcher;
use crate::sections::{
    bio::Bio, contact::Contact, courses::Courses, footer::Footer, hero::Hero,
    methodology::Methodology, navbar::Navbar, stats::StatsStrip, testimonials::Testimonials,
};
use crate::state::{PageAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    #[prop_or(&CATALOG)]
    pub catalog: &'static ContentCatalog,
    #[prop_or_default]
    pub clock: ClockHandle,
}

/// Owns the page state and the scroll listener; everything visible is
/// delegated to [`PageView`].
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let state = use_reducer_eq(ViewState::default);

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: PageAction| dispatcher.dispatch(action))
    };

    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = match ScrollWatcher::attach(on_action) {
                    Ok(watcher) => Some(watcher),
                    Err(err) => {
                        warn!("Navbar will stay transparent: {}", err);
                        None
                    }
                };
                move || drop(watcher)
            },
            (), // Attach once on mount, release on unmount
        );
    }

    html! {
        <PageView
            state={*state}
            catalog={props.catalog}
            year={props.clock.current_year()}
            on_action={on_action}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub state: ViewState,
    pub catalog: &'static ContentCatalog,
    pub year: i32,
    pub on_action: Callback<PageAction>,
}

/// The whole document for a given state. Holds no state of its own.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let PageViewProps { state, catalog, year, on_action } = props;

    html! {
        <div class="page">
            <Navbar
                state={*state}
                catalog={*catalog}
                on_action={on_action.clone()}
            />
            <Hero />
            <StatsStrip stats={catalog.stats} />
            <Bio points={catalog.bio_points} />
            <Courses courses={catalog.courses} contact={catalog.contact_item} />
            <Methodology highlights={catalog.highlights} />
            <Testimonials testimonials={catalog.testimonials} />
            <Contact />
            <Footer year={*year} />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: system-ui, sans-serif;
                }

                .page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }

                .page ::selection {
                    background: #eab308;
                    color: #000;
                }

                .accent {
                    color: #eab308;
                }

                .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    display: inline-block;
                    vertical-align: middle;
                }

                .cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    text-align: center;
                    text-decoration: none;
                    transition: all 0.3s ease;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }

                .cta:hover {
                    transform: scale(1.05);
                }

                .cta--primary {
                    background: linear-gradient(90deg, #ca8a04, #eab308, #facc15);
                    color: #000;
                }

                .cta--outline {
                    border: 2px solid #eab308;
                    color: #eab308;
                }

                .cta--outline:hover {
                    background: #eab308;
                    color: #000;
                }

                .section-title {
                    text-align: center;
                    margin-bottom: 4rem;
                    padding: 0 1rem;
                }

                .section-title__eyebrow {
                    display: block;
                    color: #eab308;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }

                .section-title__heading {
                    font-family: serif;
                    font-size: 2.25rem;
                    font-weight: 500;
                }

                .section-title__rule {
                    width: 6rem;
                    height: 0.25rem;
                    background: #eab308;
                    margin: 1.5rem auto 0;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    info!("Rendering landing page");
    html! { <LandingPage /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::clock::FixedClock;
    use crate::sections::navbar::NavHandlers;
    use crate::scroll::report_offset;
    use crate::test_support::{render, render_props, ActionLog};
    use pretty_assertions::assert_eq;

    async fn page(state: ViewState) -> String {
        render_props::<PageView>(PageViewProps {
            state,
            catalog: &CATALOG,
            year: 2024,
            on_action: Callback::noop(),
        })
        .await
    }

    fn in_page_targets(html: &str) -> Vec<String> {
        html.split("href=\"#")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn render_is_idempotent() {
        for state in [
            ViewState::default(),
            ViewState { menu_open: true, scrolled: true },
        ] {
            assert_eq!(page(state).await, page(state).await);
        }
    }

    #[tokio::test]
    async fn sections_appear_in_order() {
        let html = page(ViewState::default()).await;
        let order = [
            "class=\"navbar",
            "id=\"início\"",
            "class=\"stats\"",
            "id=\"sobre\"",
            "id=\"cursos\"",
            "class=\"methodology\"",
            "id=\"depoimentos\"",
            "id=\"contato\"",
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.iter().all(|&p| p != usize::MAX), "{positions:?}");
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[tokio::test]
    async fn every_in_page_link_has_a_target() {
        let html = page(ViewState { menu_open: true, scrolled: false }).await;
        let targets = in_page_targets(&html);
        assert!(!targets.is_empty());
        for target in targets {
            assert!(html.contains(&format!("id=\"{}\"", target)), "missing #{}", target);
        }
    }

    #[tokio::test]
    async fn courses_and_testimonials_have_fixed_counts() {
        let html = page(ViewState::default()).await;
        assert_eq!(html.matches("class=\"course-card\"").count(), 3);
        assert_eq!(html.matches("class=\"course-card__badge\"").count(), 2);
        assert_eq!(html.matches("class=\"testimonial\"").count(), 3);
    }

    #[tokio::test]
    async fn load_scroll_open_and_close() {
        let log = ActionLog::default();
        let on_action = log.callback();
        let handlers = NavHandlers::new(&on_action);

        // Initial load
        let state = Rc::new(ViewState::default());
        let html = page(*state).await;
        assert!(html.contains("class=\"navbar navbar--transparent\""));
        assert!(html.contains("data-glyph=\"menu\""));
        assert!(!html.contains("class=\"navbar__overlay\""));

        // Scroll past the threshold
        report_offset(Some(120.0), &on_action);
        let state = log.replay(state);
        assert_eq!(*state, ViewState { menu_open: false, scrolled: true });
        let html = page(*state).await;
        assert!(html.contains("class=\"navbar navbar--scrolled\""));
        assert!(!html.contains("class=\"navbar__overlay\""));

        // Press the menu button
        handlers.toggle.emit(());
        let state = log.replay(state);
        assert!(state.menu_open);
        let html = page(*state).await;
        assert!(html.contains("data-glyph=\"close\""));
        assert_eq!(html.matches("class=\"navbar__overlay-link\"").count(), 5);

        // Follow an overlay link
        handlers.overlay_link.emit(());
        let state = log.replay(state);
        assert_eq!(*state, ViewState { menu_open: false, scrolled: true });
        let html = page(*state).await;
        assert!(!html.contains("class=\"navbar__overlay\""));
        assert!(html.contains("data-glyph=\"menu\""));
    }

    #[test]
    fn menu_button_pressed_twice_closes_again() {
        let log = ActionLog::default();
        let handlers = NavHandlers::new(&log.callback());

        handlers.toggle.emit(());
        handlers.toggle.emit(());
        let state = log.replay(Rc::new(ViewState::default()));
        assert_eq!(*state, ViewState::default());
    }

    #[test]
    fn overlay_link_on_closed_menu_stays_closed() {
        let log = ActionLog::default();
        let handlers = NavHandlers::new(&log.callback());

        handlers.overlay_link.emit(());
        let state = log.replay(Rc::new(ViewState::default()));
        assert!(!state.menu_open);
    }

    #[tokio::test]
    async fn footer_uses_injected_clock() {
        let html = render_props::<LandingPage>(LandingPageProps {
            catalog: &CATALOG,
            clock: ClockHandle::new(FixedClock(2031)),
        })
        .await;
        assert!(html.contains("© 2031 "));
        assert!(html.contains("class=\"navbar navbar--transparent\""));
    }

    #[tokio::test]
    async fn app_starts_closed_and_transparent() {
        let html = render::<App>().await;
        assert!(html.contains("class=\"navbar navbar--transparent\""));
        assert!(!html.contains("class=\"navbar__overlay\""));
    }
}
