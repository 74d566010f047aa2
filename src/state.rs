use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::SCROLL_THRESHOLD_PX;

/// The only mutable state on the page. Both flags are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub menu_open: bool,
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
}

pub fn is_past_threshold(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

impl ViewState {
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn on_scroll(self, offset_y: f64) -> Self {
        Self {
            scrolled: is_past_threshold(offset_y),
            ..self
        }
    }

    pub fn apply(self, action: PageAction) -> Self {
        match action {
            PageAction::ToggleMenu => self.toggle_menu(),
            PageAction::CloseMenu => self.close_menu(),
            PageAction::Scrolled(offset_y) => self.on_scroll(offset_y),
        }
    }
}

impl Reducible for ViewState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // Scroll events fire continuously; keep the same Rc so nothing re-renders.
            return self;
        }
        debug!("{:?}: {:?} -> {:?}", action, *self, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn starts_closed_and_transparent() {
        assert_eq!(
            ViewState::default(),
            ViewState {
                menu_open: false,
                scrolled: false
            }
        );
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(49.0, false)]
    #[case(50.0, false)]
    #[case(51.0, true)]
    #[case(120.0, true)]
    #[case(1000.0, true)]
    fn scrolled_tracks_threshold(#[case] offset_y: f64, #[case] expected: bool) {
        assert_eq!(ViewState::default().on_scroll(offset_y).scrolled, expected);
        let already_scrolled = ViewState {
            scrolled: true,
            ..ViewState::default()
        };
        assert_eq!(already_scrolled.on_scroll(offset_y).scrolled, expected);
    }

    #[rstest]
    #[case(ViewState::default())]
    #[case(ViewState { menu_open: true, scrolled: false })]
    #[case(ViewState { menu_open: false, scrolled: true })]
    #[case(ViewState { menu_open: true, scrolled: true })]
    fn toggle_twice_is_identity(#[case] state: ViewState) {
        assert_eq!(state.toggle_menu().toggle_menu(), state);
        assert_ne!(state.toggle_menu().menu_open, state.menu_open);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn close_always_leaves_menu_closed(#[case] menu_open: bool) {
        let state = ViewState {
            menu_open,
            scrolled: true,
        };
        assert_eq!(
            state.close_menu(),
            ViewState {
                menu_open: false,
                scrolled: true
            }
        );
    }

    #[test]
    fn scrolling_leaves_menu_untouched() {
        let open = ViewState::default().toggle_menu();
        let scrolled = open.apply(PageAction::Scrolled(120.0));
        assert!(scrolled.menu_open);
        assert!(scrolled.scrolled);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let same = state.clone().reduce(PageAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let same = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn reducer_allocates_on_change() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(PageAction::Scrolled(51.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.scrolled);

        let opened = next.reduce(PageAction::ToggleMenu);
        assert!(opened.menu_open);
        let closed = opened.reduce(PageAction::CloseMenu);
        assert!(!closed.menu_open);
        assert!(closed.scrolled);
    }
}
