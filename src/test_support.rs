use std::cell::RefCell;
use std::rc::Rc;

use yew::{BaseComponent, Callback, LocalServerRenderer, Reducible};

use crate::state::{PageAction, ViewState};

/// Renders a component to plain HTML, without hydration markers.
pub async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default,
{
    LocalServerRenderer::<C>::new().hydratable(false).render().await
}

pub async fn render_props<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    LocalServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// Records the actions a component hands to its reducer callback.
#[derive(Clone, Default)]
pub struct ActionLog(Rc<RefCell<Vec<PageAction>>>);

impl ActionLog {
    pub fn callback(&self) -> Callback<PageAction> {
        let log = self.0.clone();
        Callback::from(move |action| log.borrow_mut().push(action))
    }

    pub fn take(&self) -> Vec<PageAction> {
        self.0.borrow_mut().drain(..).collect()
    }

    /// Feeds every recorded action through the reducer, as the page would.
    pub fn replay(&self, state: Rc<ViewState>) -> Rc<ViewState> {
        self.take()
            .into_iter()
            .fold(state, |state, action| state.reduce(action))
    }
}
