use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::Callback;

use crate::state::PageAction;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no global window available")]
    NoWindow,
    #[error("failed to register scroll listener: {0}")]
    Listener(String),
}

/// Hands a scroll offset to the page reducer. Unreadable offsets are dropped.
pub fn report_offset(offset: Option<f64>, on_action: &Callback<PageAction>) {
    if let Some(offset) = offset {
        on_action.emit(PageAction::Scrolled(offset));
    }
}

/// Keeps a `scroll` listener registered on the window for as long as it is
/// alive. Dropping it removes the listener.
pub struct ScrollWatcher {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollWatcher {
    /// Registers the listener and reports the current offset once, so a page
    /// restored mid-scroll starts with the right navbar style.
    pub fn attach(on_action: Callback<PageAction>) -> Result<Self, ScrollError> {
        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;

        let window_clone = window.clone();
        let emit = on_action.clone();
        let callback = Closure::wrap(Box::new(move || {
            let offset = window_clone
                .scroll_y()
                .map_err(|err| debug!("scroll_y unavailable: {:?}", err))
                .ok();
            report_offset(offset, &emit);
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| ScrollError::Listener(format!("{:?}", err)))?;
        info!("Scroll watcher attached");

        report_offset(window.scroll_y().ok(), &on_action);

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        } else {
            info!("Scroll watcher released");
        }
    }
}
