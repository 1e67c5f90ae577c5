use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Window};

use crate::error::PageError;
use crate::scroll::{OffsetHandler, ScrollSource};

const SCROLL_EVENT: &str = "scroll";

/// The browser window as a [`ScrollSource`].
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn current() -> Result<Self, PageError> {
        let window = window().ok_or(PageError::NoWindow)?;
        Ok(Self { window })
    }
}

fn vertical_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

impl ScrollSource for WindowScroll {
    type Listener = Closure<dyn FnMut()>;

    fn offset(&self) -> f64 {
        vertical_offset(&self.window)
    }

    fn subscribe(&self, mut on_offset: OffsetHandler) -> Result<Self::Listener, PageError> {
        let target = self.window.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            on_offset(vertical_offset(&target));
        });

        self.window
            .add_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref())
            .map_err(|err| PageError::dom("add scroll listener", format!("{err:?}")))?;

        Ok(listener)
    }

    fn unsubscribe(&self, listener: Self::Listener) {
        let _ = self
            .window
            .remove_event_listener_with_callback(SCROLL_EVENT, listener.as_ref().unchecked_ref());
    }
}
