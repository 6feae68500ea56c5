// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Removable window event listeners.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Window;

type Handler = Closure<dyn FnMut()>;

/// `scroll` and `resize` listeners on the window.
///
/// Both listeners are removed when this value is dropped.
pub struct WindowListeners {
    window: Window,
    scroll: Handler,
    resize: Handler,
}

impl WindowListeners {
    /// Registers `on_scroll` and `on_resize` on `window`.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if registration fails. Nothing stays
    /// registered in that case.
    pub fn attach(
        window: &Window,
        on_scroll: impl FnMut() + 'static,
        on_resize: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let scroll = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        let resize = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", Self::callback(&scroll))?;
        if let Err(e) = window.add_event_listener_with_callback("resize", Self::callback(&resize)) {
            let _ = window.remove_event_listener_with_callback("scroll", Self::callback(&scroll));
            return Err(e);
        }
        Ok(Self {
            window: window.clone(),
            scroll,
            resize,
        })
    }

    fn callback(handler: &Handler) -> &js_sys::Function {
        handler.as_ref().unchecked_ref()
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", Self::callback(&self.scroll));
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", Self::callback(&self.resize));
    }
}

impl core::fmt::Debug for WindowListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowListeners").finish_non_exhaustive()
    }
}
