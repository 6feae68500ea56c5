// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wires an [`AnimationController`] to the browser.

use alloc::rc::Rc;
use core::cell::RefCell;

use scrollscene_core::backend::Presenter as _;
use scrollscene_core::controller::AnimationController;
use scrollscene_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsValue;

use crate::document::DomDocument;
use crate::listeners::WindowListeners;
use crate::raf::RafLoop;

/// A controller attached to a page.
///
/// Scroll and resize listeners forward to the controller's frame gate; a
/// [`RafLoop`] evaluates it once per frame and presents the result into the
/// [`DomDocument`]. Dropping the binding removes the listeners, stops the
/// loop and tears the controller down.
pub struct PageBinding {
    controller: Rc<RefCell<AnimationController>>,
    document: Rc<RefCell<DomDocument>>,
    raf: RafLoop,
    _listeners: WindowListeners,
}

impl PageBinding {
    /// Attaches `controller` to the window behind `document` and starts the
    /// frame loop. Trace events go to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if the listeners cannot be
    /// registered.
    pub fn attach(
        controller: Rc<RefCell<AnimationController>>,
        document: Rc<RefCell<DomDocument>>,
        mut sink: impl TraceSink + 'static,
    ) -> Result<Self, JsValue> {
        let window = document.borrow().window().clone();
        let listeners = {
            let on_scroll = Rc::clone(&controller);
            let on_resize = Rc::clone(&controller);
            WindowListeners::attach(
                &window,
                move || {
                    if let Ok(mut c) = on_scroll.try_borrow_mut() {
                        c.on_scroll();
                    }
                },
                move || {
                    if let Ok(mut c) = on_resize.try_borrow_mut() {
                        c.on_resize();
                    }
                },
            )?
        };

        let raf = {
            let controller = Rc::clone(&controller);
            let document = Rc::clone(&document);
            RafLoop::new(move |tick| {
                let (Ok(mut controller), Ok(mut document)) =
                    (controller.try_borrow_mut(), document.try_borrow_mut())
                else {
                    return;
                };
                let mut tracer = Tracer::new(&mut sink);
                if let Some(changes) = controller.frame(tick, &mut *document, &mut tracer) {
                    document.apply(changes);
                }
            })
        };
        raf.start();

        Ok(Self {
            controller,
            document,
            raf,
            _listeners: listeners,
        })
    }

    /// The attached controller.
    #[must_use]
    pub fn controller(&self) -> &Rc<RefCell<AnimationController>> {
        &self.controller
    }

    /// Pauses frame evaluation. Events keep accumulating.
    pub fn pause(&self) {
        self.raf.stop();
    }

    /// Resumes frame evaluation.
    pub fn resume(&self) {
        self.raf.start();
    }
}

impl Drop for PageBinding {
    fn drop(&mut self) {
        self.raf.stop();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.teardown();
        }
        if let Ok(mut document) = self.document.try_borrow_mut() {
            document.clear();
        }
    }
}

impl core::fmt::Debug for PageBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageBinding")
            .field("raf", &self.raf)
            .finish_non_exhaustive()
    }
}
