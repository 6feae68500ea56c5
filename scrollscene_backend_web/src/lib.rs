// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for scrollscene.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`WindowListeners`]: `scroll`/`resize` listeners removed on drop
//! - [`DomDocument`]: geometry reads and class/style presentation on the
//!   live DOM
//! - [`PageBinding`]: all of the above wired to an
//!   [`AnimationController`](scrollscene_core::controller::AnimationController)

#![no_std]

extern crate alloc;

mod binding;
mod document;
mod listeners;
mod presenter;
mod raf;

pub use binding::PageBinding;
pub use document::DomDocument;
pub use listeners::WindowListeners;
pub use raf::RafLoop;
pub use scrollscene_core::backend::Presenter;

use scrollscene_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in microsecond
/// ticks.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}
