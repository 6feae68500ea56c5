// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll scenes.
//!
//! A *scene* ties an action to a stretch of scrolling. Each scene has:
//!
//! - An identity ([`SceneId`]), a generational handle that becomes stale when
//!   the scene is removed.
//! - A declarative [`SceneSpec`]: trigger selector, trigger hook, offset,
//!   duration and action, each of them [`Responsive`](crate::viewport::Responsive)
//!   so one spec covers every viewport class.
//! - An [`ActivationWindow`] measured from layout, mapping the scroll offset
//!   to progress in `0.0..=1.0`.
//!
//! # Dirty tracking
//!
//! Registration, resizes and viewport class changes never read layout
//! outside [`SceneRegistry::register`]. They mark the
//! [`RESOLVE`](crate::dirty::RESOLVE) and [`MEASURE`](crate::dirty::MEASURE)
//! channels instead, and [`SceneRegistry::evaluate`] settles the marks once
//! per frame.

mod config;
mod evaluate;
mod id;
mod progress;
mod store;

pub use config::{DurationExtension, Length, SceneSpec};
pub use evaluate::FrameContext;
pub use id::SceneId;
pub use progress::{ActivationWindow, ScrollDirection};
pub use store::{MAX_ATTEMPTS, ProgressUpdate, SceneRegistry, SceneState};
