// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A backend crate provides the following pieces:
//!
//! - **Frame source**: Produces [`FrameTick`] values once per animation
//!   frame (e.g. `requestAnimationFrame`). Not abstracted by a trait because
//!   setup and lifecycle differ per platform.
//!
//! - **Event source**: Forwards scroll and resize notifications to
//!   [`AnimationController::on_scroll`] and
//!   [`AnimationController::on_resize`]. These only mark the
//!   [frame gate](crate::frame::FrameGate); they never read layout.
//!
//! - **Document**: Implements [`Document`](crate::document::Document) so the
//!   engine can resolve selectors and read geometry.
//!
//! - **Presenter**: Implements [`Presenter`] to apply [`FrameChanges`] to the
//!   platform's element tree.
//!
//! [`FrameTick`]: crate::frame::FrameTick
//! [`AnimationController::on_scroll`]: crate::controller::AnimationController::on_scroll
//! [`AnimationController::on_resize`]: crate::controller::AnimationController::on_resize

use crate::changes::FrameChanges;

/// Applies frame changes to a platform-native element tree.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     // Evaluate: recompute progress for pending scroll/resize work.
///     if let Some(changes) = controller.frame(tick, &mut document, &mut tracer) {
///         // Present: apply class and style mutations.
///         presenter.apply(changes);
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`FrameChanges`], in order.
    fn apply(&mut self, changes: &FrameChanges);
}
