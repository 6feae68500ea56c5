// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The [`SceneRegistry`](crate::scene::SceneRegistry) uses multi-channel dirty
//! tracking (via [`understory_dirty`]) to defer layout work to the next frame.
//! Scenes have no dependency edges between them, so every channel is
//! local-only: a drain yields exactly the scenes that were marked.
//!
//! - [`RESOLVE`]: the scene's action must be bound to elements again
//!   (registration, viewport class change, or a transient failure while
//!   resolving).
//! - [`MEASURE`]: the scene's activation window must be recomputed from
//!   layout (registration, resize, duration extension, or a transient
//!   failure while measuring).
//!
//! Both channels are drained once per evaluation, `RESOLVE` first, so that a
//! scene whose action changed is measured against its new targets.

use understory_dirty::Channel;

/// Action selectors must be re-resolved.
pub const RESOLVE: Channel = Channel::new(0);

/// Trigger geometry must be re-measured.
pub const MEASURE: Channel = Channel::new(1);
