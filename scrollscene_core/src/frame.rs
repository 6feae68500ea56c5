// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks and scroll/resize coalescing.
//!
//! Browsers deliver `scroll` events far more often than frames are drawn.
//! Reading layout in every handler forces redundant style recalculation, so
//! handlers only mark a [`FrameGate`]. Once per animation frame the
//! controller [takes](FrameGate::take) whatever accumulated and evaluates
//! at most once.
//!
//! ```text
//!   scroll ─┐
//!   scroll ─┼─► FrameGate (pending: scroll, resize)
//!   resize ─┘          │
//!                      ▼  once per FrameTick
//!              AnimationController::frame()
//! ```

use crate::time::HostTime;

/// A frame opportunity delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Time of the animation frame.
    pub now: HostTime,
    /// Monotonically increasing frame counter.
    pub frame_index: u64,
}

/// Work accumulated since the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Invalidation {
    /// The window scrolled.
    pub scroll: bool,
    /// The window resized; geometry must be re-measured.
    pub resize: bool,
}

impl Invalidation {
    /// Returns `true` if nothing is pending.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.scroll && !self.resize
    }
}

/// Coalesces scroll and resize notifications into one evaluation per frame.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    pending: Invalidation,
    coalesced: u32,
}

impl FrameGate {
    /// Creates a gate with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event.
    pub fn scroll(&mut self) {
        if self.pending.scroll {
            self.coalesced = self.coalesced.saturating_add(1);
        }
        self.pending.scroll = true;
    }

    /// Records a resize event.
    pub fn resize(&mut self) {
        if self.pending.resize {
            self.coalesced = self.coalesced.saturating_add(1);
        }
        self.pending.resize = true;
    }

    /// Returns what is pending without consuming it.
    #[must_use]
    pub fn pending(&self) -> Invalidation {
        self.pending
    }

    /// Number of events folded into the pending work since the last
    /// [`take`](Self::take).
    #[must_use]
    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }

    /// Consumes the pending work.
    pub fn take(&mut self) -> Invalidation {
        self.coalesced = 0;
        core::mem::take(&mut self.pending)
    }
}
