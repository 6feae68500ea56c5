// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene identity.

use core::fmt;

/// A handle to a scene in a [`SceneRegistry`](super::SceneRegistry).
///
/// Contains both a slot index and a generation counter so that stale handles
/// are detected after a scene is removed and its slot reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl SceneId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SceneId({}@gen{})", self.idx, self.generation)
    }
}
