// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene storage, registration and lifecycle.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker};

use super::config::{Length, SceneSpec};
use super::id::SceneId;
use super::progress::ActivationWindow;
use crate::changes::{AppliedTranslations, FrameChanges};
use crate::dirty;
use crate::document::{Document, ElementId};
use crate::error::SceneError;
use crate::mapper::{MapperState, ResolvedAction};
use crate::viewport::ViewportClass;

/// Failed measure or resolve attempts before a scene gives up until the next
/// resize. About one second of frames.
pub const MAX_ATTEMPTS: u32 = 60;

/// Lifecycle of a registered scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneState {
    /// Waiting for layout; retried on the next frame.
    Pending,
    /// Measured and producing output.
    Active,
    /// Not enabled for the current viewport class.
    Disabled,
    /// Gave up after [`MAX_ATTEMPTS`] transient failures. Retried after the
    /// next resize.
    Stalled,
    /// Hit a configuration error for the current viewport class. Retried
    /// only when the class changes.
    Skipped,
}

impl SceneState {
    /// Returns `true` if the scene produces no output in this state.
    #[must_use]
    pub const fn is_inert(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A progress change produced by [`SceneRegistry::evaluate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressUpdate {
    /// Which scene.
    pub scene: SceneId,
    /// New progress.
    pub progress: f64,
    /// Progress before this frame, if the scene had produced any.
    pub previous: Option<f64>,
}

#[derive(Debug)]
pub(crate) struct SceneEntry {
    pub(crate) spec: SceneSpec,
    pub(crate) class: ViewportClass,
    pub(crate) trigger: ElementId,
    pub(crate) action: Option<ResolvedAction>,
    pub(crate) mapper: MapperState,
    pub(crate) window: Option<ActivationWindow>,
    pub(crate) extended: bool,
    /// Last progress handed to the mapper.
    pub(crate) emitted: Option<f64>,
    pub(crate) needs_resolve: bool,
    pub(crate) needs_measure: bool,
    pub(crate) attempts: u32,
    pub(crate) state: SceneState,
}

impl SceneEntry {
    fn new(spec: SceneSpec, trigger: ElementId, class: ViewportClass) -> Self {
        let state = if *spec.enabled.get(class) {
            SceneState::Pending
        } else {
            SceneState::Disabled
        };
        Self {
            spec,
            class,
            trigger,
            action: None,
            mapper: MapperState::default(),
            window: None,
            extended: false,
            emitted: None,
            needs_resolve: false,
            needs_measure: false,
            attempts: 0,
            state,
        }
    }

    pub(crate) fn resolve(
        &mut self,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
    ) -> Result<(), SceneError> {
        let action = ResolvedAction::resolve(self.spec.action.get(self.class), doc, applied)?;
        self.action = Some(action);
        self.mapper = MapperState::default();
        self.emitted = None;
        Ok(())
    }

    pub(crate) fn measure(
        &mut self,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
    ) -> Result<ActivationWindow, SceneError> {
        let not_ready = || SceneError::LayoutNotReady {
            selector: self.spec.trigger.clone(),
        };
        let measured = doc.document_rect(self.trigger).ok_or_else(not_ready)?;
        let rect = applied.layout_rect(self.trigger, measured);
        let hook = *self.spec.trigger_hook.get(self.class);
        let offset = self.spec.offset.get(self.class).resolve(rect, doc)?;
        let length = self.duration_length();
        let duration = length.resolve(rect, doc)?;
        if duration <= 0.0 && length.is_measured() {
            // Collapsed containers have no height until styles land.
            return Err(not_ready());
        }
        let window = ActivationWindow::new(rect.y0, doc.viewport().height, hook, offset, duration)
            .ok_or(SceneError::InvalidDuration { duration })?;
        self.window = Some(window);
        Ok(window)
    }

    fn duration_length(&self) -> &Length {
        match (self.extended, self.spec.extension.get(self.class)) {
            (true, Some(ext)) => &ext.extended,
            _ => self.spec.duration.get(self.class),
        }
    }

    /// Unbound actions and motion paths must be resolved again after layout
    /// changes.
    fn resolve_after_layout(&self) -> bool {
        self.action.as_ref().is_none_or(ResolvedAction::follows_path)
    }

    pub(crate) fn is_enabled(&self) -> bool {
        *self.spec.enabled.get(self.class)
    }
}

#[derive(Debug)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) entry: Option<SceneEntry>,
}

/// Every scene registered on a page.
///
/// Scenes are addressed by [`SceneId`] handles. Removed scenes free their
/// slot for reuse and bump its generation so that stale handles are
/// rejected. Evaluation visits scenes in registration order regardless of
/// slot reuse.
#[derive(Debug)]
pub struct SceneRegistry {
    pub(crate) slots: Vec<Slot>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) order: Vec<u32>,
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) updates: Vec<ProgressUpdate>,
    pub(crate) retry_pending: bool,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            updates: Vec::new(),
            retry_pending: false,
        }
    }

    /// Registers a scene for the viewport class `class`.
    ///
    /// The spec is validated, the trigger and action targets are resolved
    /// and the trigger is measured immediately. Layout that is not ready yet
    /// is not an error: the scene is deferred and retried on later frames.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error. Nothing is registered in that
    /// case.
    pub fn register(
        &mut self,
        spec: SceneSpec,
        class: ViewportClass,
        doc: &mut dyn Document,
        applied: &AppliedTranslations,
    ) -> Result<SceneId, SceneError> {
        spec.validate()?;
        let trigger = doc
            .query_all(&spec.trigger)
            .first()
            .copied()
            .ok_or_else(|| SceneError::MissingTrigger {
                selector: spec.trigger.clone(),
            })?;

        let mut entry = SceneEntry::new(spec, trigger, class);
        if entry.is_enabled() {
            match entry.resolve(doc, applied) {
                Ok(()) => {}
                Err(e) if e.is_transient() => entry.needs_resolve = true,
                Err(e) => return Err(e),
            }
            match entry.measure(doc, applied) {
                Ok(_) => {}
                Err(e) if e.is_transient() => entry.needs_measure = true,
                Err(e) => return Err(e),
            }
            if !entry.needs_resolve && !entry.needs_measure {
                entry.state = SceneState::Active;
            }
        }

        let (needs_resolve, needs_measure) = (entry.needs_resolve, entry.needs_measure);
        let id = self.allocate(entry);
        self.schedule(id.idx, needs_resolve, needs_measure);
        Ok(id)
    }

    fn schedule(&mut self, idx: u32, resolve: bool, measure: bool) {
        if resolve {
            self.dirty.mark(idx, dirty::RESOLVE);
        }
        if measure {
            self.dirty.mark(idx, dirty::MEASURE);
        }
        self.retry_pending |= resolve || measure;
    }

    fn allocate(&mut self, entry: SceneEntry) -> SceneId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.entry = Some(entry);
            idx
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            idx
        };
        self.order.push(idx);
        SceneId {
            idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    /// Tears a scene down. Its output stops with the next frame; styles and
    /// classes it already applied are left in place.
    ///
    /// Returns `false` for stale handles.
    pub fn remove(&mut self, id: SceneId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.slots[id.idx as usize].entry = None;
        self.dirty.remove_key(id.idx);
        self.order.retain(|&i| i != id.idx);
        self.free_list.push(id.idx);
        true
    }

    /// Removes every scene.
    pub fn clear(&mut self) {
        for idx in core::mem::take(&mut self.order) {
            self.dirty.remove_key(idx);
            let slot = &mut self.slots[idx as usize];
            slot.entry = None;
            self.free_list.push(idx);
        }
        self.updates.clear();
        self.retry_pending = false;
    }

    /// Returns whether the given handle refers to a live scene.
    #[must_use]
    pub fn is_alive(&self, id: SceneId) -> bool {
        self.slots
            .get(id.idx as usize)
            .is_some_and(|s| s.generation == id.generation && s.entry.is_some())
    }

    pub(crate) fn entry(&self, id: SceneId) -> Option<&SceneEntry> {
        let slot = self.slots.get(id.idx as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    /// Last progress produced by the scene, or `None` if it is inert or the
    /// handle is stale.
    #[must_use]
    pub fn progress(&self, id: SceneId) -> Option<f64> {
        let entry = self.entry(id)?;
        if entry.state.is_inert() {
            return None;
        }
        entry.emitted
    }

    /// Lifecycle state of the scene.
    #[must_use]
    pub fn state(&self, id: SceneId) -> Option<SceneState> {
        self.entry(id).map(|e| e.state)
    }

    /// Current activation window of the scene.
    #[must_use]
    pub fn window(&self, id: SceneId) -> Option<ActivationWindow> {
        self.entry(id).and_then(|e| e.window)
    }

    /// Number of live scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no scene is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if some scene is waiting for layout.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.retry_pending
    }

    /// Progress changes produced by the last [`evaluate`](Self::evaluate).
    #[must_use]
    pub fn updates(&self) -> &[ProgressUpdate] {
        &self.updates
    }

    /// Re-resolves every viewport-dependent parameter for `class`.
    ///
    /// Scenes whose action differs between the old and new class retract the
    /// classes they applied (into `changes`) and resolve their new targets on
    /// the next evaluation, as do motion paths. Every enabled scene is
    /// re-measured, including
    /// scenes skipped for a configuration error under the old class.
    pub fn reconfigure(&mut self, class: ViewportClass, changes: &mut FrameChanges) {
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let Some(entry) = self.slots[idx as usize].entry.as_mut() else {
                continue;
            };
            if entry.class == class {
                continue;
            }
            let old = entry.class;
            entry.class = class;
            entry.extended = false;
            entry.attempts = 0;

            let action_changed = entry.spec.action.get(old) != entry.spec.action.get(class);
            if (!entry.is_enabled() || action_changed)
                && let Some(action) = entry.action.take()
            {
                action.retire(&mut entry.mapper, changes);
            }
            if !entry.is_enabled() {
                entry.state = SceneState::Disabled;
                entry.window = None;
                entry.emitted = None;
                continue;
            }
            entry.state = SceneState::Pending;
            entry.emitted = None;
            entry.needs_resolve = entry.resolve_after_layout();
            entry.needs_measure = true;
            let resolve = entry.needs_resolve;
            self.schedule(idx, resolve, true);
        }
    }

    /// Schedules every enabled scene for re-measurement, e.g. after a resize
    /// that kept the viewport class. Motion paths are placed again, and their
    /// scenes present the new placement on the next evaluation even if
    /// progress did not change.
    ///
    /// Stalled scenes get a fresh set of attempts. Skipped scenes stay
    /// skipped.
    pub fn mark_all_for_measure(&mut self) {
        for i in 0..self.order.len() {
            let idx = self.order[i];
            let Some(entry) = self.slots[idx as usize].entry.as_mut() else {
                continue;
            };
            match entry.state {
                SceneState::Disabled | SceneState::Skipped => continue,
                SceneState::Stalled => {
                    entry.state = SceneState::Pending;
                    entry.attempts = 0;
                }
                SceneState::Pending | SceneState::Active => {}
            }
            entry.needs_resolve |= entry.resolve_after_layout();
            entry.needs_measure = true;
            let resolve = entry.needs_resolve;
            self.schedule(idx, resolve, true);
        }
    }
}
