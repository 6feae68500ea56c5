// Copyright 2026 the Scrollscene Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven scene animation for long landing pages.
//!
//! `scrollscene_core` turns the window's scroll position into per-element
//! animation state. It is `no_std` compatible (with `alloc`) and never talks
//! to a browser directly: geometry comes in through the
//! [`Document`](document::Document) trait and output leaves as
//! [`FrameChanges`](changes::FrameChanges) through a
//! [`Presenter`](backend::Presenter).
//!
//! # Architecture
//!
//! ```text
//!   scroll / resize events
//!       │
//!       ▼
//!   FrameGate ──(once per FrameTick)──► AnimationController::frame()
//!                                           │
//!        ┌──────────────────────────────────┤
//!        ▼                                  ▼
//!   ViewportClassifier          SceneRegistry::evaluate()
//!   (on resize)                     │  progress per scene
//!                                   ▼
//!                  ResolvedAction::apply() / ActiveListTracker::update()
//!                                   │
//!                                   ▼
//!                 LoopingTimeline::tick() ──► FrameChanges ──► Presenter::apply()
//! ```
//!
//! **[`viewport`]**: Buckets the window into [`ViewportClass`]es and stores
//! per-class parameters in [`Responsive`] tables.
//!
//! **[`scene`]**: The scene registry: generational handles, declarative
//! [`SceneSpec`]s, activation windows measured from layout and deferred
//! re-measurement through [`dirty`] channels.
//!
//! **[`mapper`]**: Maps progress to tweened styles, motion-path transforms
//! and class toggles.
//!
//! **[`list`]**: Active-item tracking for sections where a marker travels
//! past a list.
//!
//! **[`timeline`]**: Time-driven loops with repeat, repeat delay and yoyo.
//!
//! **[`controller`]**: The [`AnimationController`] tying it all together.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-scene
//!   progress events.
//!
//! [`ViewportClass`]: viewport::ViewportClass
//! [`Responsive`]: viewport::Responsive
//! [`SceneSpec`]: scene::SceneSpec
//! [`AnimationController`]: controller::AnimationController

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod action;
pub mod backend;
pub mod changes;
pub mod controller;
pub mod dirty;
pub mod document;
pub mod ease;
pub mod error;
pub mod frame;
pub mod list;
pub mod mapper;
pub mod motion;
pub mod scene;
pub mod time;
pub mod timeline;
pub mod trace;
pub mod viewport;
