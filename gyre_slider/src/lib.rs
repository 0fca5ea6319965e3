// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_slider --heading-base-level=0

//! Gyre Slider: a headless infinite-carousel engine.
//!
//! This crate is the controller that ties the Gyre building blocks together:
//! pointer gestures ([`gyre_gesture`]), per-frame integration
//! ([`gyre_clock`]), wrapped circular layout ([`gyre_layout`]), screen
//! projection ([`gyre_project`]), and the frame-coherent overlay table
//! ([`gyre_overlay`]).
//!
//! [`SliderEngine`] owns all mutable state and produces only data: each
//! pointer event and each tick returns a list of [`EngineEvent`]s, and every
//! tick republishes a position table mapping slide index to a screen
//! rectangle and opacity. The WebGL (or other) renderer and the markup
//! overlay layer are collaborators that consume this state; the engine never
//! invokes application code and owns no DOM or GPU resources.
//!
//! Hosts are responsible for:
//!
//! - Delivering pointer events (capturing the pointer on down, if the
//!   platform supports it).
//! - Scheduling ticks at the display refresh rate while
//!   [`SliderEngine::is_running`] and supplying fresh camera/viewport
//!   parameters as [`FrameInput`].
//! - Rendering slides from the position table and dispatching per-slide
//!   overlays according to [`OverlayKind`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use gyre_gesture::{PointerEvent, PointerEventKind};
//! use gyre_slider::{EngineEvent, FrameInput, Slide, SliderConfig, SliderEngine};
//!
//! let slides = vec![
//!     Slide::new(1, "textures/dunes.jpg", "Dunes", "Namib Desert"),
//!     Slide::new(2, "textures/fjord.jpg", "Fjord", "Western Norway"),
//!     Slide::new(3, "textures/reef.jpg", "Reef", "Coral Sea"),
//! ];
//! let mut engine = SliderEngine::new(slides, SliderConfig::default());
//! let frame = FrameInput::new(Size::new(1600.0, 900.0));
//!
//! // Idle ticks auto-play and publish slide placements.
//! engine.tick(&frame);
//! assert!(engine.progress() > 0.0);
//! assert!(!engine.positions().is_empty());
//!
//! // A drag takes over: press, move, release.
//! let events = engine.handle_pointer(PointerEvent::new(
//!     PointerEventKind::Down,
//!     Point::new(500.0, 300.0),
//! ));
//! assert_eq!(events.as_slice(), [EngineEvent::DragStarted]);
//!
//! engine.handle_pointer(PointerEvent::new(PointerEventKind::Move, Point::new(560.0, 300.0)));
//! engine.handle_pointer(PointerEvent::new(PointerEventKind::Up, Point::new(560.0, 300.0)));
//!
//! // The throw leaves momentum behind for the next ticks to decay.
//! assert!(engine.velocity() != 0.0);
//! engine.tick(&frame);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod slide;

pub use config::{CursorConfig, SliderConfig, ThemeConfig, Timing};
pub use engine::{EngineDebugInfo, EngineEvent, EngineEvents, FrameInput, SliderEngine};
pub use slide::{MediaRef, OverlayKind, Slide};
