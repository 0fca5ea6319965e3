// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_gesture --heading-base-level=0

//! Gyre Gesture: pointer vocabulary and drag state machine for the slider engine.
//!
//! This crate provides the input-side building blocks of the Gyre carousel:
//!
//! - [`PointerEvent`] / [`PointerEventKind`]: a minimal, host-agnostic pointer
//!   event vocabulary (down, move, up, leave, cancel) carrying a position in
//!   device coordinates.
//! - [`drag::DragTracker`]: a small state machine that turns those events into
//!   drag transitions and per-move X deltas.
//!
//! The carousel scrolls along a single horizontal axis, so only the X
//! coordinate of each event is consumed. Events still carry a full
//! [`kurbo::Point`] because that is the natural shape of host pointer events;
//! the Y coordinate is simply ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use gyre_gesture::{PointerEvent, PointerEventKind};
//! use gyre_gesture::drag::{DragTracker, DragUpdate};
//!
//! let mut drag = DragTracker::default();
//!
//! // Press at x = 100: the drag starts.
//! let update = drag.apply(PointerEvent::new(PointerEventKind::Down, Point::new(100.0, 40.0)));
//! assert_eq!(update, DragUpdate::Started);
//!
//! // Move to x = 130: a 30px delta is reported.
//! let update = drag.apply(PointerEvent::new(PointerEventKind::Move, Point::new(130.0, 42.0)));
//! assert_eq!(update, DragUpdate::Moved(30.0));
//!
//! // The pointer leaving the region ends the drag exactly like a release.
//! let update = drag.apply(PointerEvent::new(PointerEventKind::Leave, Point::new(131.0, 0.0)));
//! assert_eq!(update, DragUpdate::Ended);
//! ```
//!
//! ## Pointer capture
//!
//! Hosts that support pointer capture should capture on down and release
//! capture on up/cancel so move events keep arriving while the pointer is
//! outside the interactive region. Without capture, an abrupt exit that
//! produces no leave/cancel event leaves the tracker dragging until the next
//! up; this is an accepted approximation, not an error.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;

mod pointer;

pub use pointer::{PointerEvent, PointerEventKind};
