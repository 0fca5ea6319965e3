// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_overlay --heading-base-level=0

//! Gyre Overlay: the frame-coherent slide position table and active-slide
//! detection.
//!
//! The presentation layer positions its markup overlays (titles, buttons)
//! from a table mapping slide index to a screen
//! [`Placement`](gyre_project::Placement). Two properties of that table are
//! load-bearing:
//!
//! - **Absence means "not visible"**, never "opacity zero". A consumer must
//!   not render an entry that has been removed, so removals and updates for
//!   a tick are applied together.
//! - **Snapshots are atomic per tick.** A [`FrameUpdate`] collects the whole
//!   tick's entries and [`PositionTable::publish`] replaces the table
//!   wholesale, so a reader never observes a half-updated table (for
//!   example, two slides simultaneously "centered" from a torn read).
//!
//! [`ActiveSlideDetector`] watches successive snapshots and reports when the
//! most-opaque slide changes, with a 0.5 opacity threshold as hysteresis so
//! partially-visible neighbors near a transition boundary do not flicker.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use gyre_project::Placement;
//! use gyre_overlay::{ActiveSlideDetector, PositionTable};
//!
//! let mut table = PositionTable::new();
//! let mut detector = ActiveSlideDetector::new();
//!
//! let mut frame = table.begin_frame();
//! frame.insert(2, Placement { rect: Rect::new(100.0, 50.0, 700.0, 425.0), opacity: 0.9 });
//! frame.insert(3, Placement { rect: Rect::new(900.0, 50.0, 1500.0, 425.0), opacity: 0.3 });
//! table.publish(frame);
//!
//! assert_eq!(detector.observe(&table), Some(2));
//! assert_eq!(detector.active(), Some(2));
//!
//! // Slide 3 never made it above the threshold; slide 2 stays active.
//! assert!(table.get(3).is_some());
//! assert!(table.get(99).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod active;
mod table;

pub use active::{ACTIVE_THRESHOLD, ActiveSlideDetector};
pub use table::{FrameUpdate, PositionTable};
