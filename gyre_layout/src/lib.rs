// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_layout --heading-base-level=0

//! Gyre Layout: wrapped circular positions for a finite slide strip.
//!
//! [`CircularLayout`] maps a slide index and an unbounded scroll progress to
//! a world-space X position inside one wrap period, producing the carousel's
//! infinite-loop illusion: as progress grows without bound, each slide cycles
//! through the visible band over and over.
//!
//! The mapping is a pure function. For `N` slides of width `w` the wrap
//! period is `N * w`, and every output lands in the half-open band
//! `(-wrap/2, wrap/2]` centered on the viewport.
//!
//! ## Minimal example
//!
//! ```
//! use gyre_layout::CircularLayout;
//!
//! let layout = CircularLayout::new(6, 6.0);
//! assert_eq!(layout.wrap_width(), 36.0);
//!
//! // Every position stays inside the centered wrap band.
//! for i in 0..6 {
//!     let x = layout.position(i, 0.37);
//!     assert!(x > -18.0 && x <= 18.0);
//! }
//!
//! // Progress is measured in full cycles: whole cycles are invisible.
//! let a = layout.position(2, 0.25);
//! let b = layout.position(2, 3.25);
//! assert!((a - b).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod circular;

pub use circular::{CircularLayout, SLIDE_WIDTH_CAP, slide_width_for_viewport};
