// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_project --heading-base-level=0

//! Gyre Project: world-to-screen projection and opacity falloff.
//!
//! This crate turns a slide's world-space X position into what the overlay
//! layer needs: a device-pixel rectangle and a distance-based opacity.
//!
//! - [`Projector`]: a perspective camera on the +Z axis looking at the slide
//!   plane (z = 0). It converts world coordinates at that plane to
//!   normalized device coordinates and remaps them to device pixels.
//! - [`slide_opacity`]: the linear falloff centered on the viewport, used
//!   both for the visual fade and for the visibility decision.
//! - [`Projector::project_slide`]: the combined step. It returns
//!   `Some(`[`Placement`]`)` only while the slide's opacity exceeds
//!   [`VISIBILITY_EPSILON`]; otherwise the slide is absent, never a
//!   zero-opacity record, so consumers can treat presence as "render this".
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use gyre_project::Projector;
//!
//! // A 1600x900 view with the default 45-degree camera at distance 10.
//! let projector = Projector::new(Size::new(1600.0, 900.0));
//!
//! // A centered slide is fully opaque and centered on screen.
//! let placement = projector.project_slide(0.0, 6.0).unwrap();
//! assert!((placement.opacity - 1.0).abs() < 1e-12);
//! assert!((placement.rect.center().x - 800.0).abs() < 1e-6);
//!
//! // A slide 1.5 widths from center has faded out entirely: absent.
//! assert!(projector.project_slide(9.0, 6.0).is_none());
//! ```
//!
//! This crate is `no_std` (enable the `libm` feature in place of `std`).

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("gyre_project requires either the `std` or `libm` feature");

mod projector;

pub use projector::{
    OPACITY_FALLOFF_WIDTHS, Placement, Projector, SLIDE_HEIGHT_RATIO, SLIDE_MESH_WIDTH_FACTOR,
    VISIBILITY_EPSILON, slide_opacity,
};
