// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gyre_clock --heading-base-level=0

//! Gyre Clock: per-frame progress, momentum, and effect integration.
//!
//! This crate owns the continuous scalars that animate the Gyre carousel and
//! the rules for advancing them once per display-refresh tick:
//!
//! - [`ContinuousState`]: `progress` (unbounded scroll fraction), `velocity`
//!   (signed rate from a drag throw), and `effect` (distortion intensity).
//! - [`Timing`]: the tunable timing parameters (auto-play, decay factors,
//!   drag sensitivity) with production defaults.
//! - [`Clock`]: the integrator. [`Clock::tick`] applies momentum decay or
//!   auto-play and decays the effect; [`Clock::apply_drag`] and
//!   [`Clock::begin_drag`] funnel gesture input into the state.
//!
//! A tick is a pure, synchronous state transition with no suspension points.
//! All mutation of [`ContinuousState`] flows through [`Clock`] methods (or
//! the controller that owns both), so ordering stays well-defined even though
//! pointer callbacks and the frame loop are two independent event sources on
//! one thread.
//!
//! ## Minimal example
//!
//! ```
//! use gyre_clock::{Clock, ContinuousState, Timing};
//!
//! let clock = Clock::new(Timing::default());
//! let mut state = ContinuousState::default();
//!
//! // A 100px drag move: progress and velocity pick up the scaled delta,
//! // the effect spikes proportionally to the raw delta.
//! clock.apply_drag(&mut state, 100.0);
//! assert!((state.velocity - 0.08).abs() < 1e-12);
//! assert!((state.effect - 800.0).abs() < 1e-12);
//!
//! // After release, ticks decay the velocity geometrically.
//! clock.tick(&mut state, false);
//! assert!((state.velocity - 0.08 * 0.95).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clock;
mod state;
mod timing;

pub use clock::{AUTO_PLAY_EFFECT, Clock, DRAG_EFFECT_GAIN, VELOCITY_EPSILON, approach};
pub use state::ContinuousState;
pub use timing::Timing;
