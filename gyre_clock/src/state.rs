// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The continuous scalars animated by the carousel.

/// The three continuous scalars that drive the carousel.
///
/// The state is owned exclusively by the engine controller; every mutation
/// funnels through [`Clock`](crate::Clock) methods so the interleaving of
/// pointer callbacks and frame ticks stays well-defined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContinuousState {
    /// Accumulated horizontal scroll as a unitless fraction of one full
    /// cycle. Unbounded; consumers take it modulo the wrap width.
    pub progress: f64,
    /// Signed rate of progress change left over from a drag throw. Decays
    /// geometrically while no drag is active.
    pub velocity: f64,
    /// Signed intensity driving the visual distortion. Spikes on drag moves
    /// and decays toward zero every tick.
    pub effect: f64,
}

impl ContinuousState {
    /// Creates a state at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
