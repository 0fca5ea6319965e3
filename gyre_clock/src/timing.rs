// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing parameters with production defaults.

/// Timing and decay parameters for the carousel animation.
///
/// All fields are per-tick quantities at the nominal ~60 Hz refresh rate.
/// The defaults are the tuned production values; sessions construct a
/// `Timing` once and never mutate it afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Advance progress while idle (no drag, no residual momentum).
    pub auto_play: bool,
    /// Progress added per tick while auto-play is active.
    pub auto_play_speed: f64,
    /// Velocity multiplier applied each tick after a drag release.
    pub momentum_decay: f64,
    /// Effect multiplier applied every tick.
    pub effect_decay: f64,
    /// Pixels-to-progress conversion for drag deltas.
    pub drag_sensitivity: f64,
    /// Lerp factor the rendering collaborator applies when easing its shader
    /// uniform toward the current effect value. Carried here so the whole
    /// timing surface lives in one place; the engine itself never reads it.
    pub transition_easing: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_speed: 0.000_15,
            momentum_decay: 0.95,
            effect_decay: 0.92,
            drag_sensitivity: 0.000_8,
            transition_easing: 0.1,
        }
    }
}
