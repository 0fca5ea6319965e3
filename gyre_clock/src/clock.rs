// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick integrator.

use crate::{ContinuousState, Timing};

/// Velocity magnitudes below this count as "no momentum" and hand control
/// back to auto-play. The precise tick on which a decaying velocity crosses
/// this boundary is not part of the contract.
pub const VELOCITY_EPSILON: f64 = 1e-4;

/// Effect units per pixel of instantaneous drag delta.
pub const DRAG_EFFECT_GAIN: f64 = 8.0;

/// Fixed effect level held while auto-play advances, keeping a subtle ambient
/// distortion on screen.
pub const AUTO_PLAY_EFFECT: f64 = 15.0;

/// The per-frame integrator for a [`ContinuousState`].
///
/// A `Clock` is constructed once per session from a [`Timing`] and is the
/// single mutation path for the continuous scalars: [`Clock::tick`] runs once
/// per display refresh, while [`Clock::begin_drag`] and [`Clock::apply_drag`]
/// are called from pointer handling. Both sources run interleaved on one
/// thread, so each call is a complete, synchronous transition.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    timing: Timing,
}

impl Clock {
    /// Creates a clock with the given timing parameters.
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self { timing }
    }

    /// Returns the timing parameters this clock was built with.
    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Advances the state by one display-refresh tick.
    ///
    /// While a drag is active the gesture owns progress and velocity, so the
    /// tick neither auto-plays nor applies momentum. Otherwise residual
    /// momentum is integrated and decayed until it falls below
    /// [`VELOCITY_EPSILON`], at which point auto-play (if enabled) takes
    /// over. The effect decays every tick regardless.
    pub fn tick(&self, state: &mut ContinuousState, dragging: bool) {
        if !dragging {
            if state.velocity.abs() < VELOCITY_EPSILON {
                if self.timing.auto_play {
                    state.progress += self.timing.auto_play_speed;
                    state.effect = AUTO_PLAY_EFFECT;
                }
            } else {
                state.progress += state.velocity;
                state.velocity *= self.timing.momentum_decay;
            }
        }
        state.effect *= self.timing.effect_decay;
    }

    /// Applies a drag move of `delta_x` device pixels.
    ///
    /// Progress accumulates the scaled delta; velocity is re-derived from the
    /// latest delta (not accumulated) so the release picks up the most recent
    /// throw speed; the effect spikes proportionally to the raw delta.
    pub fn apply_drag(&self, state: &mut ContinuousState, delta_x: f64) {
        let scaled = delta_x * self.timing.drag_sensitivity;
        state.progress += scaled;
        state.velocity = scaled;
        state.effect = delta_x * DRAG_EFFECT_GAIN;
    }

    /// Resets velocity at the start of a drag so stale momentum never leaks
    /// into the new gesture.
    pub fn begin_drag(&self, state: &mut ContinuousState) {
        state.velocity = 0.0;
    }
}

/// One step of exponential approach: moves `current` toward `target` by
/// `easing` of the remaining distance.
///
/// This is the smoothing step the rendering collaborator applies to its
/// shader uniform each frame, using [`Timing::transition_easing`] as the
/// factor. Provided here so hosts share one definition.
#[must_use]
pub fn approach(current: f64, target: f64, easing: f64) -> f64 {
    current + (target - current) * easing
}
