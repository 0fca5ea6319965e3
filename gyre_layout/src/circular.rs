// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular position function and slide sizing rule.

/// Upper bound on the derived slide width, in world units.
///
/// Slides take half the world-space viewport width, capped at this value so
/// very wide viewports do not produce oversized slides.
pub const SLIDE_WIDTH_CAP: f64 = 6.0;

/// Derives the slide width from the world-space viewport width at the slide
/// plane: half the viewport, capped at [`SLIDE_WIDTH_CAP`].
///
/// Non-finite or negative inputs produce a zero width, which downstream
/// stages treat as "nothing visible".
#[must_use]
pub fn slide_width_for_viewport(world_width: f64) -> f64 {
    if !world_width.is_finite() || world_width <= 0.0 {
        return 0.0;
    }
    (world_width * 0.5).min(SLIDE_WIDTH_CAP)
}

/// Pure circular layout over a finite slide strip.
///
/// For `N` slides of width `w`, slide `i` at progress `p` sits at
///
/// ```text
/// wrap(i*w - N*w/2 + w/2 + p*N*w,  N*w)
/// ```
///
/// where `wrap` maps its input into the centered band `(-N*w/2, N*w/2]`
/// using modulo arithmetic that is correct for negative inputs. Progress is
/// measured in full cycles, so `position(i, p) == position(i, p + k)` for
/// any integer `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularLayout {
    total_slides: usize,
    slide_width: f64,
}

impl CircularLayout {
    /// Creates a layout for `total_slides` slides of `slide_width` world
    /// units each.
    #[must_use]
    pub fn new(total_slides: usize, slide_width: f64) -> Self {
        Self {
            total_slides,
            slide_width,
        }
    }

    /// Returns the number of slides in the strip.
    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Returns `true` when the strip has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_slides == 0
    }

    /// Returns the configured slide width in world units.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Returns the world-space width of one full cycle.
    #[must_use]
    pub fn wrap_width(&self) -> f64 {
        self.total_slides as f64 * self.slide_width
    }

    /// Returns the wrapped world-space X position of slide `index` at the
    /// given progress.
    ///
    /// The result always lies in `(-wrap/2, wrap/2]`. For a degenerate strip
    /// (no slides, or a non-positive slide width) there is no meaningful
    /// band; callers are expected to short-circuit via [`Self::is_empty`],
    /// and the function returns `0.0` rather than dividing by zero.
    #[must_use]
    pub fn position(&self, index: usize, progress: f64) -> f64 {
        let wrap_width = self.wrap_width();
        if wrap_width <= 0.0 || !wrap_width.is_finite() {
            return 0.0;
        }
        let start = index as f64 * self.slide_width - wrap_width / 2.0 + self.slide_width / 2.0;
        wrap(start + progress * wrap_width, wrap_width)
    }
}

/// Maps `v` into the centered band `(-w/2, w/2]`.
///
/// The double-modulo form is required so negative inputs wrap forward
/// instead of mirroring.
fn wrap(v: f64, w: f64) -> f64 {
    let m = ((v % w) + w) % w;
    if m > w / 2.0 { m - w } else { m }
}
