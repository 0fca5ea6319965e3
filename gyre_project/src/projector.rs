// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The perspective camera model and slide placement math.

use core::f64::consts::PI;

use kurbo::{Point, Rect, Size};

/// Opacities at or below this threshold count as invisible: the slide is
/// removed from the position table instead of being published with a
/// near-zero opacity, so the presentation layer never briefly shows a stale,
/// mispositioned, fully-faded element.
pub const VISIBILITY_EPSILON: f64 = 0.01;

/// Distance from center, in slide widths, at which a slide becomes fully
/// transparent.
pub const OPACITY_FALLOFF_WIDTHS: f64 = 1.5;

/// Fraction of the slide width actually covered by the slide mesh; the
/// remainder is the gap between neighboring slides.
pub const SLIDE_MESH_WIDTH_FACTOR: f64 = 0.95;

/// Slide height as a fraction of the slide width (a 16:10 landscape frame).
pub const SLIDE_HEIGHT_RATIO: f64 = 10.0 / 16.0;

/// Linear opacity falloff centered on the viewport.
///
/// Returns `max(0, 1 - |x| / (slide_width * 1.5))`; a degenerate slide width
/// yields `0.0`.
#[must_use]
pub fn slide_opacity(center_x: f64, slide_width: f64) -> f64 {
    if !slide_width.is_finite() || slide_width <= 0.0 {
        return 0.0;
    }
    (1.0 - center_x.abs() / (slide_width * OPACITY_FALLOFF_WIDTHS)).max(0.0)
}

/// A slide's published screen placement: a device-pixel rectangle plus its
/// distance-based opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Bounding rectangle in device pixels (y grows downward).
    pub rect: Rect,
    /// Opacity, strictly above [`VISIBILITY_EPSILON`] and at most `1.0`.
    pub opacity: f64,
}

/// Perspective camera over the slide plane.
///
/// The camera sits on the +Z axis at `distance` from the origin, looking at
/// the slide plane (z = 0) with a vertical field of view of `fov_y_degrees`.
/// These parameters are refreshed from the rendering collaborator each tick;
/// constructing a `Projector` is cheap enough to do per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    viewport: Size,
    fov_y_degrees: f64,
    distance: f64,
}

impl Projector {
    /// Default vertical field of view in degrees.
    pub const DEFAULT_FOV_Y_DEGREES: f64 = 45.0;

    /// Default camera distance from the slide plane, in world units.
    pub const DEFAULT_DISTANCE: f64 = 10.0;

    /// Creates a projector for the given device-pixel viewport with the
    /// default camera (45-degree vertical field of view at distance 10).
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self::with_camera(viewport, Self::DEFAULT_FOV_Y_DEGREES, Self::DEFAULT_DISTANCE)
    }

    /// Creates a projector with explicit camera parameters.
    #[must_use]
    pub fn with_camera(viewport: Size, fov_y_degrees: f64, distance: f64) -> Self {
        Self {
            viewport,
            fov_y_degrees,
            distance,
        }
    }

    /// Returns the device-pixel viewport.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the vertical field of view in degrees.
    #[must_use]
    pub fn fov_y_degrees(&self) -> f64 {
        self.fov_y_degrees
    }

    /// Returns the camera distance from the slide plane.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns `true` when the viewport or camera cannot produce a
    /// meaningful projection (zero/negative extents, out-of-range field of
    /// view, or non-finite parameters).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.viewport.width.is_finite()
            && self.viewport.height.is_finite()
            && self.viewport.width > 0.0
            && self.viewport.height > 0.0
            && self.distance.is_finite()
            && self.distance > 0.0
            && self.fov_y_degrees.is_finite()
            && self.fov_y_degrees > 0.0
            && self.fov_y_degrees < 180.0)
    }

    /// Returns the world-space extent visible at the slide plane, or
    /// `Size::ZERO` for a degenerate camera.
    ///
    /// The height follows from the field of view and distance
    /// (`2 * d * tan(fov/2)`); the width scales it by the viewport's aspect
    /// ratio. The slide width rule in `gyre_layout` consumes this width.
    #[must_use]
    pub fn world_size(&self) -> Size {
        if self.is_degenerate() {
            return Size::ZERO;
        }
        let half_fov = self.fov_y_degrees * (PI / 180.0) / 2.0;
        let world_height = 2.0 * self.distance * tan(half_fov);
        let aspect = self.viewport.width / self.viewport.height;
        Size::new(world_height * aspect, world_height)
    }

    /// Projects a world-space point on the slide plane to normalized device
    /// coordinates (`[-1, 1]` in each axis for points inside the view).
    #[must_use]
    pub fn project_point(&self, world: Point) -> Point {
        let world_size = self.world_size();
        if world_size == Size::ZERO {
            return Point::ZERO;
        }
        Point::new(
            world.x / (world_size.width / 2.0),
            world.y / (world_size.height / 2.0),
        )
    }

    /// Projects a world-space rectangle on the slide plane into a
    /// device-pixel rectangle.
    ///
    /// The bottom-left and top-right corners are projected to normalized
    /// device coordinates and remapped so that NDC `[-1, 1]` covers the
    /// viewport, with Y flipped into screen orientation (downward).
    #[must_use]
    pub fn project_rect(&self, world: Rect) -> Rect {
        let bottom_left = self.project_point(Point::new(world.min_x(), world.min_y()));
        let top_right = self.project_point(Point::new(world.max_x(), world.max_y()));

        let x = (bottom_left.x + 1.0) / 2.0 * self.viewport.width;
        let y = (1.0 - top_right.y) / 2.0 * self.viewport.height;
        let width = (top_right.x - bottom_left.x) / 2.0 * self.viewport.width;
        let height = (top_right.y - bottom_left.y) / 2.0 * self.viewport.height;
        Rect::new(x, y, x + width, y + height)
    }

    /// Computes the published placement for a slide centered at `center_x`
    /// world units, or `None` when the slide is invisible.
    ///
    /// Absence covers every anomaly: opacity at or below
    /// [`VISIBILITY_EPSILON`], a degenerate camera, or a degenerate slide
    /// width. Nothing here is an error; an invisible slide simply has no
    /// entry this tick.
    #[must_use]
    pub fn project_slide(&self, center_x: f64, slide_width: f64) -> Option<Placement> {
        if self.is_degenerate() {
            return None;
        }
        let opacity = slide_opacity(center_x, slide_width);
        if opacity <= VISIBILITY_EPSILON {
            return None;
        }

        let half_width = slide_width * SLIDE_MESH_WIDTH_FACTOR / 2.0;
        let half_height = slide_width * SLIDE_HEIGHT_RATIO / 2.0;
        let world = Rect::new(
            center_x - half_width,
            -half_height,
            center_x + half_width,
            half_height,
        );
        Some(Placement {
            rect: self.project_rect(world),
            opacity,
        })
    }
}

#[cfg(feature = "std")]
fn tan(x: f64) -> f64 {
    x.tan()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn tan(x: f64) -> f64 {
    libm::tan(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(Size::new(1600.0, 900.0))
    }

    #[test]
    fn world_size_follows_fov_and_distance() {
        // 90-degree fov at distance 10 over a square viewport: tan(45) = 1,
        // so the world extent is 20x20.
        let p = Projector::with_camera(Size::new(100.0, 100.0), 90.0, 10.0);
        let world = p.world_size();
        assert!((world.height - 20.0).abs() < 1e-9);
        assert!((world.width - 20.0).abs() < 1e-9);
    }

    #[test]
    fn world_width_scales_with_aspect_ratio() {
        let world = projector().world_size();
        assert!((world.width / world.height - 1600.0 / 900.0).abs() < 1e-12);
    }

    #[test]
    fn centered_slide_is_fully_opaque_and_screen_centered() {
        let placement = projector().project_slide(0.0, 6.0).unwrap();
        assert!((placement.opacity - 1.0).abs() < 1e-12);
        let center = placement.rect.center();
        assert!((center.x - 800.0).abs() < 1e-6);
        assert!((center.y - 450.0).abs() < 1e-6);
        assert!(placement.rect.width() > 0.0);
        assert!(placement.rect.height() > 0.0);
    }

    #[test]
    fn opacity_falls_linearly_with_distance() {
        assert!((slide_opacity(0.0, 6.0) - 1.0).abs() < 1e-12);
        assert!((slide_opacity(4.5, 6.0) - 0.5).abs() < 1e-12);
        assert!((slide_opacity(-4.5, 6.0) - 0.5).abs() < 1e-12);
        assert_eq!(slide_opacity(9.0, 6.0), 0.0);
        assert_eq!(slide_opacity(20.0, 6.0), 0.0);
    }

    #[test]
    fn faded_out_slides_are_absent_not_zero() {
        let p = projector();
        // Fully transparent.
        assert!(p.project_slide(9.0, 6.0).is_none());
        // Still below the visibility epsilon: 1 - 8.95/9 < 0.01.
        assert!(p.project_slide(8.95, 6.0).is_none());
        // Just above it.
        assert!(p.project_slide(8.85, 6.0).is_some());
    }

    #[test]
    fn published_placements_always_exceed_the_epsilon() {
        let p = projector();
        let mut x = -12.0;
        while x <= 12.0 {
            if let Some(placement) = p.project_slide(x, 6.0) {
                assert!(placement.opacity > VISIBILITY_EPSILON, "at x = {x}");
            }
            x += 0.05;
        }
    }

    #[test]
    fn off_center_slides_project_symmetrically() {
        let p = projector();
        let left = p.project_slide(-3.0, 6.0).unwrap();
        let right = p.project_slide(3.0, 6.0).unwrap();
        assert!((left.opacity - right.opacity).abs() < 1e-12);
        assert!((left.rect.width() - right.rect.width()).abs() < 1e-9);
        let mirror = 1600.0 - right.rect.max_x();
        assert!((left.rect.min_x() - mirror).abs() < 1e-6);
    }

    #[test]
    fn mesh_proportions_shape_the_rectangle() {
        let placement = projector().project_slide(0.0, 6.0).unwrap();
        // Width:height in pixels matches (0.95 w) : (10/16 w); the remap is
        // anisotropic but proportional per axis.
        let world = projector().world_size();
        let expected_width = 6.0 * SLIDE_MESH_WIDTH_FACTOR / world.width * 1600.0;
        let expected_height = 6.0 * SLIDE_HEIGHT_RATIO / world.height * 900.0;
        assert!((placement.rect.width() - expected_width).abs() < 1e-9);
        assert!((placement.rect.height() - expected_height).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewports_project_nothing() {
        for viewport in [
            Size::ZERO,
            Size::new(-100.0, 100.0),
            Size::new(f64::NAN, 100.0),
        ] {
            let p = Projector::new(viewport);
            assert!(p.is_degenerate());
            assert_eq!(p.world_size(), Size::ZERO);
            assert!(p.project_slide(0.0, 6.0).is_none());
        }
    }

    #[test]
    fn degenerate_cameras_project_nothing() {
        let viewport = Size::new(800.0, 600.0);
        for (fov, distance) in [(0.0, 10.0), (180.0, 10.0), (45.0, 0.0), (45.0, -1.0)] {
            let p = Projector::with_camera(viewport, fov, distance);
            assert!(p.is_degenerate(), "fov {fov}, distance {distance}");
            assert!(p.project_slide(0.0, 6.0).is_none());
        }
    }

    #[test]
    fn zero_slide_width_is_invisible() {
        assert!(projector().project_slide(0.0, 0.0).is_none());
    }
}
