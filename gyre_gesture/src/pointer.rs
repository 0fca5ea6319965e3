// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal host-agnostic pointer event vocabulary.

use kurbo::Point;

/// The kind of a pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button or touch contact went down.
    Down,
    /// The pointer moved.
    Move,
    /// Primary button or touch contact was released.
    Up,
    /// The pointer left the interactive region.
    ///
    /// Treated identically to [`PointerEventKind::Up`] by drag tracking so a
    /// gesture can never get stuck when the pointer exits mid-drag.
    Leave,
    /// The host cancelled the pointer sequence (for example, the touch was
    /// claimed by a system gesture). Treated identically to
    /// [`PointerEventKind::Up`].
    Cancel,
}

/// A pointer event with its position in device coordinates.
///
/// Only the X coordinate is consumed by the slider engine; the full point is
/// carried because that is the shape hosts naturally produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Pointer position in device coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Returns `true` if this event ends a pointer sequence (up, leave, or
    /// cancel).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Up | PointerEventKind::Leave | PointerEventKind::Cancel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_leave_and_cancel_are_terminal() {
        for kind in [
            PointerEventKind::Up,
            PointerEventKind::Leave,
            PointerEventKind::Cancel,
        ] {
            assert!(PointerEvent::new(kind, Point::ZERO).is_terminal());
        }
    }

    #[test]
    fn down_and_move_are_not_terminal() {
        for kind in [PointerEventKind::Down, PointerEventKind::Move] {
            assert!(!PointerEvent::new(kind, Point::ZERO).is_terminal());
        }
    }
}
