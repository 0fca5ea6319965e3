// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine: turn pointer events into transitions and X deltas.
//!
//! ## Usage
//!
//! 1) Route every pointer event through [`DragTracker::apply`] and interpret
//!    the returned [`DragUpdate`].
//! 2) Alternatively, drive the granular [`DragTracker::press`],
//!    [`DragTracker::update`], and [`DragTracker::release`] methods directly.
//!
//! The tracker is X-axis only: the carousel scrolls horizontally, and each
//! move reports the horizontal delta since the previous event. The reference
//! position advances on every move, so deltas are per-event, not cumulative.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use gyre_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//!
//! drag.press(Point::new(10.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Moves report the delta since the last event.
//! assert_eq!(drag.update(Point::new(25.0, 0.0)), Some(15.0));
//! assert_eq!(drag.update(Point::new(20.0, 0.0)), Some(-5.0));
//!
//! drag.release();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Point;

use crate::{PointerEvent, PointerEventKind};

/// Result of applying a pointer event to a [`DragTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// A drag began at the event position.
    Started,
    /// The pointer moved while dragging; carries the X delta since the
    /// previous event.
    Moved(f64),
    /// The active drag ended.
    Ended,
    /// The event did not change drag state (a move or release with no active
    /// drag, or a repeated press).
    Ignored,
}

/// Tracks an active horizontal drag across pointer events.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    reference_x: Option<f64>,
}

impl DragTracker {
    /// Routes a pointer event to the appropriate transition.
    ///
    /// Up, leave, and cancel all end the drag identically, so a pointer
    /// exiting the interactive region mid-gesture can never leave the tracker
    /// stuck in a dragging state.
    pub fn apply(&mut self, event: PointerEvent) -> DragUpdate {
        match event.kind {
            PointerEventKind::Down => {
                if self.press(event.position) {
                    DragUpdate::Started
                } else {
                    DragUpdate::Ignored
                }
            }
            PointerEventKind::Move => match self.update(event.position) {
                Some(delta) => DragUpdate::Moved(delta),
                None => DragUpdate::Ignored,
            },
            PointerEventKind::Up | PointerEventKind::Leave | PointerEventKind::Cancel => {
                if self.release() {
                    DragUpdate::Ended
                } else {
                    DragUpdate::Ignored
                }
            }
        }
    }

    /// Begins a drag at the given position, returning `true` if a new drag
    /// started.
    ///
    /// A press while a drag is already active re-anchors the reference
    /// position without reporting a second start.
    pub fn press(&mut self, pos: Point) -> bool {
        let started = self.reference_x.is_none();
        self.reference_x = Some(pos.x);
        started
    }

    /// Updates the drag with a new position, returning the X delta since the
    /// previous event, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        let reference = self.reference_x?;
        self.reference_x = Some(pos.x);
        Some(pos.x - reference)
    }

    /// Ends the active drag, returning `true` if one was active.
    pub fn release(&mut self) -> bool {
        self.reference_x.take().is_some()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.reference_x.is_some()
    }
}
