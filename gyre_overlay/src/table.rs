// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The published slide-index to placement mapping.

use hashbrown::HashMap;

use gyre_project::{Placement, VISIBILITY_EPSILON};

/// One tick's worth of placements, staged before publication.
///
/// Obtain one from [`PositionTable::begin_frame`] (which recycles the
/// previous snapshot's allocation) or [`FrameUpdate::new`], fill it with
/// [`FrameUpdate::insert`], and hand it to [`PositionTable::publish`].
#[derive(Debug, Default)]
pub struct FrameUpdate {
    pub(crate) entries: HashMap<usize, Placement>,
}

impl FrameUpdate {
    /// Creates an empty staged update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a placement for the given slide index.
    ///
    /// Placements at or below the visibility epsilon are dropped here as a
    /// second line of defense; the projector already declines to produce
    /// them. Staying absent keeps the "no entry with opacity <= 0.01"
    /// invariant unconditional.
    pub fn insert(&mut self, index: usize, placement: Placement) {
        if placement.opacity > VISIBILITY_EPSILON {
            self.entries.insert(index, placement);
        }
    }

    /// Returns the number of staged entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The published mapping from slide index to screen placement.
///
/// The table only ever changes by swapping in a complete [`FrameUpdate`], so
/// every read between two publishes sees one coherent tick. A missing index
/// means "not visible this tick"; out-of-range indices are simply missing,
/// never an error.
#[derive(Debug, Default)]
pub struct PositionTable {
    entries: HashMap<usize, Placement>,
    spare: HashMap<usize, Placement>,
}

impl PositionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts staging the next tick, reusing the allocation of the snapshot
    /// published two ticks ago.
    pub fn begin_frame(&mut self) -> FrameUpdate {
        let mut entries = core::mem::take(&mut self.spare);
        entries.clear();
        FrameUpdate { entries }
    }

    /// Atomically replaces the published snapshot with the staged update.
    pub fn publish(&mut self, update: FrameUpdate) {
        self.spare = core::mem::replace(&mut self.entries, update.entries);
    }

    /// Returns the placement for a slide index, or `None` when the slide is
    /// not visible this tick (including out-of-range indices).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.entries.get(&index)
    }

    /// Returns the number of visible slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no slide is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the visible slides in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.entries.iter().map(|(&index, placement)| (index, placement))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;

    fn placement(opacity: f64) -> Placement {
        Placement {
            rect: Rect::new(0.0, 0.0, 100.0, 62.5),
            opacity,
        }
    }

    #[test]
    fn empty_table_has_no_entries() {
        let table = PositionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn publish_replaces_the_whole_snapshot() {
        let mut table = PositionTable::new();

        let mut frame = table.begin_frame();
        frame.insert(0, placement(0.9));
        frame.insert(1, placement(0.4));
        table.publish(frame);
        assert_eq!(table.len(), 2);

        // The next tick only stages slide 1: slide 0's removal and slide 1's
        // update land together.
        let mut frame = table.begin_frame();
        frame.insert(1, placement(0.7));
        table.publish(frame);

        assert_eq!(table.len(), 1);
        assert!(table.get(0).is_none());
        assert_eq!(table.get(1).map(|p| p.opacity), Some(0.7));
    }

    #[test]
    fn begin_frame_starts_empty_even_after_publishes() {
        let mut table = PositionTable::new();
        let mut frame = table.begin_frame();
        frame.insert(0, placement(0.9));
        table.publish(frame);

        let frame = table.begin_frame();
        assert!(frame.is_empty());
        table.publish(frame);
        assert!(table.is_empty());
    }

    #[test]
    fn invisible_placements_are_never_stored() {
        let mut frame = FrameUpdate::new();
        frame.insert(0, placement(0.009));
        frame.insert(1, placement(0.01));
        frame.insert(2, placement(0.011));
        assert_eq!(frame.len(), 1);

        let mut table = PositionTable::new();
        table.publish(frame);
        assert!(table.get(0).is_none());
        assert!(table.get(1).is_none());
        assert!(table.get(2).is_some());
    }

    #[test]
    fn iter_visits_every_visible_slide() {
        let mut table = PositionTable::new();
        let mut frame = table.begin_frame();
        for index in [3_usize, 5, 8] {
            frame.insert(index, placement(0.5));
        }
        table.publish(frame);

        let mut seen: alloc::vec::Vec<usize> = table.iter().map(|(i, _)| i).collect();
        seen.sort_unstable();
        assert_eq!(seen, [3, 5, 8]);
    }

    #[test]
    fn out_of_range_lookup_is_not_visible() {
        let mut table = PositionTable::new();
        let mut frame = table.begin_frame();
        frame.insert(0, placement(1.0));
        table.publish(frame);
        assert!(table.get(usize::MAX).is_none());
    }
}
