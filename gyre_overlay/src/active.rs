// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-slide detection with hysteresis.

use crate::PositionTable;

/// Opacity a slide must exceed before it can become the active slide.
///
/// This is the hysteresis that keeps two partially-visible neighbors near a
/// transition boundary from toggling the active index back and forth.
pub const ACTIVE_THRESHOLD: f64 = 0.5;

/// Derives "the currently focused slide" from successive position-table
/// snapshots.
///
/// Each observation finds the most-opaque visible slide. A change is
/// reported only when that index differs from the last reported one **and**
/// its opacity exceeds [`ACTIVE_THRESHOLD`]; otherwise the previous active
/// index is retained (sticky). Equal opacities break toward the lower index
/// so detection is deterministic regardless of table iteration order.
///
/// At most one slide is active at a time; before any slide has crossed the
/// threshold, none is.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveSlideDetector {
    last: Option<usize>,
}

impl ActiveSlideDetector {
    /// Creates a detector with no active slide.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last reported active slide, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.last
    }

    /// Forgets the active slide, so the next qualifying observation reports
    /// a change even if it names the same index.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Observes a freshly published snapshot, returning `Some(index)` when
    /// the active slide changed.
    pub fn observe(&mut self, table: &PositionTable) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, placement) in table.iter() {
            let better = match best {
                None => true,
                Some((best_index, best_opacity)) => {
                    placement.opacity > best_opacity
                        || (placement.opacity == best_opacity && index < best_index)
                }
            };
            if better {
                best = Some((index, placement.opacity));
            }
        }

        let (index, opacity) = best?;
        if opacity > ACTIVE_THRESHOLD && self.last != Some(index) {
            self.last = Some(index);
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use gyre_project::Placement;

    use super::*;
    use crate::PositionTable;

    fn publish(table: &mut PositionTable, entries: &[(usize, f64)]) {
        let mut frame = table.begin_frame();
        for &(index, opacity) in entries {
            frame.insert(
                index,
                Placement {
                    rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                    opacity,
                },
            );
        }
        table.publish(frame);
    }

    #[test]
    fn no_slide_is_active_initially() {
        let detector = ActiveSlideDetector::new();
        assert_eq!(detector.active(), None);
    }

    #[test]
    fn empty_table_never_activates() {
        let mut detector = ActiveSlideDetector::new();
        let table = PositionTable::new();
        for _ in 0..100 {
            assert_eq!(detector.observe(&table), None);
        }
        assert_eq!(detector.active(), None);
    }

    #[test]
    fn first_slide_above_threshold_becomes_active() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(2, 0.9), (3, 0.2)]);
        assert_eq!(detector.observe(&table), Some(2));
        assert_eq!(detector.active(), Some(2));
    }

    #[test]
    fn repeat_observations_do_not_refire() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(1, 0.8)]);
        assert_eq!(detector.observe(&table), Some(1));
        assert_eq!(detector.observe(&table), None);
        assert_eq!(detector.observe(&table), None);
    }

    #[test]
    fn argmax_below_threshold_keeps_previous_active() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(0, 0.9)]);
        assert_eq!(detector.observe(&table), Some(0));

        // Slide 4 is now the most opaque, but not decisively so.
        publish(&mut table, &[(0, 0.3), (4, 0.45)]);
        assert_eq!(detector.observe(&table), None);
        assert_eq!(detector.active(), Some(0));
    }

    #[test]
    fn decisive_takeover_changes_active() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(0, 0.9), (1, 0.1)]);
        assert_eq!(detector.observe(&table), Some(0));

        publish(&mut table, &[(0, 0.2), (1, 0.85)]);
        assert_eq!(detector.observe(&table), Some(1));
    }

    #[test]
    fn shared_oscillating_opacities_do_not_toggle() {
        // Two neighbors whose opacities swing together between 0.4 and 0.6:
        // the deterministic tie-break pins the active index instead of
        // letting it flap.
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        let mut changes = 0;
        for tick in 0..20 {
            let opacity = if tick % 2 == 0 { 0.4 } else { 0.6 };
            publish(&mut table, &[(5, opacity), (6, opacity)]);
            if detector.observe(&table).is_some() {
                changes += 1;
            }
        }

        assert_eq!(changes, 1, "active index must settle, not toggle");
        assert_eq!(detector.active(), Some(5));
    }

    #[test]
    fn reset_allows_the_same_index_to_refire() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(7, 0.9)]);
        assert_eq!(detector.observe(&table), Some(7));

        detector.reset();
        assert_eq!(detector.active(), None);
        assert_eq!(detector.observe(&table), Some(7));
    }

    #[test]
    fn exactly_threshold_opacity_is_not_decisive() {
        let mut detector = ActiveSlideDetector::new();
        let mut table = PositionTable::new();

        publish(&mut table, &[(0, 0.5)]);
        assert_eq!(detector.observe(&table), None);
        assert_eq!(detector.active(), None);
    }
}
