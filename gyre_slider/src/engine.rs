// Copyright 2025 the Gyre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine controller: state ownership, the per-tick pipeline, and events.

use alloc::vec::Vec;

use kurbo::Size;
use smallvec::SmallVec;

use gyre_clock::{Clock, ContinuousState};
use gyre_gesture::PointerEvent;
use gyre_gesture::drag::{DragTracker, DragUpdate};
use gyre_layout::{CircularLayout, slide_width_for_viewport};
use gyre_overlay::{ActiveSlideDetector, PositionTable};
use gyre_project::Projector;

use crate::{Slide, SliderConfig};

/// Per-tick camera and viewport parameters, refreshed from the rendering
/// collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Viewport size in device pixels.
    pub viewport: Size,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Camera distance from the slide plane in world units.
    pub camera_distance: f64,
}

impl FrameInput {
    /// Creates a frame input with the default camera (45-degree field of
    /// view at distance 10).
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            fov_y_degrees: Projector::DEFAULT_FOV_Y_DEGREES,
            camera_distance: Projector::DEFAULT_DISTANCE,
        }
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

/// A transition produced by pointer handling or a tick.
///
/// Events are returned as values for the host to interpret; the engine never
/// calls back into application code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// A drag gesture began.
    DragStarted,
    /// The drag gesture ended; residual momentum takes over.
    DragEnded,
    /// The most-opaque slide changed decisively.
    ActiveSlideChanged {
        /// Index of the newly active slide.
        index: usize,
        /// The slide's caller-chosen identity.
        id: u64,
    },
}

/// Events produced by a single engine operation.
pub type EngineEvents = SmallVec<[EngineEvent; 2]>;

/// Debug snapshot of the engine state.
#[derive(Clone, Copy, Debug)]
pub struct EngineDebugInfo {
    /// Current scroll progress in cycles.
    pub progress: f64,
    /// Current residual velocity.
    pub velocity: f64,
    /// Current distortion intensity.
    pub effect: f64,
    /// Whether a drag is active.
    pub dragging: bool,
    /// Whether ticks are being processed.
    pub running: bool,
    /// Number of slides in the published position table.
    pub visible_slides: usize,
    /// The active slide, if one has been detected.
    pub active_slide: Option<usize>,
}

/// The carousel engine: owns the continuous state and publishes the overlay
/// position table.
///
/// Two event sources drive the engine on one logical thread: pointer events
/// via [`SliderEngine::handle_pointer`] and the display-refresh tick via
/// [`SliderEngine::tick`]. Both are plain `&mut self` methods, so every
/// transition runs to completion before the next begins and no locking is
/// needed.
///
/// The tick pipeline is: advance the clock, derive the slide width from the
/// frame's world viewport, lay out every slide on the wrapped circle,
/// project each into a screen placement, publish the table as one atomic
/// snapshot, then run active-slide detection. A stopped engine skips all of
/// it; [`SliderEngine::start`] and [`SliderEngine::stop`] are idempotent so
/// the host's frame scheduler can consult [`SliderEngine::is_running`] to
/// decide whether to request another tick.
#[derive(Debug)]
pub struct SliderEngine {
    slides: Vec<Slide>,
    config: SliderConfig,
    clock: Clock,
    state: ContinuousState,
    tracker: DragTracker,
    table: PositionTable,
    detector: ActiveSlideDetector,
    running: bool,
}

impl SliderEngine {
    /// Creates an engine over the given slides, running, with no active
    /// slide and the state at rest.
    ///
    /// An empty slide set is valid: the engine initializes normally, the
    /// position table stays empty, and no active-slide event ever fires.
    #[must_use]
    pub fn new(slides: Vec<Slide>, config: SliderConfig) -> Self {
        let clock = Clock::new(config.timing);
        Self {
            slides,
            config,
            clock,
            state: ContinuousState::new(),
            tracker: DragTracker::default(),
            table: PositionTable::new(),
            detector: ActiveSlideDetector::new(),
            running: true,
        }
    }

    /// Routes a pointer event into the drag state machine and the
    /// continuous state.
    ///
    /// Down begins a drag (zeroing stale velocity); moves while dragging
    /// accumulate progress, re-derive velocity, and spike the effect; up,
    /// leave, and cancel all end the drag identically, leaving the last
    /// velocity as initial momentum. Moves without an active drag are
    /// ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EngineEvents {
        let mut events = EngineEvents::new();
        match self.tracker.apply(event) {
            DragUpdate::Started => {
                self.clock.begin_drag(&mut self.state);
                events.push(EngineEvent::DragStarted);
            }
            DragUpdate::Moved(delta_x) => {
                self.clock.apply_drag(&mut self.state, delta_x);
            }
            DragUpdate::Ended => {
                events.push(EngineEvent::DragEnded);
            }
            DragUpdate::Ignored => {}
        }
        events
    }

    /// Runs one display-refresh tick: a pure, synchronous state transition
    /// with no suspension points.
    ///
    /// Returns no events and changes nothing while the engine is stopped.
    /// With an empty slide set only the clock advances; layout and
    /// projection are skipped entirely and the table stays empty.
    pub fn tick(&mut self, frame: &FrameInput) -> EngineEvents {
        let mut events = EngineEvents::new();
        if !self.running {
            return events;
        }

        self.clock.tick(&mut self.state, self.tracker.is_dragging());

        if self.slides.is_empty() {
            return events;
        }

        let projector =
            Projector::with_camera(frame.viewport, frame.fov_y_degrees, frame.camera_distance);
        let slide_width = slide_width_for_viewport(projector.world_size().width);
        let layout = CircularLayout::new(self.slides.len(), slide_width);

        let mut update = self.table.begin_frame();
        for index in 0..self.slides.len() {
            let x = layout.position(index, self.state.progress);
            if let Some(placement) = projector.project_slide(x, slide_width) {
                update.insert(index, placement);
            }
        }
        self.table.publish(update);

        if let Some(index) = self.detector.observe(&self.table) {
            events.push(EngineEvent::ActiveSlideChanged {
                index,
                id: self.slides[index].id,
            });
        }
        events
    }

    /// Resumes tick processing. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts tick processing without discarding any state. Idempotent.
    ///
    /// The host's scheduler should stop requesting frames once this is
    /// called; a tick delivered anyway is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns `true` while ticks are being processed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the slides, in caller order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns a slide by index, or `None` when out of range.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Returns the published position table for the presentation layer.
    #[must_use]
    pub fn positions(&self) -> &PositionTable {
        &self.table
    }

    /// Returns the active slide index, if one has been detected.
    #[must_use]
    pub fn active_slide(&self) -> Option<usize> {
        self.detector.active()
    }

    /// Returns the current scroll progress in cycles.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Jumps the scroll progress to an absolute value, for programmatic
    /// navigation. Velocity and effect are left untouched; the next tick
    /// publishes the new positions.
    pub fn set_progress(&mut self, progress: f64) {
        self.state.progress = progress;
    }

    /// Returns the current residual velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Returns the current distortion intensity for the rendering
    /// collaborator.
    #[must_use]
    pub fn effect_value(&self) -> f64 {
        self.state.effect
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        EngineDebugInfo {
            progress: self.state.progress,
            velocity: self.state.velocity,
            effect: self.state.effect,
            dragging: self.tracker.is_dragging(),
            running: self.running,
            visible_slides: self.table.len(),
            active_slide: self.detector.active(),
        }
    }
}
