//! Drag gesture state machine
//!
//! Gestures report a cumulative horizontal translation measured from the
//! pointer-down position. The controller turns that translation into a new
//! value, anchored at the pixel position committed when the gesture began.

use std::ops::RangeInclusive;

use super::mapper::Mapper;

/// Translations smaller than this re-seed the anchor from the rendered thumb
const SEED_EPSILON: f64 = 0.1;

/// The host-visible slider state
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub value: f64,
    pub range: RangeInclusive<f64>,
    pub is_disabled: bool,
    pub is_value_label_hidden: bool,
}

impl SliderState {
    /// Create a state, clamping `value` into `range`
    pub fn new(value: f64, range: RangeInclusive<f64>) -> Self {
        let mut state = Self {
            value: *range.start(),
            range,
            is_disabled: false,
            is_value_label_hidden: false,
        };
        state.set_value(value);
        state
    }

    /// Store a value, clamped to the range
    pub fn set_value(&mut self, value: f64) {
        let (lo, hi) = (*self.range.start(), *self.range.end());
        // A degenerate range pins the value to its start
        self.value = if value.is_nan() || !(lo <= hi) {
            lo
        } else {
            value.clamp(lo, hi)
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
}

/// Result of feeding one movement into the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStep {
    /// This movement moved the controller from idle to dragging
    pub started: bool,
    /// Pixel position the thumb was moved to
    pub pixel: f64,
    /// Value written to the state
    pub value: f64,
}

/// Tracks a single drag session and the committed anchor position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragController {
    phase: Phase,
    last_committed_pixel: f64,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Anchor the next translation is measured from
    pub fn last_committed_pixel(&self) -> f64 {
        self.last_committed_pixel
    }

    /// Feed a movement with cumulative `translation` since pointer-down
    ///
    /// Returns `None` when the slider is disabled, in which case nothing
    /// changes.
    pub fn drag(&mut self, state: &mut SliderState, mapper: &Mapper, translation: f64) -> Option<DragStep> {
        if state.is_disabled {
            return None;
        }

        let started = self.phase == Phase::Idle;
        self.phase = Phase::Dragging;

        // No track to move along; every pixel would read as the range start
        if mapper.track_width() <= 0.0 {
            return Some(DragStep {
                started,
                pixel: 0.0,
                value: state.value,
            });
        }

        if translation.abs() < SEED_EPSILON {
            self.last_committed_pixel = mapper.value_to_pixel(state.value);
        }

        let pixel = if translation > 0.0 {
            mapper.track_width().min(self.last_committed_pixel + translation)
        } else {
            (self.last_committed_pixel + translation).max(0.0)
        };

        state.set_value(mapper.pixel_to_value(pixel));

        Some(DragStep {
            started,
            pixel,
            value: state.value,
        })
    }

    /// End the gesture; returns `true` if a drag was in progress
    pub fn release(&mut self) -> bool {
        let was_dragging = self.phase == Phase::Dragging;
        self.phase = Phase::Idle;
        was_dragging
    }
}
