//! Pointer drag state machine.

use crate::position::Direction;

/// Current phase of a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    /// No pointer is down
    Idle,
    /// Pointer is down and moving the track
    Dragging {
        /// Pointer x at press time
        start_x: f64,
        /// Translate snapshot at press time
        prev_translate: f64,
    },
    /// Released; a loop snap triggered by the release is settling
    Committing,
}

/// What a release should do to the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// `translate - prev_translate` at release
    pub moved_by: f64,
    /// Step to commit, or `None` to snap back
    pub step: Option<Direction>,
}

/// Converts pointer input into translate offsets and release decisions.
///
/// The controller only tracks the gesture. Clamping and committing are
/// applied by the position controller.
///
/// ## Example
///
/// ```rust
/// use slider_core::{Direction, DragController};
///
/// let mut drag = DragController::new();
/// drag.pointer_down(500.0, -300.0);
/// assert_eq!(drag.pointer_move(380.0), Some(-420.0));
///
/// let release = drag.release(-420.0, 300.0).unwrap();
/// assert_eq!(release.step, Some(Direction::Forward));
/// ```
#[derive(Clone, Debug)]
pub struct DragController {
    phase: DragPhase,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { phase: DragPhase::Idle }
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a pointer is currently dragging the track.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Whether the controller is waiting for a release to settle.
    #[inline]
    pub fn is_committing(&self) -> bool {
        self.phase == DragPhase::Committing
    }

    /// Start a drag at pointer `x` with the current translate.
    ///
    /// Ignored unless idle.
    pub fn pointer_down(&mut self, x: f64, current_translate: f64) -> bool {
        if self.phase != DragPhase::Idle {
            return false;
        }
        self.phase = DragPhase::Dragging {
            start_x: x,
            prev_translate: current_translate,
        };
        true
    }

    /// Unclamped translate for pointer `x`, or `None` when not dragging.
    pub fn pointer_move(&self, x: f64) -> Option<f64> {
        match self.phase {
            DragPhase::Dragging { start_x, prev_translate } => Some(prev_translate + (x - start_x)),
            _ => None,
        }
    }

    /// End the drag and decide whether to commit a step.
    ///
    /// A step is committed when the track moved by more than a third of a
    /// slide width. Moving left (negative) advances, moving right goes back.
    pub fn release(&mut self, translate: f64, slide_width: f64) -> Option<DragRelease> {
        let DragPhase::Dragging { prev_translate, .. } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;

        let moved_by = translate - prev_translate;
        let threshold = slide_width / 3.0;
        let step = if moved_by < -threshold {
            Some(Direction::Forward)
        } else if moved_by > threshold {
            Some(Direction::Backward)
        } else {
            None
        };
        Some(DragRelease { moved_by, step })
    }

    /// Hold the gesture open while a release-triggered loop snap settles.
    pub fn begin_commit(&mut self) {
        self.phase = DragPhase::Committing;
    }

    /// Return to idle once the commit has settled.
    pub fn finish_commit(&mut self) {
        if self.phase == DragPhase::Committing {
            self.phase = DragPhase::Idle;
        }
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
