//! Buffered index and the pixel translation derived from it.

/// Duration of an animated position change, in milliseconds.
pub const SLIDE_TRANSITION_MS: u32 = 300;

/// Step direction for navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Measured slide geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Width of a single slide in pixels (0 until measured)
    pub slide_width: f64,
    /// Gap between slides in pixels
    pub gap_px: f64,
    /// Slides visible at once (>= 1)
    pub slides_per_view: usize,
}

impl Geometry {
    /// Derive slide width from the container width.
    pub fn from_container(container_width: f64, gap_px: f64, slides_per_view: usize) -> Self {
        let slides_per_view = slides_per_view.max(1);
        let slide_width = if container_width > 0.0 {
            container_width / slides_per_view as f64
        } else {
            0.0
        };
        Self {
            slide_width,
            gap_px: gap_px.max(0.0),
            slides_per_view,
        }
    }

    /// Whether a usable width has been measured.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.slide_width > 0.0
    }

    /// Distance between two consecutive slide origins.
    #[inline]
    pub fn stride(&self) -> f64 {
        self.slide_width + self.gap_px
    }

    fn gap_offset(&self) -> f64 {
        (self.slides_per_view as f64 - 1.0) / 2.0
    }

    /// `-index * slide_width - (index + (slides_per_view - 1) / 2) * gap`
    pub fn translate_for(&self, index: isize) -> f64 {
        let index = index as f64;
        -index * self.slide_width - (index + self.gap_offset()) * self.gap_px
    }

    /// Inverse of [`translate_for`](Self::translate_for), rounded half-up.
    pub fn index_for(&self, translate: f64) -> isize {
        let stride = self.stride();
        if stride <= 0.0 {
            return 0;
        }
        let exact = (-translate - self.gap_offset() * self.gap_px) / stride;
        round_half_up(exact) as isize
    }
}

/// Round to the nearest integer, ties towards positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// A transform the render adapter should apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformIntent {
    pub translate_px: f64,
    pub transition_ms: u32,
}

/// Pending animated wrap across the loop seam.
///
/// The adapter first animates to `over_translate` (clones visible), then
/// once the settle delay elapses the index jumps to `target_index` with no
/// transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopSnap {
    pub over_translate: f64,
    pub target_index: isize,
    pub direction: Direction,
}

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Index changed; apply the transform.
    Moved(TransformIntent),
    /// Index changed in cross-fade mode; no transform, refresh active slide.
    Faded,
    /// Crossing the loop seam; start the animated loop snap.
    LoopSnap(LoopSnap),
    /// Clamped at an end; nothing to do.
    Unchanged,
    /// A loop snap is in flight.
    Blocked,
}

/// Result of one continuous-autoplay advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drift {
    /// Translate moved; index re-derived.
    Moved,
    /// Passed a full loop and was shifted back by one loop width.
    Wrapped,
    /// Reached the last valid translate (non-looping); motion must stop.
    ReachedEnd,
}

/// Single source of truth for the buffered index and its translate.
///
/// ## Example
///
/// ```rust
/// use slider_core::{Direction, Geometry, PositionController, Step};
///
/// let geometry = Geometry::from_container(300.0, 0.0, 1);
/// let mut position = PositionController::new(geometry, 9, 1, false);
/// assert_eq!(position.index(), 1);
///
/// assert!(matches!(position.navigate(Direction::Forward), Step::Moved(_)));
/// assert_eq!(position.index(), 2);
/// assert_eq!(position.translate(), -600.0);
/// ```
#[derive(Clone, Debug)]
pub struct PositionController {
    /// Current buffered index
    index: isize,
    /// Live translate in pixels
    translate: f64,
    /// Translate snapshot at the last settle or drag start
    prev_translate: f64,
    geometry: Geometry,
    /// Canonical slide count
    original_len: usize,
    /// Clones per side; 0 disables looping
    buffer_size: usize,
    /// Position expressed as an active slide instead of a translate
    cross_fade: bool,
    /// Loop snap in flight
    loop_snap: Option<LoopSnap>,
}

impl PositionController {
    /// Create a controller at the first canonical slide.
    pub fn new(geometry: Geometry, original_len: usize, buffer_size: usize, cross_fade: bool) -> Self {
        let mut controller = Self {
            index: buffer_size as isize,
            translate: 0.0,
            prev_translate: 0.0,
            geometry,
            original_len,
            buffer_size,
            cross_fade,
            loop_snap: None,
        };
        controller.sync_translate();
        controller
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index.max(0) as usize
    }

    #[inline]
    pub fn translate(&self) -> f64 {
        self.translate
    }

    #[inline]
    pub fn prev_translate(&self) -> f64 {
        self.prev_translate
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.buffer_size > 0
    }

    #[inline]
    pub fn is_cross_fade(&self) -> bool {
        self.cross_fade
    }

    /// Whether a loop snap animation is in flight.
    #[inline]
    pub fn is_animating_loop(&self) -> bool {
        self.loop_snap.is_some()
    }

    /// Total number of buffered slides.
    pub fn buffered_len(&self) -> usize {
        self.original_len + self.buffer_size * 2
    }

    /// Logical index currently shown.
    pub fn logical_index(&self) -> usize {
        if self.original_len == 0 {
            return 0;
        }
        let len = self.original_len as isize;
        (self.index - self.buffer_size as isize).rem_euclid(len) as usize
    }

    /// Range of indices `navigate` may settle on without a loop snap.
    pub fn settled_range(&self) -> (isize, isize) {
        let spv = self.geometry.slides_per_view as isize;
        let len = self.original_len as isize;
        if self.is_looping() {
            let min = self.buffer_size as isize;
            (min, min + len - spv)
        } else {
            (0, (len - spv).max(0))
        }
    }

    /// Translate of an arbitrary buffered index.
    #[inline]
    pub fn translate_for(&self, index: isize) -> f64 {
        self.geometry.translate_for(index)
    }

    /// Translate the current index maps to, ignoring any live drag offset.
    pub fn current_translate(&self) -> f64 {
        if self.cross_fade {
            return 0.0;
        }
        self.translate_for(self.index)
    }

    /// Snap `translate` and `prev_translate` back onto the current index.
    pub fn sync_translate(&mut self) {
        self.translate = self.current_translate();
        self.prev_translate = self.translate;
    }

    /// Jump to a buffered index.
    ///
    /// The index is clamped (non-looping) or wrapped (looping) into range.
    /// Returns `None` in cross-fade mode, where no translate applies.
    pub fn set_index(&mut self, index: usize, animate: bool) -> Option<TransformIntent> {
        self.index = index as isize;
        if self.is_looping() {
            self.adjust_for_loop();
        } else {
            let (min, max) = self.settled_range();
            self.index = self.index.clamp(min, max);
        }
        self.sync_translate();
        if self.cross_fade {
            return None;
        }
        Some(self.intent(animate))
    }

    /// Step one slide forward or backward.
    pub fn navigate(&mut self, direction: Direction) -> Step {
        if self.loop_snap.is_some() {
            return Step::Blocked;
        }
        if self.original_len == 0 {
            return Step::Unchanged;
        }

        let next = self.index + direction.delta();
        let (min, max) = self.settled_range();

        if self.cross_fade {
            self.index = if self.is_looping() {
                next
            } else {
                next.rem_euclid(self.original_len as isize)
            };
            self.adjust_for_loop();
            self.sync_translate();
            return Step::Faded;
        }

        if self.is_looping() {
            if next > max || next < min {
                let len = self.original_len as isize;
                let target_index = if next > max { next - len } else { next + len };
                return Step::LoopSnap(LoopSnap {
                    over_translate: self.translate_for(next),
                    target_index,
                    direction,
                });
            }
            self.index = next;
        } else {
            let clamped = next.clamp(min, max);
            if clamped == self.index {
                return Step::Unchanged;
            }
            self.index = clamped;
        }

        self.sync_translate();
        Step::Moved(self.intent(true))
    }

    /// Begin an animated loop snap. Returns the transform towards the clones.
    pub fn begin_loop_snap(&mut self, snap: LoopSnap) -> TransformIntent {
        self.loop_snap = Some(snap);
        TransformIntent {
            translate_px: snap.over_translate,
            transition_ms: SLIDE_TRANSITION_MS,
        }
    }

    /// Finish a loop snap: renormalise the index and return the instant
    /// transform onto the equivalent canonical position.
    pub fn finish_loop_snap(&mut self) -> Option<TransformIntent> {
        let snap = self.loop_snap.take()?;
        self.index = snap.target_index;
        self.adjust_for_loop();
        self.sync_translate();
        Some(self.intent(false))
    }

    /// Abandon an in-flight loop snap without moving (teardown/relayout).
    pub fn cancel_loop_snap(&mut self) {
        self.loop_snap = None;
    }

    /// Shift an out-of-range looping index by one loop length.
    pub fn adjust_for_loop(&mut self) {
        if !self.is_looping() {
            return;
        }
        let (min, max) = self.settled_range();
        let len = self.original_len as isize;
        if self.index < min {
            self.index += len;
        } else if self.index > max {
            self.index -= len;
        }
    }

    /// Begin a drag: snapshot the live translate.
    pub fn begin_drag(&mut self) -> f64 {
        self.prev_translate = self.translate;
        self.prev_translate
    }

    /// Move the live translate during a drag.
    ///
    /// Non-looping drags are clamped between the first and last valid
    /// index; looping drags are left free.
    pub fn drag_to(&mut self, translate: f64) -> f64 {
        self.translate = if self.is_looping() {
            translate
        } else {
            let (min, max) = self.settled_range();
            translate.clamp(self.translate_for(max), self.translate_for(min))
        };
        self.translate
    }

    /// Set the index from the live translate without moving it.
    ///
    /// Used when continuous motion owns the translate.
    pub fn settle_from_translate(&mut self) {
        let derived = self.geometry.index_for(self.translate);
        if self.is_looping() {
            let period = self.loop_width();
            let start = self.translate_for(self.buffer_size as isize);
            let seam = self.translate_for((self.buffer_size + self.original_len) as isize);
            while period > 0.0 && self.translate < seam {
                self.translate += period;
            }
            while period > 0.0 && self.translate > start {
                self.translate -= period;
            }
            self.index = self.geometry.index_for(self.translate);
            self.adjust_for_loop();
        } else {
            let (min, max) = self.settled_range();
            self.index = derived.clamp(min, max);
        }
        self.prev_translate = self.translate;
    }

    /// Width of one full pass over the canonical slides.
    pub fn loop_width(&self) -> f64 {
        self.original_len as f64 * self.geometry.stride()
    }

    /// Advance the translate by `distance_px` of continuous motion.
    pub fn drift(&mut self, distance_px: f64) -> Drift {
        self.translate -= distance_px;
        let mut outcome = Drift::Moved;

        if self.is_looping() {
            let seam = self.translate_for((self.buffer_size + self.original_len) as isize);
            let period = self.loop_width();
            if self.translate < seam && period > 0.0 {
                // A late frame may cover several loops
                self.translate = seam + (self.translate - seam).rem_euclid(period);
                outcome = Drift::Wrapped;
            }
            self.index = self.geometry.index_for(self.translate);
            self.adjust_for_loop();
        } else {
            let (min, max) = self.settled_range();
            let end = self.translate_for(max);
            if self.translate <= end {
                self.translate = end;
                outcome = Drift::ReachedEnd;
            }
            self.index = self.geometry.index_for(self.translate).clamp(min, max);
        }

        self.prev_translate = self.translate;
        outcome
    }

    /// Whether continuous motion has nowhere further to go.
    pub fn at_end(&self) -> bool {
        if self.is_looping() {
            return false;
        }
        let (_, max) = self.settled_range();
        self.translate <= self.translate_for(max)
    }

    /// Replace geometry and loop buffering after a slides-per-view change.
    ///
    /// The logical position is preserved, the index re-centred on the new
    /// buffer, and the translate recomputed with no transition.
    pub fn relayout(&mut self, geometry: Geometry, original_len: usize, buffer_size: usize, cross_fade: bool) -> TransformIntent {
        let logical = self.logical_index() as isize;
        self.loop_snap = None;
        self.geometry = geometry;
        self.original_len = original_len;
        self.buffer_size = buffer_size;
        self.cross_fade = cross_fade;

        self.index = buffer_size as isize + logical;
        if self.is_looping() {
            self.adjust_for_loop();
        } else {
            let (min, max) = self.settled_range();
            self.index = self.index.clamp(min, max);
        }
        self.sync_translate();
        self.intent(false)
    }

    /// Whether backward/forward navigation would do anything.
    pub fn can_navigate(&self) -> (bool, bool) {
        if self.original_len == 0 {
            return (false, false);
        }
        if self.is_looping() || self.cross_fade {
            return (true, true);
        }
        let (min, max) = self.settled_range();
        (self.index > min, self.index < max)
    }

    fn intent(&self, animate: bool) -> TransformIntent {
        TransformIntent {
            translate_px: self.translate,
            transition_ms: if animate { SLIDE_TRANSITION_MS } else { 0 },
        }
    }
}
