//! The slider engine: one instance per mounted slider.
//!
//! The engine is single-threaded and cooperative. It owns every timer and
//! frame request it makes, and the host drives it with three kinds of calls:
//!
//! - input events (`pointer_down`, `on_hover_enter`, `on_dot_click`, …),
//! - `poll(now_ms)` to fire due delayed callbacks,
//! - `on_frame(timestamp_ms)` whenever [`SliderEngine::wants_frame`] is true.
//!
//! Exactly one actor changes position at a time. Any user action cancels
//! whatever is driving autoplay before it moves the slider, and nothing may
//! move it while a loop snap is settling.

use blake3::Hash;

use crate::autoplay::{AutoplayMode, AutoplayScheduler, AutoplayState};
use crate::buffer::SlideBuffer;
use crate::drag::DragController;
use crate::error::ConfigWarning;
use crate::memo::{layout_fingerprint, LayoutCache, LayoutKey, LayoutPlan};
use crate::options::{ResolvedOptions, SliderOptions};
use crate::pagination::{dot_count, PaginationState, PaginationSync, PaginationUpdate, DOT_CLICK_DEBOUNCE_MS};
use crate::position::{Direction, Drift, Geometry, PositionController, Step, TransformIntent, SLIDE_TRANSITION_MS};
use crate::render::RenderAdapter;
use crate::timer::{TimerId, TimerKind, TimerQueue};

/// Quiet period after the last resize before geometry is recomputed.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

/// Lifecycle of an engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Mounted but the container has not become visible yet
    Dormant,
    /// Initialised and reacting to input
    Active,
    /// Torn down; every call is a no-op
    Destroyed,
}

/// Snapshot of the engine's mutable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    pub buffered_index: usize,
    pub translate_px: f64,
    pub prev_translate_px: f64,
    pub slides_per_view: usize,
    pub is_dragging: bool,
    pub is_animating_loop: bool,
    pub is_hovering: bool,
    pub autoplay_mode: AutoplayMode,
    pub last_frame_timestamp: Option<f64>,
}

/// A mounted slider.
///
/// ## Example
///
/// ```rust
/// use slider_core::{RecordingAdapter, SliderEngine, SliderOptions};
///
/// let options = SliderOptions {
///     infinite_scrolling: true,
///     pagination: true,
///     ..Default::default()
/// };
/// let adapter = RecordingAdapter::new(300.0, 1280.0);
/// let mut engine = SliderEngine::mount(adapter, (0..9).collect::<Vec<u32>>(), options);
///
/// assert_eq!(engine.index(), 1);
/// engine.next();
/// assert_eq!(engine.active_dot_index(), 1);
///
/// engine.go_to(7);
/// assert_eq!(engine.active_dot_index(), 7);
///
/// engine.destroy();
/// assert_eq!(engine.pending_timers(), 0);
/// ```
#[derive(Debug)]
pub struct SliderEngine<T, A> {
    adapter: A,
    options: SliderOptions,
    resolved: ResolvedOptions,
    fingerprint: Hash,
    buffer: SlideBuffer<T>,
    position: PositionController,
    drag: DragController,
    autoplay: AutoplayScheduler,
    pagination: PaginationSync,
    timers: TimerQueue,
    layout_cache: LayoutCache,
    /// Plan currently applied; `None` before the first layout
    plan: Option<LayoutPlan>,
    lifecycle: Lifecycle,
    /// Latest time seen by `poll`; delays are measured from here
    now_ms: u64,
    is_hovering: bool,
    click_in_flight: bool,
    /// Drag moved since the last frame
    drag_dirty: bool,
    /// Canonical slide last marked active (cross-fade)
    active_slide: Option<usize>,
    /// Last nav button state sent
    nav_state: Option<(bool, bool)>,
    warnings: Vec<ConfigWarning>,
}

impl<T: Clone, A: RenderAdapter> SliderEngine<T, A> {
    /// Mount a slider over `slides`.
    ///
    /// Initialisation happens immediately when the adapter reports the
    /// container visible; otherwise the engine stays dormant until
    /// [`on_visible`](Self::on_visible).
    pub fn mount(adapter: A, slides: Vec<T>, options: SliderOptions) -> Self {
        let resolved = options.resolve();
        let fingerprint = layout_fingerprint(&options);
        let buffer = SlideBuffer::build(slides, 1, false);
        let geometry = Geometry::from_container(0.0, resolved.gap_px, 1);
        let position = PositionController::new(geometry, buffer.original_len(), 0, false);
        let autoplay = AutoplayScheduler::new(resolved.autoplay);
        let warnings = resolved.warnings.clone();

        let mut engine = Self {
            adapter,
            options,
            resolved,
            fingerprint,
            buffer,
            position,
            drag: DragController::new(),
            autoplay,
            pagination: PaginationSync::new(),
            timers: TimerQueue::new(),
            layout_cache: LayoutCache::new(),
            plan: None,
            lifecycle: Lifecycle::Dormant,
            now_ms: 0,
            is_hovering: false,
            click_in_flight: false,
            drag_dirty: false,
            active_slide: None,
            nav_state: None,
            warnings,
        };

        if engine.adapter.is_visible() {
            engine.initialize();
        } else {
            tracing::debug!(slides = engine.buffer.original_len(), "slider.mount_deferred");
        }
        engine
    }

    /// The container scrolled into view; initialise a dormant engine.
    pub fn on_visible(&mut self) {
        if self.lifecycle == Lifecycle::Dormant {
            self.initialize();
        }
    }

    fn initialize(&mut self) {
        self.lifecycle = Lifecycle::Active;
        self.layout(true);
        tracing::debug!(
            slides = self.buffer.original_len(),
            slides_per_view = self.slides_per_view(),
            looping = self.buffer.is_looping(),
            "slider.mounted"
        );
        self.resume_autoplay();
    }

    /// Tear down: cancel every timer and frame request.
    ///
    /// After this call every other method is a no-op.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.autoplay.stop(&mut self.timers);
        self.timers.clear();
        self.position.cancel_loop_snap();
        self.drag.reset();
        self.drag_dirty = false;
        self.click_in_flight = false;
        self.layout_cache.invalidate();
        self.lifecycle = Lifecycle::Destroyed;
        tracing::debug!("slider.destroyed");
    }

    /// Swap in a new configuration.
    ///
    /// Layout is rebuilt only when a layout-affecting option changed.
    pub fn apply_option_change(&mut self, options: SliderOptions) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        let resolved = options.resolve();
        let fingerprint = layout_fingerprint(&options);
        let layout_changed = fingerprint != self.fingerprint;
        for warning in &resolved.warnings {
            self.push_warning(warning.clone());
        }

        self.options = options;
        self.resolved = resolved;
        self.fingerprint = fingerprint;
        if layout_changed {
            // Plans for the old fingerprint can never hit again
            self.layout_cache.invalidate();
        }
        self.autoplay.set_mode(self.resolved.autoplay, &mut self.timers);

        if self.lifecycle != Lifecycle::Active {
            return;
        }

        self.settle_loop_snap_now();
        if self.drag.is_dragging() {
            self.drag.reset();
            self.adapter.set_dragging(false);
        }
        if self.click_in_flight {
            self.timers.cancel_kind(TimerKind::DotDebounce);
            self.click_in_flight = false;
        }
        if !self.resolved.pause_on_hover {
            self.is_hovering = false;
        }

        if layout_changed {
            tracing::debug!("slider.options_changed_layout");
            self.layout(true);
        } else {
            self.pagination.invalidate();
            self.nav_state = None;
            self.refresh();
        }
        self.resume_autoplay();
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Step forward, as the "next" button does.
    pub fn next(&mut self) {
        self.user_navigate(Direction::Forward);
    }

    /// Step backward, as the "previous" button does.
    pub fn prev(&mut self) {
        self.user_navigate(Direction::Backward);
    }

    fn user_navigate(&mut self, direction: Direction) {
        if !self.is_interactive() {
            return;
        }
        self.autoplay.suspend(&mut self.timers);
        self.navigate(direction);
        self.resume_autoplay();
    }

    /// Jump to a canonical slide.
    pub fn go_to(&mut self, logical_index: usize) {
        if !self.is_interactive() {
            return;
        }
        self.autoplay.suspend(&mut self.timers);
        self.settle_loop_snap_now();

        let logical = logical_index % self.buffer.original_len();
        let target = logical + self.buffer.buffer_size();
        if let Some(intent) = self.position.set_index(target, true) {
            self.apply(intent);
        }
        tracing::debug!(logical, index = self.position.index(), "slider.go_to");
        self.refresh();
        self.resume_autoplay();
    }

    /// A pagination dot was clicked.
    ///
    /// The jump is instant; autoplay resumes after a short debounce so a
    /// queued tick cannot collide with the click.
    ///
    /// Dot `i` always targets buffered index `i + buffer_size`, whatever the
    /// slides-per-view. Hosts migrating from a slider that jumped to buffered
    /// index `i` when looping with one slide per view (landing one slide
    /// early, on the leading clone) will see the dot's own slide instead.
    pub fn on_dot_click(&mut self, dot: usize) {
        if !self.is_interactive() || self.click_in_flight {
            return;
        }
        let count = self.dot_count();
        if dot >= count {
            tracing::debug!(dot, count, "slider.dot_out_of_range");
            return;
        }

        self.click_in_flight = true;
        self.autoplay.suspend(&mut self.timers);
        self.settle_loop_snap_now();

        let target = PaginationSync::target_index(dot, self.buffer.buffer_size());
        if let Some(intent) = self.position.set_index(target, false) {
            self.apply(intent);
        }
        self.refresh();
        self.timers.schedule(TimerKind::DotDebounce, self.now_ms, DOT_CLICK_DEBOUNCE_MS);
        tracing::debug!(dot, index = self.position.index(), "slider.dot_click");
    }

    fn navigate(&mut self, direction: Direction) {
        let from = self.position.index();
        match self.position.navigate(direction) {
            Step::Moved(intent) => {
                self.apply(intent);
                tracing::debug!(from, to = self.position.index(), "slider.navigate");
                self.refresh();
            }
            Step::Faded => {
                tracing::debug!(from, to = self.position.index(), "slider.fade");
                self.refresh();
            }
            Step::LoopSnap(snap) => {
                let intent = self.position.begin_loop_snap(snap);
                self.apply(intent);
                self.timers
                    .schedule(TimerKind::LoopSettle, self.now_ms, u64::from(SLIDE_TRANSITION_MS));
                tracing::debug!(from, target = snap.target_index, ?direction, "slider.loop_snap");
            }
            Step::Unchanged | Step::Blocked => {}
        }
    }

    fn finish_loop_snap(&mut self) {
        if let Some(intent) = self.position.finish_loop_snap() {
            self.apply(intent);
            tracing::debug!(index = self.position.index(), "slider.loop_settled");
        }
        self.drag.finish_commit();
        self.refresh();
    }

    /// Complete an in-flight loop snap immediately.
    fn settle_loop_snap_now(&mut self) {
        if self.position.is_animating_loop() {
            self.timers.cancel_kind(TimerKind::LoopSettle);
            self.finish_loop_snap();
        }
    }

    // ---------------------------------------------------------------------
    // Pointer and hover input
    // ---------------------------------------------------------------------

    /// Pointer pressed on the track at horizontal position `x`.
    pub fn pointer_down(&mut self, x: f64) {
        if !self.can_drag() {
            return;
        }
        let snapshot = self.position.begin_drag();
        if self.drag.pointer_down(x, snapshot) {
            self.autoplay.suspend(&mut self.timers);
            self.drag_dirty = false;
            self.adapter.set_dragging(true);
        }
    }

    /// Pointer moved to `x`.
    pub fn pointer_move(&mut self, x: f64) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        if let Some(raw) = self.drag.pointer_move(x) {
            self.position.drag_to(raw);
            self.drag_dirty = true;
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.release_drag();
    }

    /// Pointer cancelled or left the track.
    pub fn pointer_cancel(&mut self) {
        self.release_drag();
    }

    fn release_drag(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        let slide_width = self.position.geometry().slide_width;
        let Some(release) = self.drag.release(self.position.translate(), slide_width) else {
            return;
        };
        self.drag_dirty = false;
        self.adapter.set_dragging(false);

        if self.autoplay.mode().is_continuous() {
            // Continuous motion owns the translate: keep it, re-derive the index.
            self.position.settle_from_translate();
            self.apply(TransformIntent {
                translate_px: self.position.translate(),
                transition_ms: 0,
            });
        } else {
            let from = self.position.index();
            let step = release.step.map(|direction| self.position.navigate(direction));
            match step {
                Some(Step::Moved(intent)) => self.apply(intent),
                Some(Step::LoopSnap(snap)) => {
                    let intent = self.position.begin_loop_snap(snap);
                    self.apply(intent);
                    self.drag.begin_commit();
                    self.timers
                        .schedule(TimerKind::LoopSettle, self.now_ms, u64::from(SLIDE_TRANSITION_MS));
                }
                _ => {
                    self.position.sync_translate();
                    self.apply(TransformIntent {
                        translate_px: self.position.translate(),
                        transition_ms: SLIDE_TRANSITION_MS,
                    });
                }
            }
            tracing::debug!(
                moved_by = release.moved_by,
                from,
                to = self.position.index(),
                "slider.drag_released"
            );
        }

        self.refresh();
        self.resume_autoplay();
    }

    /// Pointer entered the slider.
    pub fn on_hover_enter(&mut self) {
        if self.lifecycle != Lifecycle::Active || !self.resolved.pause_on_hover {
            return;
        }
        self.is_hovering = true;
        self.autoplay.suspend(&mut self.timers);
    }

    /// Pointer left the slider.
    pub fn on_hover_leave(&mut self) {
        if self.lifecycle != Lifecycle::Active || !self.resolved.pause_on_hover {
            return;
        }
        self.is_hovering = false;
        self.resume_autoplay();
    }

    /// The viewport was resized. Geometry is recomputed once resizing has
    /// been quiet for [`RESIZE_DEBOUNCE_MS`].
    pub fn on_resize(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        self.timers.cancel_kind(TimerKind::ResizeDebounce);
        self.timers
            .schedule(TimerKind::ResizeDebounce, self.now_ms, RESIZE_DEBOUNCE_MS);
    }

    // ---------------------------------------------------------------------
    // Time
    // ---------------------------------------------------------------------

    /// Fire every delayed callback due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.now_ms = self.now_ms.max(now_ms);
        while let Some((id, kind)) = self.timers.pop_due(self.now_ms) {
            self.fire(id, kind);
        }
    }

    fn fire(&mut self, id: TimerId, kind: TimerKind) {
        match kind {
            TimerKind::AutoplayTick => {
                if !self.autoplay.owns_timer(id) {
                    return;
                }
                if self.drag.is_dragging()
                    || self.is_hovering
                    || self.click_in_flight
                    || self.position.is_animating_loop()
                {
                    return;
                }
                self.navigate(Direction::Forward);
            }
            TimerKind::LoopSettle => self.finish_loop_snap(),
            TimerKind::DotDebounce => {
                self.click_in_flight = false;
                self.refresh();
                self.resume_autoplay();
            }
            TimerKind::ResizeDebounce => {
                if self.drag.is_dragging() || self.position.is_animating_loop() {
                    self.timers
                        .schedule(TimerKind::ResizeDebounce, self.now_ms, RESIZE_DEBOUNCE_MS);
                    return;
                }
                self.layout(false);
            }
        }
    }

    /// Whether the host should deliver an animation frame.
    pub fn wants_frame(&self) -> bool {
        self.lifecycle == Lifecycle::Active && (self.autoplay.wants_frame() || self.drag.is_dragging())
    }

    /// Animation frame at `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        if self.drag.is_dragging() && self.drag_dirty {
            self.drag_dirty = false;
            self.adapter.apply_transform(self.position.translate(), 0);
        }
        if self.autoplay.wants_frame() {
            self.continuous_frame(timestamp_ms);
        }
    }

    fn continuous_frame(&mut self, timestamp_ms: f64) {
        if self.drag.is_dragging()
            || self.position.is_animating_loop()
            || self.is_hovering
            || self.click_in_flight
            || !self.position.geometry().is_measured()
        {
            self.autoplay.skip_frame(timestamp_ms);
            return;
        }

        let distance = self.autoplay.frame_distance(timestamp_ms);
        let drift = self.position.drift(distance);
        self.apply(TransformIntent {
            translate_px: self.position.translate(),
            transition_ms: 0,
        });
        match drift {
            Drift::Moved => {}
            Drift::Wrapped => tracing::debug!(translate = self.position.translate(), "slider.continuous_wrapped"),
            Drift::ReachedEnd => {
                self.autoplay.finish(&mut self.timers);
                tracing::debug!(translate = self.position.translate(), "slider.continuous_finished");
            }
        }
        self.refresh();
    }

    fn resume_autoplay(&mut self) {
        if !self.is_interactive() || self.is_hovering || self.autoplay.mode().is_none() {
            return;
        }
        if self.autoplay.mode().is_continuous() && self.position.at_end() {
            self.autoplay.finish(&mut self.timers);
            return;
        }
        self.autoplay.start(&mut self.timers, self.now_ms);
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    /// Measure, pick slides-per-view, and rebuild when anything changed.
    fn layout(&mut self, force: bool) {
        let viewport_width = self.adapter.viewport_width();
        let container_width = self.adapter.container_width();
        let original_len = self.buffer.original_len();
        let key = LayoutKey::new(self.fingerprint, viewport_width, container_width, original_len);
        let resolved = &self.resolved;
        let plan = self
            .layout_cache
            .get_or_compute(key, || compute_plan(resolved, viewport_width, container_width, original_len));

        if !force && self.plan == Some(plan) {
            return;
        }
        let previous = self.plan.replace(plan);
        let spv = plan.geometry.slides_per_view;
        self.check_layout_warnings(spv);

        let buffer_changed = previous.map_or(true, |p| {
            p.buffer_size != plan.buffer_size || p.geometry.slides_per_view != spv
        });
        if buffer_changed || force {
            self.buffer.rebuild(spv, plan.buffer_size > 0);
            self.adapter.layout_slides(&self.buffer.logical_order(), spv);
            self.pagination.invalidate();
        }
        if !plan.geometry.is_measured() {
            tracing::debug!(container_width, "slider.geometry_unmeasured");
        }

        let intent = self.position.relayout(
            plan.geometry,
            self.buffer.original_len(),
            self.buffer.buffer_size(),
            plan.cross_fade,
        );
        self.timers.cancel_kind(TimerKind::LoopSettle);
        self.drag.finish_commit();
        if !plan.cross_fade {
            self.apply(intent);
        }
        self.active_slide = None;
        self.nav_state = None;
        tracing::debug!(
            slides_per_view = spv,
            buffer_size = plan.buffer_size,
            index = self.position.index(),
            translate = self.position.translate(),
            "slider.relayout"
        );
        self.refresh();
    }

    fn check_layout_warnings(&mut self, slides_per_view: usize) {
        if self.resolved.cross_fade && slides_per_view != 1 {
            self.push_warning(ConfigWarning::CrossFadeMultiView { slides_per_view });
        }
        if slides_per_view == 1 && self.resolved.gap_px > 0.0 {
            self.push_warning(ConfigWarning::GapWithSingleSlide {
                gap_px: self.resolved.gap_px,
            });
        }
    }

    fn push_warning(&mut self, warning: ConfigWarning) {
        if !self.warnings.contains(&warning) {
            tracing::warn!(%warning, "slider.config_warning");
            self.warnings.push(warning);
        }
    }

    // ---------------------------------------------------------------------
    // Presentation sync
    // ---------------------------------------------------------------------

    fn apply(&mut self, intent: TransformIntent) {
        if self.position.is_cross_fade() {
            return;
        }
        self.adapter.apply_transform(intent.translate_px, intent.transition_ms);
    }

    /// Reflect the current position in slide flags, dots and buttons.
    fn refresh(&mut self) {
        let original_len = self.buffer.original_len();
        if original_len == 0 {
            if self.resolved.navigation && self.nav_state != Some((false, false)) {
                self.nav_state = Some((false, false));
                self.adapter.set_nav_buttons_enabled(false, false);
            }
            return;
        }

        if self.position.is_cross_fade() {
            let current = self.position.logical_index();
            match self.active_slide {
                Some(prev) if prev == current => {}
                Some(prev) => {
                    self.adapter.set_slide_active(prev, false);
                    self.adapter.set_slide_active(current, true);
                }
                None => {
                    for i in 0..original_len {
                        self.adapter.set_slide_active(i, i == current);
                    }
                }
            }
            self.active_slide = Some(current);
        }

        if self.resolved.pagination {
            match self.pagination.sync(self.pagination_state()) {
                PaginationUpdate::Rebuild { count, active } => self.adapter.render_dots(count, active),
                PaginationUpdate::Reindex { active } => self.adapter.set_active_dot(active),
                PaginationUpdate::Unchanged => {}
            }
        }

        if self.resolved.navigation {
            let state = self.position.can_navigate();
            if self.nav_state != Some(state) {
                self.nav_state = Some(state);
                self.adapter.set_nav_buttons_enabled(state.0, state.1);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    fn is_interactive(&self) -> bool {
        self.lifecycle == Lifecycle::Active && !self.buffer.is_empty()
    }

    fn can_drag(&self) -> bool {
        self.is_interactive()
            && self.resolved.draggable
            && !self.position.is_cross_fade()
            && self.position.geometry().is_measured()
            && !self.position.is_animating_loop()
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current buffered index.
    #[inline]
    pub fn index(&self) -> usize {
        self.position.index()
    }

    /// Canonical slide at the current position.
    #[inline]
    pub fn logical_index(&self) -> usize {
        self.position.logical_index()
    }

    /// Live translate in pixels.
    #[inline]
    pub fn translate(&self) -> f64 {
        self.position.translate()
    }

    pub fn slides_per_view(&self) -> usize {
        self.position.geometry().slides_per_view
    }

    pub fn pagination_state(&self) -> PaginationState {
        PaginationState::derive(
            self.position.index(),
            self.buffer.original_len(),
            self.slides_per_view(),
            self.buffer.buffer_size(),
        )
    }

    pub fn dot_count(&self) -> usize {
        dot_count(self.buffer.original_len(), self.slides_per_view(), self.buffer.is_looping())
    }

    pub fn active_dot_index(&self) -> usize {
        self.pagination_state().active_dot_index
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[inline]
    pub fn is_animating_loop(&self) -> bool {
        self.position.is_animating_loop()
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    #[inline]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// Snapshot of the mutable state.
    pub fn state(&self) -> SliderState {
        SliderState {
            buffered_index: self.position.index(),
            translate_px: self.position.translate(),
            prev_translate_px: self.position.prev_translate(),
            slides_per_view: self.slides_per_view(),
            is_dragging: self.drag.is_dragging(),
            is_animating_loop: self.position.is_animating_loop(),
            is_hovering: self.is_hovering,
            autoplay_mode: self.autoplay.mode(),
            last_frame_timestamp: self.autoplay.last_frame(),
        }
    }

    /// The buffered slide list.
    #[inline]
    pub fn buffer(&self) -> &SlideBuffer<T> {
        &self.buffer
    }

    /// Options as last supplied.
    #[inline]
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Configuration downgrades applied so far.
    #[inline]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Number of pending delayed callbacks.
    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// When `poll` next has work to do.
    #[inline]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// `(hits, misses)` of the layout memo.
    pub fn layout_cache_stats(&self) -> (u64, u64) {
        self.layout_cache.stats()
    }

    /// Plans currently memoised.
    #[inline]
    pub fn layout_cache_len(&self) -> usize {
        self.layout_cache.len()
    }

    #[inline]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter, e.g. to update measurements.
    #[inline]
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }
}

fn compute_plan(resolved: &ResolvedOptions, viewport_width: f64, container_width: f64, original_len: usize) -> LayoutPlan {
    let slides_per_view = resolved.policy.slides_per_view(viewport_width);
    let geometry = Geometry::from_container(container_width, resolved.gap_px, slides_per_view);
    let looping = resolved.infinite_scrolling && original_len > slides_per_view;
    let buffer_size = if looping { slides_per_view } else { 0 };
    LayoutPlan {
        geometry,
        buffer_size,
        cross_fade: resolved.cross_fade_active(slides_per_view),
        dot_count: dot_count(original_len, slides_per_view, looping),
    }
}
