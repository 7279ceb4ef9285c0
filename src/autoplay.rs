//! Autoplay scheduling: fixed-delay steps or continuous velocity motion.

use crate::timer::{TimerId, TimerKind, TimerQueue};

/// Default delay between interval steps.
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Default continuous scrolling speed.
pub const DEFAULT_CONTINUOUS_SPEED: f64 = 100.0;

/// How autoplay advances the slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AutoplayMode {
    /// No automatic motion
    #[default]
    None,
    /// One `navigate(+1)` every `delay_ms`
    Interval { delay_ms: u64 },
    /// Translate decreases by `speed_px_per_sec` every second, frame by frame
    Continuous { speed_px_per_sec: f64 },
}

impl AutoplayMode {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, AutoplayMode::None)
    }

    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, AutoplayMode::Continuous { .. })
    }
}

/// Current state of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    /// Not armed; will not run until started
    Stopped,
    /// Timer or frame callback is armed
    Running,
    /// Disarmed by hover, drag or navigation; resumes with the same mode
    Suspended,
    /// Continuous motion reached the last slide (non-looping only)
    Finished,
}

/// Drives automatic advancement.
///
/// Like a frame playback controller, the scheduler owns no clock. Interval
/// mode registers a repeating [`TimerQueue`] entry; continuous mode asks the
/// host for animation frames and converts frame timestamps into distances.
///
/// ## Example
///
/// ```rust
/// use slider_core::{AutoplayMode, AutoplayScheduler, AutoplayState, TimerQueue};
///
/// let mut timers = TimerQueue::new();
/// let mut autoplay = AutoplayScheduler::new(AutoplayMode::Continuous { speed_px_per_sec: 200.0 });
/// autoplay.start(&mut timers, 0);
/// assert!(autoplay.wants_frame());
///
/// assert_eq!(autoplay.frame_distance(1000.0), 0.0); // first frame sets the baseline
/// assert_eq!(autoplay.frame_distance(1500.0), 100.0);
///
/// autoplay.suspend(&mut timers);
/// assert_eq!(autoplay.state(), AutoplayState::Suspended);
/// assert!(!autoplay.wants_frame());
/// ```
#[derive(Clone, Debug)]
pub struct AutoplayScheduler {
    mode: AutoplayMode,
    state: AutoplayState,
    /// Repeating timer handle (interval mode)
    timer: Option<TimerId>,
    /// Frame callback requested (continuous mode)
    frame_requested: bool,
    /// Timestamp of the previous continuous frame
    last_frame: Option<f64>,
}

impl AutoplayScheduler {
    pub fn new(mode: AutoplayMode) -> Self {
        Self {
            mode,
            state: AutoplayState::Stopped,
            timer: None,
            frame_requested: false,
            last_frame: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> AutoplayMode {
        self.mode
    }

    #[inline]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    /// Whether the host should deliver an animation frame.
    #[inline]
    pub fn wants_frame(&self) -> bool {
        self.frame_requested
    }

    /// Timestamp of the previous continuous frame.
    #[inline]
    pub fn last_frame(&self) -> Option<f64> {
        self.last_frame
    }

    /// Whether `id` is this scheduler's interval timer.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// Replace the mode, disarming whatever was running.
    pub fn set_mode(&mut self, mode: AutoplayMode, timers: &mut TimerQueue) {
        self.disarm(timers);
        self.mode = mode;
        self.state = AutoplayState::Stopped;
    }

    /// Arm the scheduler with its configured mode.
    ///
    /// Any previous arming is cancelled first, so calling this twice never
    /// leaves two timers behind. Returns `true` when something was armed.
    pub fn start(&mut self, timers: &mut TimerQueue, now_ms: u64) -> bool {
        self.disarm(timers);
        match self.mode {
            AutoplayMode::None => {
                self.state = AutoplayState::Stopped;
                return false;
            }
            AutoplayMode::Interval { delay_ms } => {
                if delay_ms == 0 {
                    self.state = AutoplayState::Stopped;
                    return false;
                }
                self.timer = Some(timers.schedule_repeating(TimerKind::AutoplayTick, now_ms, delay_ms));
            }
            AutoplayMode::Continuous { speed_px_per_sec } => {
                if speed_px_per_sec <= 0.0 {
                    self.state = AutoplayState::Stopped;
                    return false;
                }
                self.frame_requested = true;
            }
        }
        self.state = AutoplayState::Running;
        true
    }

    /// Disarm but keep the mode so [`start`](Self::start) resumes unchanged.
    pub fn suspend(&mut self, timers: &mut TimerQueue) {
        let was_running = self.state == AutoplayState::Running;
        self.disarm(timers);
        if was_running {
            self.state = AutoplayState::Suspended;
        }
    }

    /// Disarm permanently (until started again).
    pub fn stop(&mut self, timers: &mut TimerQueue) {
        self.disarm(timers);
        self.state = AutoplayState::Stopped;
    }

    /// Continuous motion hit the end of a non-looping track.
    pub fn finish(&mut self, timers: &mut TimerQueue) {
        self.disarm(timers);
        self.state = AutoplayState::Finished;
    }

    /// Distance to move for a continuous frame at `timestamp_ms`.
    ///
    /// The first frame after arming only records a baseline.
    pub fn frame_distance(&mut self, timestamp_ms: f64) -> f64 {
        let AutoplayMode::Continuous { speed_px_per_sec } = self.mode else {
            return 0.0;
        };
        let previous = self.last_frame.unwrap_or(timestamp_ms);
        self.last_frame = Some(timestamp_ms);
        let delta_secs = ((timestamp_ms - previous) / 1000.0).max(0.0);
        speed_px_per_sec * delta_secs
    }

    /// Consume a frame without moving, keeping the baseline fresh.
    pub fn skip_frame(&mut self, timestamp_ms: f64) {
        self.last_frame = Some(timestamp_ms);
    }

    fn disarm(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
        self.frame_requested = false;
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_arms_repeating_timer() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayMode::Interval { delay_ms: 2000 });
        assert!(autoplay.start(&mut timers, 0));
        assert_eq!(autoplay.state(), AutoplayState::Running);
        assert!(!autoplay.wants_frame());

        let (id, kind) = timers.pop_due(2000).unwrap();
        assert_eq!(kind, TimerKind::AutoplayTick);
        assert!(autoplay.owns_timer(id));
    }

    #[test]
    fn test_restart_never_doubles_timers() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayMode::Interval { delay_ms: 500 });
        autoplay.start(&mut timers, 0);
        autoplay.start(&mut timers, 100);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(600));
    }

    #[test]
    fn test_suspend_and_resume_keep_mode() {
        let mut timers = TimerQueue::new();
        let mode = AutoplayMode::Interval { delay_ms: 1000 };
        let mut autoplay = AutoplayScheduler::new(mode);
        autoplay.start(&mut timers, 0);
        autoplay.suspend(&mut timers);

        assert_eq!(autoplay.state(), AutoplayState::Suspended);
        assert!(timers.is_empty());
        assert_eq!(autoplay.mode(), mode);

        assert!(autoplay.start(&mut timers, 5000));
        assert_eq!(timers.next_deadline(), Some(6000));
    }

    #[test]
    fn test_suspend_when_stopped_stays_stopped() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayMode::Interval { delay_ms: 1000 });
        autoplay.suspend(&mut timers);
        assert_eq!(autoplay.state(), AutoplayState::Stopped);
    }

    #[test]
    fn test_none_and_degenerate_modes_do_not_arm() {
        let mut timers = TimerQueue::new();
        for mode in [
            AutoplayMode::None,
            AutoplayMode::Interval { delay_ms: 0 },
            AutoplayMode::Continuous { speed_px_per_sec: 0.0 },
        ] {
            let mut autoplay = AutoplayScheduler::new(mode);
            assert!(!autoplay.start(&mut timers, 0));
            assert!(!autoplay.wants_frame());
        }
        assert!(timers.is_empty());
    }

    #[test]
    fn test_frame_distance_and_skip() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayMode::Continuous { speed_px_per_sec: 100.0 });
        autoplay.start(&mut timers, 0);

        assert_eq!(autoplay.frame_distance(0.0), 0.0);
        assert!((autoplay.frame_distance(16.0) - 1.6).abs() < 1e-9);

        // Paused for two seconds: no catch-up jump afterwards
        autoplay.skip_frame(2016.0);
        assert!((autoplay.frame_distance(2032.0) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_finish() {
        let mut timers = TimerQueue::new();
        let mut autoplay = AutoplayScheduler::new(AutoplayMode::Continuous { speed_px_per_sec: 100.0 });
        autoplay.start(&mut timers, 0);
        autoplay.finish(&mut timers);
        assert_eq!(autoplay.state(), AutoplayState::Finished);
        assert!(!autoplay.wants_frame());
    }
}
