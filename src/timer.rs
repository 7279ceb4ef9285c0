//! Delayed and repeating callbacks driven by a host clock.
//!
//! The queue never reads time itself. The host passes `now_ms` into
//! [`TimerQueue::pop_due`] and fires whatever comes back.

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Interval autoplay step
    AutoplayTick,
    /// Loop snap animation has finished; renormalise
    LoopSettle,
    /// Pagination click debounce has elapsed
    DotDebounce,
    /// Resize burst has gone quiet; recompute geometry
    ResizeDebounce,
}

#[derive(Clone, Debug)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    deadline: u64,
    period: Option<u64>,
}

/// Pending timers for one engine instance.
///
/// ## Example
///
/// ```rust
/// use slider_core::{TimerKind, TimerQueue};
///
/// let mut timers = TimerQueue::new();
/// timers.schedule(TimerKind::LoopSettle, 0, 300);
/// assert_eq!(timers.pop_due(299), None);
/// assert!(matches!(timers.pop_due(300), Some((_, TimerKind::LoopSettle))));
/// assert!(timers.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire once, `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, kind: TimerKind, now_ms: u64, delay_ms: u64) -> TimerId {
        self.push(kind, now_ms.saturating_add(delay_ms), None)
    }

    /// Fire every `period_ms`, first at `now_ms + period_ms`.
    pub fn schedule_repeating(&mut self, kind: TimerKind, now_ms: u64, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(kind, now_ms.saturating_add(period_ms), Some(period_ms))
    }

    fn push(&mut self, kind: TimerKind, deadline: u64, period: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { id, kind, deadline, period });
        id
    }

    /// Cancel a timer. Returns `true` when it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every timer of a kind.
    pub fn cancel_kind(&mut self, kind: TimerKind) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.kind != kind);
        before - self.timers.len()
    }

    /// Whether a timer is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Whether any timer of a kind is pending.
    pub fn has_kind(&self, kind: TimerKind) -> bool {
        self.timers.iter().any(|t| t.kind == kind)
    }

    /// Remove and return the earliest timer due at `now_ms`.
    ///
    /// Repeating timers stay queued and are re-armed one period after
    /// `now_ms`, so a late poll fires a missed interval once rather than
    /// once per missed period. Ties fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerId, TimerKind)> {
        let pos = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now_ms)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(pos, _)| pos)?;

        let timer = &mut self.timers[pos];
        let fired = (timer.id, timer.kind);
        match timer.period {
            Some(period) => timer.deadline = now_ms.saturating_add(period),
            None => {
                self.timers.remove(pos);
            }
        }
        Some(fired)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
