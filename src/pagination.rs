//! Pagination dots derived from the buffered position.

/// Debounce after a dot click before autoplay may act again.
pub const DOT_CLICK_DEBOUNCE_MS: u64 = 50;

/// Derived pagination state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub total_dots: usize,
    pub active_dot_index: usize,
}

impl PaginationState {
    /// Compute the dot state for a position.
    pub fn derive(buffered_index: usize, original_len: usize, slides_per_view: usize, buffer_size: usize) -> Self {
        Self {
            total_dots: dot_count(original_len, slides_per_view, buffer_size > 0),
            active_dot_index: active_dot_index(buffered_index, original_len, slides_per_view, buffer_size),
        }
    }
}

/// One dot per canonical slide when looping, one per reachable page otherwise.
/// No slides, no dots.
pub fn dot_count(original_len: usize, slides_per_view: usize, looping: bool) -> usize {
    if looping || original_len == 0 {
        original_len
    } else {
        original_len.saturating_sub(slides_per_view) + 1
    }
}

/// Dot that represents `buffered_index`.
pub fn active_dot_index(buffered_index: usize, original_len: usize, slides_per_view: usize, buffer_size: usize) -> usize {
    if original_len == 0 {
        return 0;
    }
    if buffer_size > 0 {
        (buffered_index + original_len - buffer_size % original_len) % original_len
    } else {
        buffered_index.min(original_len.saturating_sub(slides_per_view))
    }
}

/// What the render adapter needs to do to reflect the pagination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationUpdate {
    /// Dot set changed size: rebuild every dot
    Rebuild { count: usize, active: usize },
    /// Same dots, different active one
    Reindex { active: usize },
    Unchanged,
}

/// Tracks what has been rendered and emits the minimal update.
///
/// ## Example
///
/// ```rust
/// use slider_core::{PaginationState, PaginationSync, PaginationUpdate};
///
/// let mut sync = PaginationSync::new();
/// let state = PaginationState::derive(1, 9, 1, 1);
/// assert_eq!(sync.sync(state), PaginationUpdate::Rebuild { count: 9, active: 0 });
/// assert_eq!(sync.sync(state), PaginationUpdate::Unchanged);
///
/// let state = PaginationState::derive(2, 9, 1, 1);
/// assert_eq!(sync.sync(state), PaginationUpdate::Reindex { active: 1 });
/// ```
#[derive(Clone, Debug, Default)]
pub struct PaginationSync {
    rendered: Option<PaginationState>,
}

impl PaginationSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state handed to the adapter.
    #[inline]
    pub fn rendered(&self) -> Option<PaginationState> {
        self.rendered
    }

    /// Forget what was rendered so the next sync rebuilds.
    pub fn invalidate(&mut self) {
        self.rendered = None;
    }

    /// Diff `state` against what was rendered.
    pub fn sync(&mut self, state: PaginationState) -> PaginationUpdate {
        let update = match self.rendered {
            Some(prev) if prev.total_dots == state.total_dots => {
                if prev.active_dot_index == state.active_dot_index {
                    PaginationUpdate::Unchanged
                } else {
                    PaginationUpdate::Reindex {
                        active: state.active_dot_index,
                    }
                }
            }
            _ => PaginationUpdate::Rebuild {
                count: state.total_dots,
                active: state.active_dot_index,
            },
        };
        self.rendered = Some(state);
        update
    }

    /// Buffered index a click on `dot` should jump to.
    pub fn target_index(dot: usize, buffer_size: usize) -> usize {
        dot + buffer_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_count() {
        assert_eq!(dot_count(9, 1, true), 9);
        assert_eq!(dot_count(9, 3, true), 9);
        assert_eq!(dot_count(9, 3, false), 7);
        assert_eq!(dot_count(2, 3, false), 1);
        assert_eq!(dot_count(0, 1, false), 0);
        assert_eq!(dot_count(0, 3, true), 0);
    }

    #[test]
    fn test_active_dot_looping() {
        // 9 slides, one per view, one clone on each side
        assert_eq!(active_dot_index(1, 9, 1, 1), 0);
        assert_eq!(active_dot_index(9, 9, 1, 1), 8);
        assert_eq!(active_dot_index(0, 9, 1, 1), 8);
        assert_eq!(active_dot_index(10, 9, 1, 1), 0);
    }

    #[test]
    fn test_active_dot_clamped() {
        assert_eq!(active_dot_index(3, 5, 2, 0), 3);
        assert_eq!(active_dot_index(4, 5, 2, 0), 3);
    }

    #[test]
    fn test_rebuild_on_count_change() {
        let mut sync = PaginationSync::new();
        sync.sync(PaginationState::derive(0, 6, 1, 0));
        let update = sync.sync(PaginationState::derive(0, 6, 2, 0));
        assert_eq!(update, PaginationUpdate::Rebuild { count: 5, active: 0 });

        sync.invalidate();
        let update = sync.sync(PaginationState::derive(0, 6, 2, 0));
        assert!(matches!(update, PaginationUpdate::Rebuild { .. }));
    }

    #[test]
    fn test_target_index() {
        assert_eq!(PaginationSync::target_index(3, 2), 5);
        assert_eq!(PaginationSync::target_index(3, 0), 3);
    }
}
