//! Canonical slide list plus the cloned head/tail runs used for looping.

/// A slide: opaque content plus its position in the canonical list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<T> {
    content: T,
    logical_index: usize,
}

impl<T> Slide<T> {
    /// Create a slide at `logical_index` in the canonical list.
    pub fn new(content: T, logical_index: usize) -> Self {
        Self { content, logical_index }
    }

    #[inline]
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Index in the canonical (unbuffered) list, 0-based.
    #[inline]
    pub fn logical_index(&self) -> usize {
        self.logical_index
    }
}

/// The ordered slide list used for positioning.
///
/// When looping is active the canonical slides are wrapped as
/// `head + canonical + tail`, where `head` is a copy of the last
/// `buffer_size` slides and `tail` a copy of the first `buffer_size`.
/// Position arithmetic can then move one step past either end and still
/// show real content.
///
/// ## Example
///
/// ```rust
/// use slider_core::SlideBuffer;
///
/// let buffer = SlideBuffer::build(vec!["a", "b", "c", "d"], 1, true);
/// assert!(buffer.is_looping());
/// assert_eq!(buffer.len(), 6);
/// assert_eq!(buffer.logical_order(), vec![3, 0, 1, 2, 3, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct SlideBuffer<T> {
    /// Buffered list (clones included)
    slides: Vec<Slide<T>>,
    /// Number of canonical slides
    original_len: usize,
    /// Clones on each side; 0 when not looping
    buffer_size: usize,
}

impl<T: Clone> SlideBuffer<T> {
    /// Build a buffered list from canonical content.
    ///
    /// Looping is only set up when `infinite` is requested and there are
    /// more slides than fit in one view.
    pub fn build(contents: Vec<T>, slides_per_view: usize, infinite: bool) -> Self {
        let canonical = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| Slide::new(content, i))
            .collect();
        Self::wrap(canonical, slides_per_view, infinite)
    }

    /// Rebuild for a new slides-per-view value.
    ///
    /// The canonical slice is re-extracted from the current buffered list
    /// before new clones are taken.
    pub fn rebuild(&mut self, slides_per_view: usize, infinite: bool) {
        let canonical = self.canonical().to_vec();
        *self = Self::wrap(canonical, slides_per_view, infinite);
    }

    fn wrap(canonical: Vec<Slide<T>>, slides_per_view: usize, infinite: bool) -> Self {
        let original_len = canonical.len();
        let slides_per_view = slides_per_view.max(1);

        if !infinite || original_len <= slides_per_view {
            return Self {
                slides: canonical,
                original_len,
                buffer_size: 0,
            };
        }

        let buffer_size = slides_per_view;
        let mut slides = Vec::with_capacity(original_len + buffer_size * 2);
        slides.extend_from_slice(&canonical[original_len - buffer_size..]);
        slides.extend_from_slice(&canonical);
        slides.extend_from_slice(&canonical[..buffer_size]);

        Self {
            slides,
            original_len,
            buffer_size,
        }
    }
}

impl<T> SlideBuffer<T> {
    /// The canonical slides, without clones.
    pub fn canonical(&self) -> &[Slide<T>] {
        &self.slides[self.buffer_size..self.buffer_size + self.original_len]
    }

    /// The full buffered list.
    #[inline]
    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    /// Total number of buffered slides.
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of canonical slides.
    #[inline]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Clones on each side of the canonical run.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Whether clones are present and looping is in effect.
    #[inline]
    pub fn is_looping(&self) -> bool {
        self.buffer_size > 0
    }

    /// Get the slide at a buffered index.
    pub fn get(&self, buffered_index: usize) -> Option<&Slide<T>> {
        self.slides.get(buffered_index)
    }

    /// Logical index shown at `buffered_index`.
    pub fn logical_index(&self, buffered_index: usize) -> usize {
        if self.original_len == 0 {
            return 0;
        }
        (buffered_index + self.original_len - self.buffer_size % self.original_len) % self.original_len
    }

    /// Logical indices of every buffered slide, in order.
    ///
    /// This is what a render adapter needs to lay out clones.
    pub fn logical_order(&self) -> Vec<usize> {
        self.slides.iter().map(|s| s.logical_index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_loop_when_disabled() {
        let buffer = SlideBuffer::build(vec![1, 2, 3], 1, false);
        assert!(!buffer.is_looping());
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.buffer_size(), 0);
        assert_eq!(buffer.logical_order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_loop_when_everything_fits() {
        let buffer = SlideBuffer::build(vec![1, 2, 3], 3, true);
        assert!(!buffer.is_looping());
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_clone_runs() {
        let buffer = SlideBuffer::build(vec!['a', 'b', 'c', 'd', 'e'], 2, true);
        assert_eq!(buffer.len(), 9);
        assert_eq!(buffer.buffer_size(), 2);
        assert_eq!(buffer.logical_order(), vec![3, 4, 0, 1, 2, 3, 4, 0, 1]);
        assert_eq!(buffer.get(0).map(|s| *s.content()), Some('d'));
        assert_eq!(buffer.canonical().len(), 5);
        assert_eq!(buffer.canonical()[0].content(), &'a');
    }

    #[test]
    fn test_logical_index() {
        let buffer = SlideBuffer::build((0..9).collect(), 1, true);
        assert_eq!(buffer.len(), 11);
        assert_eq!(buffer.logical_index(0), 8);
        assert_eq!(buffer.logical_index(1), 0);
        assert_eq!(buffer.logical_index(9), 8);
        assert_eq!(buffer.logical_index(10), 0);
    }

    #[test]
    fn test_rebuild_keeps_canonical_order() {
        let mut buffer = SlideBuffer::build((0..6).collect(), 1, true);
        buffer.rebuild(3, true);
        assert_eq!(buffer.buffer_size(), 3);
        assert_eq!(buffer.len(), 12);
        let canonical: Vec<_> = buffer.canonical().iter().map(|s| *s.content()).collect();
        assert_eq!(canonical, vec![0, 1, 2, 3, 4, 5]);

        buffer.rebuild(6, true);
        assert!(!buffer.is_looping());
        assert_eq!(buffer.len(), 6);
    }

    #[test]
    fn test_empty() {
        let buffer: SlideBuffer<u8> = SlideBuffer::build(Vec::new(), 1, true);
        assert!(buffer.is_empty());
        assert_eq!(buffer.logical_index(4), 0);
    }
}
