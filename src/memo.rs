//! Memoised layout plans keyed by a stable hash of layout-affecting input.

use std::collections::{HashMap, VecDeque};

use blake3::Hash;

use crate::options::SliderOptions;
use crate::position::Geometry;
use crate::viewport::BreakpointName;

/// Hash of the options that influence layout.
///
/// Autoplay, navigation and hover settings are excluded: changing them
/// never requires a rebuild.
pub fn layout_fingerprint(options: &SliderOptions) -> Hash {
    let mut hasher = blake3::Hasher::new();
    let spv = &options.slides_per_view;
    hasher.update(&spv.default.to_le_bytes());
    for name in BreakpointName::ALL {
        match spv.get(name) {
            Some(value) => {
                hasher.update(&[1]);
                hasher.update(&value.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
    }
    hasher.update(&options.gap_px.to_bits().to_le_bytes());
    hasher.update(&[options.cross_fade as u8, options.infinite_scrolling as u8]);
    hasher.finalize()
}

/// Key for one memoised layout: options fingerprint plus measured input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey(Hash);

impl LayoutKey {
    pub fn new(fingerprint: Hash, viewport_width: f64, container_width: f64, slide_count: usize) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(fingerprint.as_bytes());
        hasher.update(&viewport_width.to_bits().to_le_bytes());
        hasher.update(&container_width.to_bits().to_le_bytes());
        hasher.update(&(slide_count as u64).to_le_bytes());
        Self(hasher.finalize())
    }
}

/// Everything the engine derives from the layout input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPlan {
    pub geometry: Geometry,
    /// Clones per side; 0 when looping is off
    pub buffer_size: usize,
    pub cross_fade: bool,
    pub dot_count: usize,
}

/// Plans kept before the oldest is evicted.
pub const LAYOUT_CACHE_CAPACITY: usize = 16;

/// Explicit memoisation map for layout plans.
///
/// Holds at most `capacity` plans and evicts the oldest first. The engine
/// also invalidates it whenever the layout fingerprint changes and on
/// teardown.
#[derive(Clone, Debug)]
pub struct LayoutCache {
    entries: HashMap<LayoutKey, LayoutPlan>,
    /// Insertion order, oldest first
    order: VecDeque<LayoutKey>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_capacity(LAYOUT_CACHE_CAPACITY)
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `capacity` plans (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached plan for `key`, computing it on a miss.
    pub fn get_or_compute(&mut self, key: LayoutKey, compute: impl FnOnce() -> LayoutPlan) -> LayoutPlan {
        if let Some(plan) = self.entries.get(&key) {
            self.hits += 1;
            return *plan;
        }
        self.misses += 1;
        let plan = compute();
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.entries.insert(key, plan);
        self.order.push_back(key);
        plan
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
