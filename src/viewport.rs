//! Slides-per-view selection from the viewport width.

use std::fmt;

use crate::error::ConfigWarning;

/// Named viewport breakpoints, in ascending width order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakpointName {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
    Large,
}

impl BreakpointName {
    /// All breakpoints, smallest first.
    pub const ALL: [BreakpointName; 5] = [
        BreakpointName::Mobile,
        BreakpointName::Tablet,
        BreakpointName::Laptop,
        BreakpointName::Desktop,
        BreakpointName::Large,
    ];

    /// Upper bound (inclusive) of the viewport width covered by this breakpoint.
    pub fn max_width(self) -> u32 {
        match self {
            BreakpointName::Mobile => 768,
            BreakpointName::Tablet => 1024,
            BreakpointName::Laptop => 1366,
            BreakpointName::Desktop => 1920,
            BreakpointName::Large => 2560,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BreakpointName::Mobile => "mobile",
            BreakpointName::Tablet => "tablet",
            BreakpointName::Laptop => "laptop",
            BreakpointName::Desktop => "desktop",
            BreakpointName::Large => "large",
        }
    }
}

impl fmt::Display for BreakpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slides-per-view as supplied by the option resolver.
///
/// Either every breakpoint field is set, or none is. A partially filled
/// table is discarded in favour of `default`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlidesPerViewConfig {
    /// Scalar used when no complete table is available
    pub default: u32,
    pub mobile: Option<u32>,
    pub tablet: Option<u32>,
    pub laptop: Option<u32>,
    pub desktop: Option<u32>,
    pub large: Option<u32>,
}

impl Default for SlidesPerViewConfig {
    fn default() -> Self {
        Self::fixed(1)
    }
}

impl SlidesPerViewConfig {
    /// A single slides-per-view value with no breakpoint table.
    pub fn fixed(slides_per_view: u32) -> Self {
        Self {
            default: slides_per_view,
            mobile: None,
            tablet: None,
            laptop: None,
            desktop: None,
            large: None,
        }
    }

    /// A complete breakpoint table, ordered mobile → large.
    pub fn responsive(default: u32, per_breakpoint: [u32; 5]) -> Self {
        let [mobile, tablet, laptop, desktop, large] = per_breakpoint;
        Self {
            default,
            mobile: Some(mobile),
            tablet: Some(tablet),
            laptop: Some(laptop),
            desktop: Some(desktop),
            large: Some(large),
        }
    }

    /// Value configured for a named breakpoint, if any.
    pub fn get(&self, name: BreakpointName) -> Option<u32> {
        match name {
            BreakpointName::Mobile => self.mobile,
            BreakpointName::Tablet => self.tablet,
            BreakpointName::Laptop => self.laptop,
            BreakpointName::Desktop => self.desktop,
            BreakpointName::Large => self.large,
        }
    }

    fn has_any_breakpoint(&self) -> bool {
        BreakpointName::ALL.iter().any(|name| self.get(*name).is_some())
    }
}

/// One validated row of a breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: BreakpointName,
    pub max_width: u32,
    pub slides_per_view: usize,
}

/// Fully specified breakpoint table, ascending by `max_width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validate a configuration into a table.
    ///
    /// Returns `Ok(None)` when no breakpoint is configured at all, and an
    /// error describing the first missing or invalid entry otherwise.
    pub fn from_config(config: &SlidesPerViewConfig, fallback: usize) -> Result<Option<Self>, ConfigWarning> {
        if !config.has_any_breakpoint() {
            return Ok(None);
        }

        let mut entries = Vec::with_capacity(BreakpointName::ALL.len());
        for name in BreakpointName::ALL {
            match config.get(name) {
                None => {
                    return Err(ConfigWarning::PartialBreakpointTable { missing: name, fallback });
                }
                Some(0) => {
                    return Err(ConfigWarning::InvalidBreakpointValue { name, value: 0, fallback });
                }
                Some(value) => entries.push(Breakpoint {
                    name,
                    max_width: name.max_width(),
                    slides_per_view: value as usize,
                }),
            }
        }
        Ok(Some(Self { entries }))
    }

    /// Entries in ascending width order.
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// Select the first entry whose `max_width` covers `viewport_width`,
    /// or the widest entry when the viewport exceeds them all.
    pub fn select(&self, viewport_width: f64) -> Option<&Breakpoint> {
        self.entries
            .iter()
            .find(|bp| viewport_width <= bp.max_width as f64)
            .or_else(|| self.entries.last())
    }
}

/// Maps a viewport width to the number of slides shown at once.
///
/// ## Example
///
/// ```rust
/// use slider_core::{SlidesPerViewConfig, ViewportPolicy};
///
/// let config = SlidesPerViewConfig::responsive(1, [1, 2, 3, 4, 5]);
/// let (policy, warning) = ViewportPolicy::from_config(&config);
/// assert!(warning.is_none());
/// assert_eq!(policy.slides_per_view(800.0), 2);
/// assert_eq!(policy.slides_per_view(4000.0), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewportPolicy {
    table: Option<BreakpointTable>,
    fallback: usize,
}

impl ViewportPolicy {
    /// A policy that always returns `slides_per_view` (at least 1).
    pub fn fixed(slides_per_view: usize) -> Self {
        Self {
            table: None,
            fallback: slides_per_view.max(1),
        }
    }

    /// Build a policy from the configuration, discarding a partial or invalid
    /// table and reporting why.
    pub fn from_config(config: &SlidesPerViewConfig) -> (Self, Option<ConfigWarning>) {
        let fallback = (config.default as usize).max(1);
        match BreakpointTable::from_config(config, fallback) {
            Ok(table) => (Self { table, fallback }, None),
            Err(warning) => {
                tracing::warn!(%warning, fallback, "slider.breakpoints_discarded");
                (Self { table: None, fallback }, Some(warning))
            }
        }
    }

    /// Whether a breakpoint table is in use.
    #[inline]
    pub fn is_responsive(&self) -> bool {
        self.table.is_some()
    }

    /// The breakpoint matching `viewport_width`, when a table is in use.
    pub fn breakpoint(&self, viewport_width: f64) -> Option<BreakpointName> {
        self.table
            .as_ref()
            .and_then(|table| table.select(viewport_width))
            .map(|bp| bp.name)
    }

    /// Slides per view for the given viewport width; always `>= 1`.
    pub fn slides_per_view(&self, viewport_width: f64) -> usize {
        self.table
            .as_ref()
            .and_then(|table| table.select(viewport_width))
            .map(|bp| bp.slides_per_view)
            .unwrap_or(self.fallback)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_policy() {
        let (policy, warning) = ViewportPolicy::from_config(&SlidesPerViewConfig::fixed(3));
        assert!(warning.is_none());
        assert!(!policy.is_responsive());
        assert_eq!(policy.slides_per_view(320.0), 3);
        assert_eq!(policy.slides_per_view(3000.0), 3);
    }

    #[test]
    fn test_zero_default_is_clamped() {
        let (policy, _) = ViewportPolicy::from_config(&SlidesPerViewConfig::fixed(0));
        assert_eq!(policy.slides_per_view(1000.0), 1);
    }

    #[test]
    fn test_breakpoint_selection() {
        let config = SlidesPerViewConfig::responsive(1, [1, 2, 3, 4, 5]);
        let (policy, _) = ViewportPolicy::from_config(&config);

        assert_eq!(policy.slides_per_view(375.0), 1);
        assert_eq!(policy.slides_per_view(768.0), 1); // inclusive upper bound
        assert_eq!(policy.slides_per_view(769.0), 2);
        assert_eq!(policy.slides_per_view(1366.0), 3);
        assert_eq!(policy.slides_per_view(1440.0), 4);
        assert_eq!(policy.slides_per_view(2560.0), 5);
        assert_eq!(policy.breakpoint(1000.0), Some(BreakpointName::Tablet));
    }

    #[test]
    fn test_wider_than_every_breakpoint_uses_largest() {
        let config = SlidesPerViewConfig::responsive(1, [1, 1, 2, 3, 6]);
        let (policy, _) = ViewportPolicy::from_config(&config);
        assert_eq!(policy.slides_per_view(3840.0), 6);
        assert_eq!(policy.breakpoint(3840.0), Some(BreakpointName::Large));
    }

    #[test]
    fn test_partial_table_falls_back() {
        let config = SlidesPerViewConfig {
            default: 2,
            mobile: Some(1),
            tablet: Some(2),
            ..SlidesPerViewConfig::fixed(2)
        };
        let (policy, warning) = ViewportPolicy::from_config(&config);

        assert!(!policy.is_responsive());
        assert_eq!(policy.slides_per_view(400.0), 2);
        assert_eq!(
            warning,
            Some(ConfigWarning::PartialBreakpointTable {
                missing: BreakpointName::Laptop,
                fallback: 2,
            })
        );
    }

    #[test]
    fn test_zero_entry_invalidates_table() {
        let config = SlidesPerViewConfig::responsive(3, [1, 0, 2, 3, 4]);
        let (policy, warning) = ViewportPolicy::from_config(&config);

        assert_eq!(policy.slides_per_view(400.0), 3);
        assert!(matches!(
            warning,
            Some(ConfigWarning::InvalidBreakpointValue { name: BreakpointName::Tablet, .. })
        ));
    }
}
