//! Finished slider configuration and its normalisation.
//!
//! Options arrive already parsed. Normalisation only resolves conflicts
//! between settings, downgrading to simpler behaviour where needed.

use crate::autoplay::{AutoplayMode, DEFAULT_CONTINUOUS_SPEED, DEFAULT_INTERVAL_MS};
use crate::error::ConfigWarning;
use crate::viewport::{SlidesPerViewConfig, ViewportPolicy};

/// Requested autoplay strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AutoplayKind {
    #[default]
    None,
    Interval,
    Continuous,
}

/// Slider configuration as produced by the option resolver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderOptions {
    pub slides_per_view: SlidesPerViewConfig,
    pub autoplay: AutoplayKind,
    /// Interval step delay; 3000 ms when absent
    pub autoplay_delay_ms: Option<u64>,
    /// Continuous speed; 100 px/s when absent
    pub continuous_speed_px_per_sec: Option<i32>,
    pub navigation: bool,
    pub pagination: bool,
    pub gap_px: f64,
    pub cross_fade: bool,
    pub infinite_scrolling: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            slides_per_view: SlidesPerViewConfig::default(),
            autoplay: AutoplayKind::None,
            autoplay_delay_ms: None,
            continuous_speed_px_per_sec: None,
            navigation: false,
            pagination: false,
            gap_px: 0.0,
            cross_fade: false,
            infinite_scrolling: false,
            pause_on_hover: false,
            draggable: false,
        }
    }
}

impl SliderOptions {
    /// Parse options from a TOML document.
    ///
    /// ```rust,ignore
    /// let options = SliderOptions::from_toml_str(r#"
    ///     autoplay = "continuous"
    ///     continuous_speed_px_per_sec = 80
    ///     infinite_scrolling = true
    /// "#)?;
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, crate::error::OptionsError> {
        Ok(toml::from_str(s)?)
    }

    /// Resolve conflicting settings into what the engine will actually run.
    pub fn resolve(&self) -> ResolvedOptions {
        let mut warnings = Vec::new();

        let (policy, table_warning) = ViewportPolicy::from_config(&self.slides_per_view);
        warnings.extend(table_warning);

        let (autoplay, downgrade) = self.autoplay_mode();
        if let Some(warning) = downgrade {
            tracing::warn!(%warning, "slider.autoplay_downgraded");
            warnings.push(warning);
        }

        ResolvedOptions {
            policy,
            autoplay,
            gap_px: if self.gap_px.is_finite() { self.gap_px.max(0.0) } else { 0.0 },
            navigation: self.navigation,
            pagination: self.pagination,
            cross_fade: self.cross_fade,
            infinite_scrolling: self.infinite_scrolling,
            pause_on_hover: self.pause_on_hover,
            draggable: self.draggable,
            warnings,
        }
    }

    fn autoplay_mode(&self) -> (AutoplayMode, Option<ConfigWarning>) {
        match self.autoplay {
            AutoplayKind::None => (AutoplayMode::None, None),
            AutoplayKind::Interval => match self.autoplay_delay_ms.unwrap_or(DEFAULT_INTERVAL_MS) {
                0 => (AutoplayMode::None, Some(ConfigWarning::ZeroIntervalDelay)),
                delay_ms => (AutoplayMode::Interval { delay_ms }, None),
            },
            AutoplayKind::Continuous => {
                if self.cross_fade {
                    return (AutoplayMode::None, Some(ConfigWarning::CrossFadeWithContinuous));
                }
                match self.continuous_speed_px_per_sec {
                    Some(speed) if speed <= 0 => (
                        AutoplayMode::None,
                        Some(ConfigWarning::NonPositiveContinuousSpeed { speed }),
                    ),
                    speed => (
                        AutoplayMode::Continuous {
                            speed_px_per_sec: speed.map(f64::from).unwrap_or(DEFAULT_CONTINUOUS_SPEED),
                        },
                        None,
                    ),
                }
            }
        }
    }
}

/// Options after conflict resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub policy: ViewportPolicy,
    pub autoplay: AutoplayMode,
    pub gap_px: f64,
    pub navigation: bool,
    pub pagination: bool,
    /// Requested cross-fade; only effective at one slide per view
    pub cross_fade: bool,
    pub infinite_scrolling: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    /// Downgrades applied while resolving
    pub warnings: Vec<ConfigWarning>,
}

impl ResolvedOptions {
    /// Whether cross-fade applies at `slides_per_view`.
    #[inline]
    pub fn cross_fade_active(&self, slides_per_view: usize) -> bool {
        self.cross_fade && slides_per_view == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_cleanly() {
        let resolved = SliderOptions::default().resolve();
        assert_eq!(resolved.autoplay, AutoplayMode::None);
        assert!(resolved.warnings.is_empty());
        assert_eq!(resolved.policy.slides_per_view(1000.0), 1);
    }

    #[test]
    fn interval_defaults_to_three_seconds() {
        let options = SliderOptions {
            autoplay: AutoplayKind::Interval,
            ..Default::default()
        };
        assert_eq!(options.resolve().autoplay, AutoplayMode::Interval { delay_ms: 3000 });
    }

    #[test]
    fn zero_delay_disables_interval() {
        let options = SliderOptions {
            autoplay: AutoplayKind::Interval,
            autoplay_delay_ms: Some(0),
            ..Default::default()
        };
        let resolved = options.resolve();
        assert_eq!(resolved.autoplay, AutoplayMode::None);
        assert_eq!(resolved.warnings, vec![ConfigWarning::ZeroIntervalDelay]);
    }

    #[test]
    fn non_positive_speed_downgrades_to_none() {
        let options = SliderOptions {
            autoplay: AutoplayKind::Continuous,
            continuous_speed_px_per_sec: Some(-10),
            ..Default::default()
        };
        let resolved = options.resolve();
        assert_eq!(resolved.autoplay, AutoplayMode::None);
        assert_eq!(
            resolved.warnings,
            vec![ConfigWarning::NonPositiveContinuousSpeed { speed: -10 }]
        );
    }

    #[test]
    fn cross_fade_excludes_continuous_but_not_interval() {
        let continuous = SliderOptions {
            autoplay: AutoplayKind::Continuous,
            cross_fade: true,
            ..Default::default()
        };
        let resolved = continuous.resolve();
        assert_eq!(resolved.autoplay, AutoplayMode::None);
        assert_eq!(resolved.warnings, vec![ConfigWarning::CrossFadeWithContinuous]);

        let interval = SliderOptions {
            autoplay: AutoplayKind::Interval,
            autoplay_delay_ms: Some(1500),
            cross_fade: true,
            ..Default::default()
        };
        assert_eq!(interval.resolve().autoplay, AutoplayMode::Interval { delay_ms: 1500 });
    }

    #[test]
    fn partial_table_is_reported() {
        let options = SliderOptions {
            slides_per_view: SlidesPerViewConfig {
                desktop: Some(3),
                ..SlidesPerViewConfig::fixed(2)
            },
            ..Default::default()
        };
        let resolved = options.resolve();
        assert!(!resolved.policy.is_responsive());
        assert_eq!(resolved.warnings.len(), 1);
    }

    #[test]
    fn negative_gap_is_zeroed() {
        let options = SliderOptions {
            gap_px: -4.0,
            ..Default::default()
        };
        assert_eq!(options.resolve().gap_px, 0.0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn loads_from_toml() {
        let options = SliderOptions::from_toml_str(
            r#"
            autoplay = "continuous"
            continuous_speed_px_per_sec = 80
            infinite_scrolling = true
            gap_px = 16.0

            [slides_per_view]
            default = 1
            mobile = 1
            tablet = 2
            laptop = 3
            desktop = 4
            large = 5
            "#,
        )
        .unwrap();
        let resolved = options.resolve();
        assert_eq!(resolved.autoplay, AutoplayMode::Continuous { speed_px_per_sec: 80.0 });
        assert!(resolved.policy.is_responsive());
        assert_eq!(resolved.policy.slides_per_view(1200.0), 3);
    }
}
