//! Recoverable configuration problems.
//!
//! Nothing in the engine is fatal to the host page. Invalid settings are
//! downgraded to a simpler behaviour and reported as a [`ConfigWarning`].

use thiserror::Error;

use crate::viewport::BreakpointName;

/// A configuration problem that was resolved by falling back to a simpler
/// behaviour.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// Some, but not all, named breakpoints were given a slides-per-view value.
    #[error("missing slides-per-view for breakpoint `{missing}`, using default of {fallback}")]
    PartialBreakpointTable {
        missing: BreakpointName,
        fallback: usize,
    },

    /// A breakpoint entry was present but not a positive integer.
    #[error("invalid slides-per-view {value} for breakpoint `{name}`, using default of {fallback}")]
    InvalidBreakpointValue {
        name: BreakpointName,
        value: u32,
        fallback: usize,
    },

    /// Continuous autoplay was requested with a speed that would never move.
    #[error("continuous autoplay speed {speed}px/s is not positive, autoplay disabled")]
    NonPositiveContinuousSpeed { speed: i32 },

    /// Interval autoplay was requested with a zero delay.
    #[error("interval autoplay delay must be positive, autoplay disabled")]
    ZeroIntervalDelay,

    /// Cross-fade and continuous autoplay cannot run together.
    #[error("continuous autoplay is not supported with cross-fade, autoplay disabled")]
    CrossFadeWithContinuous,

    /// Cross-fade only applies when a single slide is in view.
    #[error("cross-fade is only supported with one slide per view (got {slides_per_view}), ignoring")]
    CrossFadeMultiView { slides_per_view: usize },

    /// A gap was configured but only one slide is visible.
    #[error("gap of {gap_px}px has no visual effect with one slide per view")]
    GapWithSingleSlide { gap_px: f64 },
}

/// Error raised while loading [`SliderOptions`](crate::SliderOptions) from text.
#[cfg(feature = "toml")]
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("failed to parse slider options: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages_name_the_breakpoint() {
        let warning = ConfigWarning::PartialBreakpointTable {
            missing: BreakpointName::Laptop,
            fallback: 2,
        };
        assert_eq!(
            warning.to_string(),
            "missing slides-per-view for breakpoint `laptop`, using default of 2"
        );
    }

    #[test]
    fn speed_warning_includes_value() {
        let warning = ConfigWarning::NonPositiveContinuousSpeed { speed: -5 };
        assert!(warning.to_string().contains("-5px/s"));
    }
}
