//! Configuration errors reported by the slider
//!
//! None of these abort rendering: the widget logs them and falls back to a
//! safe default. They are surfaced so hosts can validate their configuration.

use thiserror::Error;

/// Errors from slider geometry configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The range has no width (`hi <= lo`) or a bound is not finite
    #[error("degenerate slider range {lo}..={hi}")]
    DegenerateRange { lo: f64, hi: f64 },
}

/// Errors from parsing a value label format string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format string has no numeric conversion")]
    MissingConversion,
    #[error("format string has more than one numeric conversion")]
    MultipleConversions,
    #[error("unsupported conversion '%{0}'")]
    UnsupportedConversion(char),
    #[error("format string ends inside a conversion")]
    Incomplete,
}
