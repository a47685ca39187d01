//! Error types for the `quakemap-style` crate.
//!
//! The mapper itself never fails; only configuration parsing does.

/// Errors raised while building style settings from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A UTC offset string could not be parsed.
    #[error("invalid UTC offset {0}")]
    InvalidUtcOffset(String),
}
