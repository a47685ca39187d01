//! Error types for map composition and rendering.

use quakemap_style::StyleError;

/// Errors that can occur while composing or rendering a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Style settings in the map configuration are invalid.
    #[error("style error: {0}")]
    Style(#[from] StyleError),

    /// The configuration lists no base layers.
    #[error("at least one base layer must be configured")]
    NoBaseLayers,

    /// The default base layer is not among the configured base layers.
    #[error("default base layer {0:?} is not configured")]
    UnknownBaseLayer(String),

    /// Loading or rendering the page template failed.
    #[error("template error: {0}")]
    Template(String),
}
