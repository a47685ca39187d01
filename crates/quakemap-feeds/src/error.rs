//! Error types for the feed client.
//!
//! Uses `thiserror` for typed errors covering every way a fetch can go
//! wrong: client construction, transport, HTTP status, and decoding.

/// Errors that can occur while fetching or parsing a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request failed before a response arrived (DNS, TLS, timeout).
    #[error("request to {url} failed: {message}")]
    Request {
        /// The requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The body was not a `GeoJSON` feature collection.
    #[error("malformed GeoJSON from {url}: {source}")]
    Decode {
        /// Where the body came from.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
