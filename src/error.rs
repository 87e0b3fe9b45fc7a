//! Error types for the dashboard.

/// All errors that can occur while fetching, merging or rendering the
/// dashboard.
///
/// A missing white card is not an error; see
/// [`crate::dashboard::Outcome::WhiteCardNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bank API answered with a non-success status.
    #[error("bank api returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder if it could not be read.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A client was built without an access token.
    #[error("access token is required to build a bank client")]
    MissingToken,

    /// An environment value could not be parsed.
    #[error("invalid configuration value for {key}: {message}")]
    Config {
        /// Environment variable name.
        key: &'static str,
        /// Description of the problem.
        message: String,
    },

    /// The response cache lock was poisoned.
    #[error("response cache error: {0}")]
    Cache(String),

    /// Writing markup failed.
    #[error("render error: {0}")]
    Render(#[from] core::fmt::Error),

    /// Binding or running the web server failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DashboardError>;
