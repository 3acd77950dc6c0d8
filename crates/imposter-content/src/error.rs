//! Error types for content generation.

/// The one hard failure [`RoundClient`](crate::RoundClient) surfaces.
///
/// Everything a provider can do wrong is absorbed into the fallback round
/// instead (see [`SourceError`]); only a configuration that makes selection
/// itself impossible is reported to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The settings enable no categories, so there is nothing to pick
    /// from. Detected before any provider interaction.
    #[error("no categories are enabled")]
    NoCategories,
}

/// Failures a provider implementation can report.
///
/// `RoundClient` converts every one of these into the fallback round; the
/// distinct variants exist so logs and provider tests can tell transport
/// trouble from a misbehaving payload.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP exchange failed: connect, send, or a non-success status.
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered without any usable content.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// The provider's payload was not the expected JSON shape.
    #[error("provider returned a malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
