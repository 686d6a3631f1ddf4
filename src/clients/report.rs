//! Failure reporting.
//!
//! The [`FailureReporter`] emits exactly one error-level `tracing` event per
//! failed call. Events are parented to a span the caller supplies, so the
//! logging context travels with the client instead of living in a global.
//! Only redacted URIs reach the reporter.

use std::fmt;

/// Maximum number of characters of a response body included in a log event.
pub const BODY_SNIPPET_LIMIT: usize = 512;

/// The classified kind of a failed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The exchange could not be completed (connection, DNS, timeout).
    Transport,
    /// The service answered with a non-success status.
    Http,
    /// The body did not match the expected payload shape.
    Deserialization,
}

impl FailureKind {
    /// Returns the kind as a static string for structured log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Http => "http",
            Self::Deserialization => "deserialization",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logs failed calls under an explicit span.
///
/// # Example
///
/// ```rust
/// use video_indexer::clients::{FailureKind, FailureReporter};
///
/// let reporter = FailureReporter::new(tracing::info_span!("media_sync", job = "nightly"));
/// reporter.report(
///     "https://api.videoindexer.ai/trial/SupportedLanguages?accessToken=***",
///     Some(503),
///     FailureKind::Http,
///     "service unavailable",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FailureReporter {
    span: tracing::Span,
}

impl FailureReporter {
    /// Creates a reporter whose events are children of `span`.
    #[must_use]
    pub fn new(span: tracing::Span) -> Self {
        Self { span }
    }

    /// Returns the span events are parented to.
    #[must_use]
    pub const fn span(&self) -> &tracing::Span {
        &self.span
    }

    /// Logs one failure at error level.
    ///
    /// `log_uri` must already be redacted. `message` is truncated to
    /// [`BODY_SNIPPET_LIMIT`] characters.
    pub fn report(&self, log_uri: &str, status: Option<u16>, kind: FailureKind, message: &str) {
        let message = snippet(message);
        match status {
            Some(status) => tracing::error!(
                parent: &self.span,
                url = %log_uri,
                status,
                kind = kind.as_str(),
                "Video Indexer request failed: {message}"
            ),
            None => tracing::error!(
                parent: &self.span,
                url = %log_uri,
                kind = kind.as_str(),
                "Video Indexer request failed: {message}"
            ),
        }
    }
}

impl Default for FailureReporter {
    fn default() -> Self {
        Self::new(tracing::info_span!("video_indexer"))
    }
}

/// Truncates `text` to [`BODY_SNIPPET_LIMIT`] characters on a char boundary.
#[must_use]
pub fn snippet(text: &str) -> &str {
    text.char_indices()
        .nth(BODY_SNIPPET_LIMIT)
        .map_or(text, |(end, _)| &text[..end])
}
