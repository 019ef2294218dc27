//! Error types for rendering.

/// Result type for strict rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can stop a rendering pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
  /// No block rule matched the remaining text. Everything after the last
  /// token was discarded.
  #[error(
    "Parse error: no block rule matches the remaining input ({remaining} \
     bytes discarded), last token: {last_token}"
  )]
  UnparsableRemainder {
    /// Description of the last token produced, or `none`.
    last_token: String,
    /// Length in bytes of the unconsumed text.
    remaining:  usize,
  },
}
