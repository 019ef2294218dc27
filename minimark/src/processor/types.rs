//! Type definitions for the Markdown processor.
//!
//! # Examples
//!
//! ```
//! use minimark::{MarkdownOptions, MarkdownProcessor};
//!
//! let options = MarkdownOptions {
//!   image_cdn_prefix: "https://cdn.example.com/".to_string(),
//!   ..Default::default()
//! };
//!
//! let processor = MarkdownProcessor::new(options);
//! ```
use serde::{Deserialize, Serialize};

/// Options for configuring the Markdown processor.
///
/// Deserializable so it can be embedded in a larger configuration file;
/// missing fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownOptions {
  /// Prefix prepended to relative image paths (`![alt](path)`).
  /// Images whose target starts with `http` are left as-is.
  pub image_cdn_prefix: String,

  /// Return an error instead of truncating the output when part of the
  /// input can not be tokenized.
  pub strict: bool,
}

/// Main Markdown processor.
///
/// Holds nothing but its options, so it is cheap to clone and can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
  pub(crate) options: MarkdownOptions,
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the prefix used for relative image paths.
  #[must_use]
  pub fn image_cdn_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
    self.options.image_cdn_prefix = prefix.into();
    self
  }

  /// Enable or disable strict mode.
  #[must_use]
  pub const fn strict(mut self, enabled: bool) -> Self {
    self.options.strict = enabled;
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}
