//! Markdown processing entry points.
//!
//! - [`core`]: the processor pipeline
//! - [`error`]: error types for strict rendering
//! - [`types`]: configuration and the processor struct
pub mod core;
pub mod error;
pub mod types;

pub use error::{RenderError, RenderResult};
pub use types::{MarkdownOptions, MarkdownOptionsBuilder, MarkdownProcessor};

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn test_builder_sets_options() {
    let options = MarkdownOptionsBuilder::new()
      .image_cdn_prefix("https://cdn.example/")
      .strict(true)
      .build();
    assert_eq!(options.image_cdn_prefix, "https://cdn.example/");
    assert!(options.strict);
  }

  #[test]
  fn test_default_options() {
    let options = MarkdownOptions::default();
    assert!(options.image_cdn_prefix.is_empty());
    assert!(!options.strict);
  }

  #[test]
  fn test_options_from_json() {
    let options: MarkdownOptions =
      serde_json::from_str(r#"{"image_cdn_prefix": "/static/"}"#).unwrap();
    assert_eq!(options.image_cdn_prefix, "/static/");
    assert!(!options.strict);

    let unknown =
      serde_json::from_str::<MarkdownOptions>(r#"{"cdn": "/static/"}"#);
    assert!(unknown.is_err());
  }

  #[test]
  fn test_processor_uses_cdn_prefix() {
    let processor = MarkdownProcessor::new(
      MarkdownOptionsBuilder::new().image_cdn_prefix("/img/").build(),
    );
    assert_eq!(
      processor.render("![a](b.png)"),
      r#"<p><img alt="a" src="/img/b.png" ></p>"#
    );
  }

  #[test]
  fn test_try_render_lenient_never_fails() {
    let processor = MarkdownProcessor::default();
    assert_eq!(processor.try_render("hi").unwrap(), "<p>hi</p>");
  }

  #[test]
  fn test_render_error_display() {
    let error = RenderError::UnparsableRemainder {
      last_token: "none".to_string(),
      remaining:  4,
    };
    assert_eq!(
      error.to_string(),
      "Parse error: no block rule matches the remaining input (4 bytes \
       discarded), last token: none"
    );
  }

  #[test]
  fn test_processor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarkdownProcessor>();
  }
}
