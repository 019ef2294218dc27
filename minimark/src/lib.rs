//! # minimark - a small Markdown to HTML converter
//!
//! Converts a constrained Markdown dialect into HTML in one synchronous pass.
//! The source is normalized, split into block tokens by an ordered list of
//! block rules, and rendered token by token with inline formatting applied to
//! each block's text.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = minimark::render("# Hello World\n\nThis is **bold** text.", "");
//! assert_eq!(html, "<h1>Hello World</h1><p>This is <b>bold</b> text.</p>");
//! ```
//!
//! ## Supported syntax
//!
//! - Headings (`#` to `######`) with an optional `{#id}` anchor
//! - `***` (line break) and `---` (horizontal rule)
//! - `*` and `1.` lists, one item per line until a blank line
//! - Fenced code blocks with an optional language
//! - Blockquotes, optionally classed with `>[name] text`
//! - Pipe tables with an alignment row
//! - Images, links, `**bold**`, `*italic*`, `~~strike~~`, `` `code` `` and
//!   backslash escapes for `!`, `[`, `*`, `~` and `` ` ``
//!
//! ## Configuration
//!
//! ```rust
//! use minimark::{MarkdownOptionsBuilder, MarkdownProcessor};
//!
//! let options = MarkdownOptionsBuilder::new()
//!   .image_cdn_prefix("https://cdn.example.com/")
//!   .strict(true)
//!   .build();
//!
//! let processor = MarkdownProcessor::new(options);
//! let html = processor.try_render("![logo](logo.png)")?;
//! assert!(html.contains(r#"src="https://cdn.example.com/logo.png""#));
//! # Ok::<(), minimark::RenderError>(())
//! ```

mod inline;
pub mod processor;
mod renderer;
mod tokenizer;
mod types;
pub mod utils;

pub use crate::processor::{
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
  RenderError,
  RenderResult,
};

/// Render `source` to HTML, prefixing relative image paths with
/// `image_cdn_prefix`.
///
/// Text that can not be tokenized ends the pass early; a warning is logged
/// and the HTML produced so far is returned.
#[must_use]
pub fn render(source: &str, image_cdn_prefix: &str) -> String {
  MarkdownProcessor::new(
    MarkdownOptionsBuilder::new()
      .image_cdn_prefix(image_cdn_prefix)
      .build(),
  )
  .render(source)
}

/// Like [`render`], but reports text that could not be tokenized as an error
/// instead of truncating.
///
/// # Errors
///
/// Returns [`RenderError::UnparsableRemainder`] if tokenization stopped before
/// the end of `source`.
pub fn try_render(source: &str, image_cdn_prefix: &str) -> RenderResult<String> {
  MarkdownProcessor::new(
    MarkdownOptionsBuilder::new()
      .image_cdn_prefix(image_cdn_prefix)
      .strict(true)
      .build(),
  )
  .try_render(source)
}
