//! Core implementation of the Markdown processor.
//!
//! The pipeline is normalize, tokenize, render. Every call works on its own
//! locals; the processor itself is never mutated.
use log::trace;

use super::{
  error::{RenderError, RenderResult},
  types::{MarkdownOptions, MarkdownProcessor},
};
use crate::{renderer::Renderer, tokenizer::tokenize, utils};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to HTML.
  ///
  /// If part of the input can not be tokenized, a warning is logged and the
  /// HTML for everything before it is returned. In strict mode the partial
  /// output is still returned here; use [`Self::try_render`] to observe the
  /// error.
  #[must_use]
  pub fn render(&self, markdown: &str) -> String {
    let (html, _) = self.run(markdown);
    html
  }

  /// Render Markdown to HTML, honouring [`MarkdownOptions::strict`].
  ///
  /// # Errors
  ///
  /// In strict mode, returns [`RenderError::UnparsableRemainder`] when the
  /// tokenizer stopped before the end of the input. Otherwise never fails.
  pub fn try_render(&self, markdown: &str) -> RenderResult<String> {
    match self.run(markdown) {
      (_, Some(error)) if self.options.strict => Err(error),
      (html, _) => Ok(html),
    }
  }

  fn run(&self, markdown: &str) -> (String, Option<RenderError>) {
    let text = utils::normalize_line_endings(markdown);
    let tokenized = tokenize(&text);
    trace!("Rendering {} tokens", tokenized.tokens.len());
    let html =
      Renderer::new(&self.options.image_cdn_prefix).render(tokenized.tokens);
    (html, tokenized.error)
  }
}
