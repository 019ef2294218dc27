//! Inline span formatting.
//!
//! Substitutions run as a fixed chain over a single block's text. Every step
//! sees the output of the step before it, so a span already rewritten into a
//! tag (an image, say) can not be picked up again by a later step. A marker
//! preceded by a backslash is skipped by every step; the final step removes
//! those backslashes.
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::utils::{compile_or_never, escape_code, replace_with};

static IMAGE_ABSOLUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never(
    "IMAGE_ABSOLUTE_RE",
    r"([^\\]|^)!\[(.*?)\]\((http.*?)\)",
  )
});

static IMAGE_RELATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("IMAGE_RELATIVE_RE", r"([^\\]|^)!\[(.*?)\]\((.*?)\)")
});

static ANCHOR_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("ANCHOR_LINK_RE", r"([^\\]|^)\[(.*?)\]\((#.*?)\)")
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("LINK_RE", r"([^\\]|^)\[(.*?)\]\((.*?)\)")
});

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("BOLD_RE", r"([^\\]|^)\*\*(.+?)\*\*")
});

static ITALIC_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("ITALIC_RE", r"([^\\]|^)\*(.+?)\*"));

static STRIKETHROUGH_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("STRIKETHROUGH_RE", r"([^\\]|^)~~(.+?)~~")
});

static INLINE_CODE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("INLINE_CODE_RE", r"([^\\]|^)`(.+?)`"));

static ESCAPED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("ESCAPED_MARKER_RE", r"\\([!\[*~`])")
});

/// Rewrites inline spans inside one block of text.
#[derive(Debug, Clone, Copy)]
pub struct InlineFormatter<'a> {
  image_cdn_prefix: &'a str,
}

impl<'a> InlineFormatter<'a> {
  /// Create a formatter that prefixes relative image paths with
  /// `image_cdn_prefix`.
  #[must_use]
  pub const fn new(image_cdn_prefix: &'a str) -> Self {
    Self { image_cdn_prefix }
  }

  /// Apply every inline substitution, in order.
  #[must_use]
  pub fn format(&self, text: &str) -> String {
    let text = replace_with(text, &IMAGE_ABSOLUTE_RE, |caps| {
      format!(r#"{}<img alt="{}" src="{}" >"#, &caps[1], &caps[2], &caps[3])
    });
    let text = replace_with(&text, &IMAGE_RELATIVE_RE, |caps| {
      format!(
        r#"{}<img alt="{}" src="{}{}" >"#,
        &caps[1], &caps[2], self.image_cdn_prefix, &caps[3]
      )
    });
    let text = replace_with(&text, &ANCHOR_LINK_RE, |caps| {
      format!(r#"{}<a href="{}">{}</a>"#, &caps[1], &caps[3], &caps[2])
    });
    let text = replace_with(&text, &LINK_RE, |caps| {
      format!(
        r#"{}<a target="_blank" href="{}">{}</a>"#,
        &caps[1], &caps[3], &caps[2]
      )
    });
    let text = wrap(&text, &BOLD_RE, "b");
    let text = wrap(&text, &ITALIC_RE, "i");
    let text = wrap(&text, &STRIKETHROUGH_RE, "s");
    let text = replace_with(&text, &INLINE_CODE_RE, |caps| {
      format!("{}<code>{}</code>", &caps[1], escape_code(&caps[2]))
    });
    replace_with(&text, &ESCAPED_MARKER_RE, |caps| caps[1].to_string())
  }
}

/// Wrap the second capture group in `tag`, keeping the preceding character.
fn wrap(text: &str, regex: &Regex, tag: &str) -> String {
  replace_with(text, regex, |caps: &Captures| {
    format!("{}<{tag}>{}</{tag}>", &caps[1], &caps[2])
  })
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn format(text: &str) -> String {
    InlineFormatter::new("").format(text)
  }

  #[test]
  fn test_plain_text_untouched() {
    assert_eq!(format("just words, nothing else."), "just words, nothing else.");
  }

  #[test]
  fn test_absolute_image() {
    assert_eq!(
      InlineFormatter::new("https://cdn.example/")
        .format("![logo](https://example.com/logo.png)"),
      r#"<img alt="logo" src="https://example.com/logo.png" >"#
    );
  }

  #[test]
  fn test_relative_image_uses_cdn_prefix() {
    assert_eq!(
      InlineFormatter::new("https://cdn.example/").format("see ![pic](a/b.png)"),
      r#"see <img alt="pic" src="https://cdn.example/a/b.png" >"#
    );
  }

  #[test]
  fn test_cdn_prefix_is_inserted_literally() {
    assert_eq!(
      InlineFormatter::new("$1/").format("![x](y.png)"),
      r#"<img alt="x" src="$1/y.png" >"#
    );
  }

  #[test]
  fn test_image_is_not_relinked() {
    let html = format("![alt](pic.png)");
    assert!(!html.contains("<a "), "image became a link: {html}");
  }

  #[test]
  fn test_anchor_link_stays_in_page() {
    assert_eq!(format("[Top](#top)"), r##"<a href="#top">Top</a>"##);
  }

  #[test]
  fn test_external_link_opens_new_context() {
    assert_eq!(
      format("go [home](https://example.com) now"),
      r#"go <a target="_blank" href="https://example.com">home</a> now"#
    );
  }

  #[test]
  fn test_emphasis() {
    assert_eq!(
      format("**bold** and *italic* and ~~gone~~"),
      "<b>bold</b> and <i>italic</i> and <s>gone</s>"
    );
  }

  #[test]
  fn test_inline_code_is_escaped() {
    assert_eq!(
      format("use `<br>` here"),
      "use <code>&lt;br&gt;</code> here"
    );
  }

  #[test]
  fn test_escaped_markers_render_literally() {
    assert_eq!(format(r"\*not italic\*"), "*not italic*");
    assert_eq!(format(r"\~~kept~~"), "~~kept~~");
    assert_eq!(format(r"\`tick`"), "`tick`");
    assert_eq!(format(r"\!\[alt](x)"), "![alt](x)");
  }

  #[test]
  fn test_escaped_bang_still_allows_link() {
    assert_eq!(
      format(r"\![alt](x)"),
      r#"!<a target="_blank" href="x">alt</a>"#
    );
  }

  #[test]
  fn test_leading_doubled_marker_keeps_first_character() {
    assert_eq!(format("**bold*"), "*<i>bold</i>");
    assert_eq!(format("``a` b"), "`<code>a</code> b");
  }

  #[test]
  fn test_lone_marker_passes_through() {
    assert_eq!(format("2 * 3"), "2 * 3");
  }

  #[test]
  fn test_spans_do_not_cross_lines() {
    assert_eq!(format("*a\nb*"), "*a\nb*");
  }
}
