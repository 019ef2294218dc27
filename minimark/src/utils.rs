//! Text helpers shared by the tokenizer, the inline formatter and the renderer.
use std::borrow::Cow;

use log::error;
use regex::{Captures, Regex};

/// Collapse `\r\n` and lone `\r` line endings into `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
  if !text.contains('\r') {
    return Cow::Borrowed(text);
  }
  Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Escape text that must render as literal code.
///
/// Only `<`, `>`, `"` and `'` are replaced. Ampersands are left alone so that
/// entities written by hand inside code survive.
#[must_use]
pub fn escape_code(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

/// Apply `transform` to every match of `regex` in `text`.
///
/// Replacement text produced by `transform` is inserted literally, so
/// captured or caller supplied `$` sequences are never expanded.
pub fn replace_with<F>(text: &str, regex: &Regex, transform: F) -> String
where
  F: Fn(&Captures) -> String,
{
  match regex.replace_all(text, |caps: &Captures| transform(caps)) {
    Cow::Borrowed(_) => text.to_string(),
    Cow::Owned(s) => s,
  }
}

/// Compile a static pattern, logging and falling back to a pattern that never
/// matches if compilation fails.
pub(crate) fn compile_or_never(name: &str, pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    error!("Failed to compile {name} regex: {e}");
    never_matching_regex()
  })
}

/// Regex that can not match any input, not even the empty string.
#[allow(clippy::unwrap_used, reason = "An empty class is always valid")]
pub(crate) fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    assert_eq!(normalize_line_endings("\r\r\n"), "\n\n");
    assert!(matches!(normalize_line_endings("plain\n"), Cow::Borrowed(_)));
  }

  #[test]
  fn test_escape_code() {
    assert_eq!(
      escape_code(r#"<a href="x">it's</a>"#),
      "&lt;a href=&quot;x&quot;&gt;it&#39;s&lt;/a&gt;"
    );
  }

  #[test]
  fn test_escape_code_leaves_safe_text_unchanged() {
    for text in ["", "plain text", "a && b", "&lt; already", "x = y * 2;"] {
      assert_eq!(escape_code(text), text);
    }
  }

  #[test]
  fn test_escape_code_does_not_double_encode() {
    let once = escape_code("<b>");
    assert_eq!(escape_code(&once), once);
  }

  #[test]
  fn test_replace_with_is_literal() {
    let re = Regex::new(r"x").unwrap();
    assert_eq!(replace_with("axb", &re, |_| "$1".to_string()), "a$1b");
    assert_eq!(replace_with("none", &re, |_| String::new()), "none");
  }

  #[test]
  fn test_never_matching_regex() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything\n"));
  }
}
