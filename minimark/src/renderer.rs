//! HTML renderer.
//!
//! Consumes the token sequence front to back and appends one HTML fragment per
//! token. No token looks at its neighbours.
use std::{
  collections::VecDeque,
  fmt::{self, Write},
  sync::LazyLock,
};

use html_escape::encode_double_quoted_attribute;
use regex::Regex;

use crate::{
  inline::InlineFormatter,
  types::{Alignment, BreakKind, ListKind, Token},
  utils::{compile_or_never, escape_code},
};

static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("LIST_MARKER_RE", r"^\s*(?:\*|\d+\.)\s")
});

/// Turns block tokens into an HTML string.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
  inline: InlineFormatter<'a>,
}

impl<'a> Renderer<'a> {
  #[must_use]
  pub const fn new(image_cdn_prefix: &'a str) -> Self {
    Self {
      inline: InlineFormatter::new(image_cdn_prefix),
    }
  }

  /// Render every token, dequeuing them in source order.
  #[must_use]
  pub fn render(&self, tokens: impl Into<VecDeque<Token>>) -> String {
    let mut queue = tokens.into();
    let mut html = String::new();
    while let Some(token) = queue.pop_front() {
      if let Err(e) = self.render_token(&mut html, &token) {
        log::error!("Failed to write HTML for {token}: {e}");
      }
    }
    html
  }

  fn render_token(&self, out: &mut String, token: &Token) -> fmt::Result {
    match token {
      Token::Heading {
        level,
        anchor_id,
        text,
      } => {
        write!(
          out,
          "<h{level}{}>{}</h{level}>",
          attr("id", anchor_id.as_deref()),
          self.inline.format(text)
        )
      },
      Token::Break(BreakKind::SoftBreak) => out.write_str("<br>"),
      Token::Break(BreakKind::HorizontalRule) => out.write_str("<hr>"),
      Token::Paragraph(text) => {
        write!(out, "<p>{}</p>", self.inline.format(text))
      },
      Token::ListItem { kind, raw_text } => self.render_list(out, *kind, raw_text),
      Token::CodeBlock { language, text } => {
        let class = language.as_deref().map(|lang| format!("language-{lang}"));
        write!(
          out,
          "<pre><code{}>{}</code></pre>",
          attr("class", class.as_deref()),
          escape_code(text)
        )
      },
      Token::Blockquote { css_class, text } => {
        write!(
          out,
          "<blockquote{}>{}</blockquote>",
          attr("class", css_class.as_deref()),
          self.inline.format(&text.replace('\n', "<br>"))
        )
      },
      Token::Table {
        header,
        align,
        cells,
      } => self.render_table(out, header, align, cells),
      Token::Spacer => Ok(()),
    }
  }

  fn render_list(
    &self,
    out: &mut String,
    kind: ListKind,
    raw_text: &str,
  ) -> fmt::Result {
    let tag = kind.tag();
    write!(out, "<{tag}>")?;
    for line in raw_text.split('\n').filter(|line| !line.is_empty()) {
      let item = LIST_MARKER_RE.replace(line, "");
      write!(out, "<li>{}</li>", self.inline.format(&item))?;
    }
    write!(out, "</{tag}>")
  }

  fn render_table(
    &self,
    out: &mut String,
    header: &[String],
    align: &[Alignment],
    cells: &[Vec<String>],
  ) -> fmt::Result {
    let align_attr = |column: usize| {
      attr("align", align.get(column).copied().and_then(Alignment::as_attr))
    };

    out.push_str("<table><thead><tr>");
    for (column, cell) in header.iter().enumerate() {
      write!(
        out,
        "<th{}>{}</th>",
        align_attr(column),
        self.inline.format(cell)
      )?;
    }
    out.push_str("</tr></thead><tbody>");
    for row in cells {
      out.push_str("<tr>");
      for (column, cell) in row.iter().enumerate() {
        write!(
          out,
          "<td{}>{}</td>",
          align_attr(column),
          self.inline.format(cell)
        )?;
      }
      out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    Ok(())
  }
}

/// Format an optional ` name="value"` attribute.
fn attr(name: &str, value: Option<&str>) -> String {
  value.map_or_else(String::new, |value| {
    format!(r#" {name}="{}""#, encode_double_quoted_attribute(value))
  })
}
