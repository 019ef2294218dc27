//! Block tokens produced by the tokenizer and consumed by the renderer.
use std::fmt;

/// Kind of a thematic break line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
  /// `***`, rendered as `<br>`.
  SoftBreak,
  /// `---`, rendered as `<hr>`.
  HorizontalRule,
}

/// Kind of a list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
  Ordered,
  Unordered,
}

impl ListKind {
  pub(crate) const fn tag(self) -> &'static str {
    match self {
      Self::Ordered => "ol",
      Self::Unordered => "ul",
    }
  }
}

/// Text alignment of a table column, taken from the alignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
  #[default]
  None,
  Left,
  Right,
  Center,
}

impl Alignment {
  /// Classify one trimmed cell of the alignment row.
  ///
  /// A colon on both ends centers the column, a leading colon aligns left,
  /// a trailing colon aligns right.
  #[must_use]
  pub fn from_delimiter(cell: &str) -> Self {
    let cell = cell.trim();
    match (cell.starts_with(':'), cell.ends_with(':')) {
      (true, true) => Self::Center,
      (true, false) => Self::Left,
      (false, true) => Self::Right,
      (false, false) => Self::None,
    }
  }

  /// Value for the HTML `align` attribute, `None` when no attribute should be
  /// emitted.
  #[must_use]
  pub const fn as_attr(self) -> Option<&'static str> {
    match self {
      Self::None => None,
      Self::Left => Some("left"),
      Self::Right => Some("right"),
      Self::Center => Some("center"),
    }
  }
}

/// A single block-level unit of the document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Heading {
    level:     u8,
    anchor_id: Option<String>,
    text:      String,
  },
  Break(BreakKind),
  /// `raw_text` keeps every consumed line including its marker; the renderer
  /// splits it into items.
  ListItem {
    kind:     ListKind,
    raw_text: String,
  },
  CodeBlock {
    language: Option<String>,
    text:     String,
  },
  Blockquote {
    css_class: Option<String>,
    text:      String,
  },
  Table {
    header: Vec<String>,
    align:  Vec<Alignment>,
    cells:  Vec<Vec<String>>,
  },
  Paragraph(String),
  Spacer,
}

impl Token {
  /// Short name of the token kind, used in diagnostics.
  #[must_use]
  pub const fn kind_name(&self) -> &'static str {
    match self {
      Self::Heading { .. } => "heading",
      Self::Break(_) => "break",
      Self::ListItem { .. } => "list",
      Self::CodeBlock { .. } => "code block",
      Self::Blockquote { .. } => "blockquote",
      Self::Table { .. } => "table",
      Self::Paragraph(_) => "paragraph",
      Self::Spacer => "spacer",
    }
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Heading { level, text, .. } => write!(f, "heading h{level} {text:?}"),
      Self::Paragraph(text) => write!(f, "paragraph {text:?}"),
      Self::CodeBlock { language, .. } => {
        write!(f, "code block ({})", language.as_deref().unwrap_or("plain"))
      },
      Self::Table { header, cells, .. } => {
        write!(f, "table {}x{}", header.len(), cells.len())
      },
      other => f.write_str(other.kind_name()),
    }
  }
}
