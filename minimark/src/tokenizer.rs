//! Block tokenizer.
//!
//! The tokenizer keeps a cursor into the normalized source and repeatedly
//! tests the remaining text against [`BLOCK_RULES`], in order. The first rule
//! whose pattern matches at the very start of the remaining text wins; the
//! cursor then advances past exactly what that rule consumed.
use std::sync::LazyLock;

use log::{debug, trace, warn};
use regex::Regex;

use crate::{
  processor::RenderError,
  types::{Alignment, BreakKind, ListKind, Token},
  utils::compile_or_never,
};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never(
    "HEADING_RE",
    r"^(#{1,6})\s+(.*?)(?:\s*|\{#(\S*)\})(?:\n+|$)",
  )
});

static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("BREAK_RE", r"^(?:(\*{3})|-{3})(?:\n+|$)")
});

static LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("LIST_RE", r"^(\*|\d\.)\s(?s:.*?)(?:\n{2,}|$)")
});

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never(
    "CODE_FENCE_RE",
    r"^```(\S*)\n((?s:.+?))\n```(?:\n|$)",
  )
});

static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never(
    "BLOCKQUOTE_RE",
    r"^>(?:\s|\[(\S+?)\]\s)((?s:.*?))(?:\n{2,}|$)",
  )
});

static TABLE_HEADER_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("TABLE_HEADER_RE", r"^\|(.+?)\|\n"));

static TABLE_ALIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("TABLE_ALIGN_RE", r"^\|([-:|\s]+?)\|(?:\n|$)")
});

static TABLE_ROW_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("TABLE_ROW_RE", r"^\|(.+?)\|(?:\n|$)"));

static PARAGRAPH_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("PARAGRAPH_RE", r"^.*\S.*"));

static SPACER_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("SPACER_RE", r"^\n{2,}"));

static WHITESPACE_RE: LazyLock<Regex> =
  LazyLock::new(|| compile_or_never("WHITESPACE_RE", r"^\s+"));

/// Identifies a block rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
  Heading,
  Break,
  List,
  CodeFence,
  Blockquote,
  Table,
  Paragraph,
  Spacer,
  Whitespace,
}

/// What a rule did with the front of the remaining text.
#[derive(Debug)]
enum Step {
  /// Append a token and advance the cursor by `consumed` bytes.
  Emit { token: Token, consumed: usize },
  /// Advance the cursor without producing a token.
  Skip(usize),
  /// A table header without an alignment row. The same text is tried again
  /// with the table rule disabled.
  NotATable,
}

/// One entry of the ordered rule list: a pattern plus its handler.
pub struct BlockRule {
  pub kind: RuleKind,
  apply:    fn(&str) -> Option<Step>,
}

/// Block rules in priority order.
pub static BLOCK_RULES: &[BlockRule] = &[
  BlockRule {
    kind:  RuleKind::Heading,
    apply: heading,
  },
  BlockRule {
    kind:  RuleKind::Break,
    apply: thematic_break,
  },
  BlockRule {
    kind:  RuleKind::List,
    apply: list,
  },
  BlockRule {
    kind:  RuleKind::CodeFence,
    apply: code_fence,
  },
  BlockRule {
    kind:  RuleKind::Blockquote,
    apply: blockquote,
  },
  BlockRule {
    kind:  RuleKind::Table,
    apply: table,
  },
  BlockRule {
    kind:  RuleKind::Paragraph,
    apply: paragraph,
  },
  BlockRule {
    kind:  RuleKind::Spacer,
    apply: spacer,
  },
  BlockRule {
    kind:  RuleKind::Whitespace,
    apply: whitespace,
  },
];

fn heading(rest: &str) -> Option<Step> {
  let caps = HEADING_RE.captures(rest)?;
  #[allow(
    clippy::cast_possible_truncation,
    reason = "The pattern allows at most six hashes"
  )]
  let level = caps[1].len() as u8;
  Some(Step::Emit {
    token:    Token::Heading {
      level,
      anchor_id: caps.get(3).map(|m| m.as_str().to_string()),
      text: caps[2].trim_end().to_string(),
    },
    consumed: caps[0].len(),
  })
}

fn thematic_break(rest: &str) -> Option<Step> {
  let caps = BREAK_RE.captures(rest)?;
  let kind = if caps.get(1).is_some() {
    BreakKind::SoftBreak
  } else {
    BreakKind::HorizontalRule
  };
  Some(Step::Emit {
    token:    Token::Break(kind),
    consumed: caps[0].len(),
  })
}

fn list(rest: &str) -> Option<Step> {
  let caps = LIST_RE.captures(rest)?;
  let kind = if &caps[1] == "*" {
    ListKind::Unordered
  } else {
    ListKind::Ordered
  };
  Some(Step::Emit {
    token:    Token::ListItem {
      kind,
      raw_text: caps[0].to_string(),
    },
    consumed: caps[0].len(),
  })
}

fn code_fence(rest: &str) -> Option<Step> {
  let caps = CODE_FENCE_RE.captures(rest)?;
  let language = Some(&caps[1])
    .filter(|lang| !lang.is_empty())
    .map(str::to_string);
  Some(Step::Emit {
    token:    Token::CodeBlock {
      language,
      text: caps[2].to_string(),
    },
    consumed: caps[0].len(),
  })
}

fn blockquote(rest: &str) -> Option<Step> {
  let caps = BLOCKQUOTE_RE.captures(rest)?;
  Some(Step::Emit {
    token:    Token::Blockquote {
      css_class: caps.get(1).map(|m| m.as_str().to_string()),
      text:      caps[2].to_string(),
    },
    consumed: caps[0].len(),
  })
}

fn split_cells(row: &str) -> Vec<String> {
  row.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn table(rest: &str) -> Option<Step> {
  let header = TABLE_HEADER_RE.captures(rest)?;
  let mut consumed = header[0].len();

  let Some(align_row) = TABLE_ALIGN_RE.captures(&rest[consumed..]) else {
    return Some(Step::NotATable);
  };
  consumed += align_row[0].len();

  let header = split_cells(&header[1]);
  let mut align: Vec<Alignment> =
    align_row[1].split('|').map(Alignment::from_delimiter).collect();
  align.resize(header.len(), Alignment::None);

  let mut cells = Vec::new();
  while let Some(row) = TABLE_ROW_RE.captures(&rest[consumed..]) {
    cells.push(split_cells(&row[1]));
    consumed += row[0].len();
  }

  Some(Step::Emit {
    token: Token::Table {
      header,
      align,
      cells,
    },
    consumed,
  })
}

fn paragraph(rest: &str) -> Option<Step> {
  let line = PARAGRAPH_RE.find(rest)?;
  Some(Step::Emit {
    token:    Token::Paragraph(line.as_str().to_string()),
    consumed: line.end(),
  })
}

fn spacer(rest: &str) -> Option<Step> {
  let m = SPACER_RE.find(rest)?;
  Some(Step::Emit {
    token:    Token::Spacer,
    consumed: m.end(),
  })
}

fn whitespace(rest: &str) -> Option<Step> {
  WHITESPACE_RE.find(rest).map(|m| Step::Skip(m.end()))
}

/// Result of one tokenizer pass.
#[derive(Debug)]
pub struct Tokenized {
  /// Every token produced before the scan finished or stopped.
  pub tokens: Vec<Token>,
  /// Set when the scan stopped on text no rule could match.
  pub error:  Option<RenderError>,
}

/// Scanner state for a single pass over one document.
pub struct BlockTokenizer<'a> {
  rest:   &'a str,
  tokens: Vec<Token>,
  rules:  &'static [BlockRule],
}

impl<'a> BlockTokenizer<'a> {
  /// Create a tokenizer over already normalized text.
  #[must_use]
  pub fn new(text: &'a str) -> Self {
    Self::with_rules(text, BLOCK_RULES)
  }

  /// Create a tokenizer that only knows the given rules.
  #[must_use]
  pub const fn with_rules(text: &'a str, rules: &'static [BlockRule]) -> Self {
    Self {
      rest: text,
      tokens: Vec::new(),
      rules,
    }
  }

  /// Run the scan to completion.
  #[must_use]
  pub fn tokenize(mut self) -> Tokenized {
    let mut table_disabled = false;

    while !self.rest.is_empty() {
      let step = self
        .rules
        .iter()
        .filter(|rule| !(table_disabled && rule.kind == RuleKind::Table))
        .find_map(|rule| (rule.apply)(self.rest));

      match step {
        Some(Step::Emit { token, consumed }) => {
          trace!("Tokenized {token} ({consumed} bytes)");
          self.push(token);
          self.advance(consumed);
          table_disabled = false;
        },
        Some(Step::Skip(consumed)) => {
          self.advance(consumed);
          table_disabled = false;
        },
        Some(Step::NotATable) => {
          trace!("Table header without alignment row, treating as text");
          table_disabled = true;
        },
        None => {
          let error = RenderError::UnparsableRemainder {
            last_token: self
              .tokens
              .last()
              .map_or_else(|| "none".to_string(), ToString::to_string),
            remaining:  self.rest.len(),
          };
          warn!("{error}");
          return Tokenized {
            tokens: self.tokens,
            error:  Some(error),
          };
        },
      }
    }

    debug!("Tokenized document into {} blocks", self.tokens.len());
    Tokenized {
      tokens: self.tokens,
      error:  None,
    }
  }

  fn advance(&mut self, consumed: usize) {
    self.rest = &self.rest[consumed..];
  }

  /// Append a token, folding a paragraph line into a directly preceding
  /// paragraph.
  fn push(&mut self, token: Token) {
    if let Token::Paragraph(line) = &token {
      if let Some(Token::Paragraph(previous)) = self.tokens.last_mut() {
        previous.push('\n');
        previous.push_str(line);
        return;
      }
    }
    self.tokens.push(token);
  }
}

/// Tokenize normalized text with the full rule set.
#[must_use]
pub fn tokenize(text: &str) -> Tokenized {
  BlockTokenizer::new(text).tokenize()
}
