//! Render a Markdown file (or standard input) to HTML on standard output.
//!
//! ```text
//! RUST_LOG=minimark=trace cargo run --example render -- README.md /cdn/
//! ```
use std::io::Read;

use minimark::{MarkdownOptionsBuilder, MarkdownProcessor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();

  let mut args = std::env::args().skip(1);
  let source = match args.next().as_deref() {
    None | Some("-") => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf
    },
    Some(path) => std::fs::read_to_string(path)?,
  };
  let cdn_prefix = args.next().unwrap_or_default();

  let processor = MarkdownProcessor::new(
    MarkdownOptionsBuilder::new()
      .image_cdn_prefix(cdn_prefix)
      .build(),
  );

  println!("{}", processor.render(&source));
  Ok(())
}
