//! # markdown-lite-engine
//!
//! Converts a small, line-oriented markdown dialect into an HTML fragment.
//!
//! ```text
//! text ──split('\n')──▶ LineRecord ──BlockChain──▶ <tag>emphasis(rest)</tag> ──▶ Document
//! ```
//!
//! Each line is matched against an ordered list of literal prefixes
//! (`# ` .. `###### `, `- `, `---`); the first match wins and anything else
//! is a paragraph. The remaining text gets bold (`**`) then italic (`__`)
//! substitution and is wrapped in the tag the [`TagRegistry`] names for the
//! block kind.
//!
//! Output is never escaped and blocks are never grouped: two bullet lines
//! give two `<li>` fragments with no list container, and `---` renders as
//! `<hr></hr>`.
//!
//! ```
//! assert_eq!(
//!     markdown_lite_engine::to_html("# A\n\nparagraph"),
//!     "<h1>A</h1><p></p><p>paragraph</p>"
//! );
//! ```

pub mod blocks;
pub mod convert;
pub mod document;
pub mod inline;
pub mod tags;

// Re-export key types for easier usage
pub use blocks::{BlockChain, BlockKind, LineRecord, MatchRule, UnknownBlockKind};
pub use convert::{MarkdownConverter, to_html};
pub use document::Document;
pub use inline::{Emphasis, apply_emphasis};
pub use tags::TagRegistry;
