//! # Block Matching
//!
//! Each input line is classified on its own, with no surrounding context.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` and `MatchRule`
//! - **`kinds`**: marker types owning each kind's literal prefix
//! - **`line`**: `LineRecord`, the line text being matched
//! - **`chain`**: `BlockChain`, the ordered rule list plus paragraph fallback
//!
//! ## Key Invariants
//!
//! - One line in, one block out
//! - Prefix tests are exact: no trimming, no case folding
//! - Header prefixes end in a space, so no rule prefix shadows another

pub mod chain;
pub mod kinds;
pub mod line;
pub mod types;

pub use chain::{BlockChain, RULES};
pub use line::LineRecord;
pub use types::{BlockKind, MatchRule, UnknownBlockKind};
