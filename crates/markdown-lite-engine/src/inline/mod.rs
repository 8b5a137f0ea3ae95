//! # Inline Emphasis
//!
//! Rewrites bold and italic markers inside a line's text.
//!
//! Two passes run over the whole string, strong first and italic second.
//! Each pass wraps every non-greedy span between a pair of its delimiters.
//! There is no nesting model and no escaping: a delimiter without a partner
//! stays as literal text.

pub mod emphasis;

pub use emphasis::{Emphasis, apply_emphasis, replace_spans};
