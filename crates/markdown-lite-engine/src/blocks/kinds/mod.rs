//! # Block Kinds
//!
//! Marker types that own the literal syntax of each block kind. The chain
//! reads prefixes from here; it never hardcodes `#` or `- ` itself.

pub mod bullet;
pub mod heading;
pub mod paragraph;
pub mod rule;

pub use bullet::Bullet;
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
