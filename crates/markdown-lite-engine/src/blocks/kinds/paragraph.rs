/// Paragraph block type (marker struct).
///
/// Paragraphs have no prefix - they are the fallback when no other rule
/// matches, and they keep the full line text.
pub struct Paragraph;

impl Paragraph {
    /// Tag name used whenever a registry has no entry for a kind.
    pub const TAG: &'static str = "p";
}
