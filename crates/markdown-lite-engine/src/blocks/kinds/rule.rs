/// Horizontal rule marker type.
///
/// Anything after the three dashes is kept as the rule's content, so
/// `----` renders as `<hr>-</hr>`.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const PREFIX: &'static str = "---";
}
