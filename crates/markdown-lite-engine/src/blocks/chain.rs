use crate::document::Document;
use crate::inline::apply_emphasis;
use crate::tags::TagRegistry;

use super::kinds::{Bullet, Heading, HorizontalRule};
use super::line::LineRecord;
use super::types::{BlockKind, MatchRule};

/// Prefix rules in priority order. Paragraph is the implicit fallback and
/// has no entry here.
pub const RULES: [MatchRule; 8] = [
    MatchRule::new(Heading::PREFIXES[0], BlockKind::Header1),
    MatchRule::new(Heading::PREFIXES[1], BlockKind::Header2),
    MatchRule::new(Heading::PREFIXES[2], BlockKind::Header3),
    MatchRule::new(Heading::PREFIXES[3], BlockKind::Header4),
    MatchRule::new(Heading::PREFIXES[4], BlockKind::Header5),
    MatchRule::new(Heading::PREFIXES[5], BlockKind::Header6),
    MatchRule::new(Bullet::PREFIX, BlockKind::Bullet),
    MatchRule::new(HorizontalRule::PREFIX, BlockKind::HorizontalRule),
];

/// Ordered first-match-wins line classifier.
///
/// Rules are tried in order; the first whose prefix starts the line decides
/// the block kind. A line no rule claims (including an empty line) renders
/// as a paragraph, so every line yields exactly one block.
#[derive(Debug, Clone, Copy)]
pub struct BlockChain<'r> {
    rules: &'r [MatchRule],
    tags: &'r TagRegistry,
}

impl<'r> BlockChain<'r> {
    /// Chain over the standard [`RULES`].
    pub fn new(tags: &'r TagRegistry) -> Self {
        Self::with_rules(&RULES, tags)
    }

    pub fn with_rules(rules: &'r [MatchRule], tags: &'r TagRegistry) -> Self {
        Self { rules, tags }
    }

    /// Finds the kind for `line` and strips the matched prefix.
    fn select(&self, line: &mut LineRecord<'_>) -> BlockKind {
        if line.is_empty() {
            return BlockKind::Paragraph;
        }
        match self.rules.iter().find(|rule| rule.matches(line.text())) {
            Some(rule) => {
                line.strip(rule.prefix.len());
                rule.kind
            }
            None => BlockKind::Paragraph,
        }
    }

    /// Returns the block kind of `text` and the content left after its prefix.
    pub fn classify<'t>(&self, text: &'t str) -> (BlockKind, &'t str) {
        let mut line = LineRecord::new(0, text);
        let kind = self.select(&mut line);
        (kind, line.text())
    }

    /// Renders one line as a single fragment appended to `doc`.
    pub fn render(&self, mut line: LineRecord<'_>, doc: &mut Document) -> BlockKind {
        let kind = self.select(&mut line);
        log::trace!("line {}: {kind:?}", line.index);

        let body = apply_emphasis(line.text());
        doc.add(format!(
            "{}{body}{}",
            self.tags.opening_tag(kind),
            self.tags.closing_tag(kind)
        ));
        kind
    }
}
