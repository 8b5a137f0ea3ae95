use std::fmt;
use std::str::FromStr;

/// The semantic category of one rendered line.
///
/// The set is closed: every line of input renders as exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    /// Default block when no prefix rule matches.
    Paragraph,
    Header1,
    Header2,
    Header3,
    Header4,
    Header5,
    Header6,
    /// A single `- ` list item (no enclosing list container is ever emitted).
    Bullet,
    /// A `---` rule.
    HorizontalRule,
}

impl BlockKind {
    /// Every kind in chain priority order; the fallback comes last.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Header1,
        BlockKind::Header2,
        BlockKind::Header3,
        BlockKind::Header4,
        BlockKind::Header5,
        BlockKind::Header6,
        BlockKind::Bullet,
        BlockKind::HorizontalRule,
        BlockKind::Paragraph,
    ];

    /// Returns the header kind for `level` (1..=6).
    pub fn header(level: u8) -> Option<BlockKind> {
        match level {
            1 => Some(BlockKind::Header1),
            2 => Some(BlockKind::Header2),
            3 => Some(BlockKind::Header3),
            4 => Some(BlockKind::Header4),
            5 => Some(BlockKind::Header5),
            6 => Some(BlockKind::Header6),
            _ => None,
        }
    }

    /// Stable snake_case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Header1 => "header1",
            BlockKind::Header2 => "header2",
            BlockKind::Header3 => "header3",
            BlockKind::Header4 => "header4",
            BlockKind::Header5 => "header5",
            BlockKind::Header6 => "header6",
            BlockKind::Bullet => "bullet",
            BlockKind::HorizontalRule => "horizontal_rule",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block kind '{0}'")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

/// Pairs a literal line prefix with the block kind it opens.
///
/// A rule's position in the chain decides its priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub prefix: &'static str,
    pub kind: BlockKind,
}

impl MatchRule {
    pub const fn new(prefix: &'static str, kind: BlockKind) -> Self {
        Self { prefix, kind }
    }

    /// Exact, case-sensitive prefix test with no trimming.
    pub fn matches(&self, text: &str) -> bool {
        text.starts_with(self.prefix)
    }
}
