/// ATX-style heading marker type.
///
/// A heading is an exact run of `#` followed by one space. Because the space
/// is part of every prefix, no heading prefix is a prefix of another.
pub struct Heading;

impl Heading {
    /// Line prefixes indexed by `level - 1`.
    pub const PREFIXES: [&'static str; 6] = ["# ", "## ", "### ", "#### ", "##### ", "###### "];
}
