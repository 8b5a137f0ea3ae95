/// The current text of one input line as it moves through the chain.
///
/// Matching a rule strips that rule's prefix; the record is consumed when the
/// line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// Zero-based position of the line in the input.
    pub index: usize,
    text: &'a str,
}

impl<'a> LineRecord<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Drops the first `len` bytes of the text.
    ///
    /// Callers pass the length of a prefix they have already matched, so the
    /// cut always lands on a char boundary.
    pub fn strip(&mut self, len: usize) {
        self.text = &self.text[len..];
    }
}
