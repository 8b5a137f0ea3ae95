/// Append-only accumulator for emitted HTML fragments.
///
/// One instance belongs to one conversion call.
#[derive(Debug, Default, Clone)]
pub struct Document {
    fragments: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fragment.
    pub fn add(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends several fragments in iteration order.
    pub fn add_all<I, S>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragments.extend(fragments.into_iter().map(Into::into));
    }

    /// Number of fragments appended so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    /// Concatenation of every fragment in insertion order.
    pub fn get(&self) -> String {
        self.fragments.concat()
    }
}
