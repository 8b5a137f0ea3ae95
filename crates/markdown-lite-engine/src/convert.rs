use std::borrow::Cow;

use crate::blocks::{BlockChain, LineRecord};
use crate::document::Document;
use crate::tags::TagRegistry;

/// Converts markdown text to an HTML fragment, one block per line.
///
/// Every call builds its own chain and document, so one converter can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    tags: Cow<'static, TagRegistry>,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    /// Converter backed by the shared default registry.
    pub fn new() -> Self {
        Self {
            tags: Cow::Borrowed(TagRegistry::global()),
        }
    }

    pub fn with_registry(tags: TagRegistry) -> Self {
        Self {
            tags: Cow::Owned(tags),
        }
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.tags
    }

    /// Renders every line of `text` into a fresh [`Document`].
    ///
    /// Lines are split on `\n` only; a trailing `\r` stays in the content.
    pub fn convert(&self, text: &str) -> Document {
        let chain = BlockChain::new(&self.tags);
        let mut doc = Document::new();
        for (index, line) in text.split('\n').enumerate() {
            chain.render(LineRecord::new(index, line), &mut doc);
        }
        doc
    }

    pub fn to_html(&self, text: &str) -> String {
        let doc = self.convert(text);
        let html = doc.get();
        log::debug!("converted {} lines into {} bytes", doc.len(), html.len());
        html
    }
}

/// Converts `text` using the default tag names.
pub fn to_html(text: &str) -> String {
    MarkdownConverter::new().to_html(text)
}
