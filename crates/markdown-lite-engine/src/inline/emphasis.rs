/// An inline emphasis kind with its owned delimiter and tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `**text**` → `<strong>text</strong>`
    Strong,
    /// `__text__` → `<i>text</i>`
    Italic,
}

impl Emphasis {
    /// Passes in the order they are applied.
    pub const PASSES: [Emphasis; 2] = [Emphasis::Strong, Emphasis::Italic];

    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Strong => "**",
            Emphasis::Italic => "__",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Strong => "strong",
            Emphasis::Italic => "i",
        }
    }
}

/// Applies every emphasis pass to `text`, strong before italic.
pub fn apply_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    for emphasis in Emphasis::PASSES {
        out = replace_spans(&out, emphasis);
    }
    out
}

/// Runs a single pass, wrapping each delimited span in the emphasis tag.
///
/// Spans are matched left to right and closed at the nearest following
/// delimiter. Once an opener has no closer, the rest of the text is copied
/// unchanged.
pub fn replace_spans(text: &str, emphasis: Emphasis) -> String {
    let delim = emphasis.delimiter();
    let tag = emphasis.tag();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(delim) {
        let inner_start = open + delim.len();
        let Some(close) = rest[inner_start..].find(delim) else {
            break;
        };
        let inner_end = inner_start + close;

        out.push_str(&rest[..open]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&rest[inner_start..inner_end]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');

        rest = &rest[inner_end + delim.len()..];
    }

    out.push_str(rest);
    out
}
