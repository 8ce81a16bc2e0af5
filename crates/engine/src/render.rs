use crate::matcher::MatchSet;

pub const DEFAULT_HIGHLIGHT_TAG: &str = "mark";

/// Marker tags are restricted to ASCII alphanumerics so the marker itself can
/// never carry markup.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text);
    escaped
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRenderer {
    open: String,
    close: String,
}

impl Default for HighlightRenderer {
    fn default() -> Self {
        Self::from_valid_tag(DEFAULT_HIGHLIGHT_TAG)
    }
}

impl HighlightRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `<tag>`/`</tag>` as the marker. Returns `None` for tags rejected by
    /// [`is_valid_tag`].
    pub fn with_tag(tag: &str) -> Option<Self> {
        is_valid_tag(tag).then(|| Self::from_valid_tag(tag))
    }

    fn from_valid_tag(tag: &str) -> Self {
        Self {
            open: format!("<{tag}>"),
            close: format!("</{tag}>"),
        }
    }

    pub fn open_marker(&self) -> &str {
        &self.open
    }

    pub fn close_marker(&self) -> &str {
        &self.close
    }

    /// Renders `subject` with every match wrapped in the marker. Text between
    /// and inside matches is escaped segment by segment.
    ///
    /// `matches` must come from `subject`; a record whose span does not fit the
    /// subject ends highlighting and the rest is emitted as plain escaped text.
    pub fn render(&self, subject: &str, matches: &MatchSet) -> String {
        let marker_len = self.open.len() + self.close.len();
        let mut out = String::with_capacity(subject.len() + matches.count() * marker_len);
        let mut cursor = 0;

        for record in matches {
            let (Some(before), Some(matched)) = (
                subject.get(cursor..record.start),
                subject.get(record.start..record.end),
            ) else {
                log::warn!(
                    "match {}..{} does not fit subject of {} bytes",
                    record.start,
                    record.end,
                    subject.len()
                );
                break;
            };

            push_escaped(&mut out, before);
            out.push_str(&self.open);
            push_escaped(&mut out, matched);
            out.push_str(&self.close);
            cursor = record.end;
        }

        push_escaped(&mut out, &subject[cursor..]);
        out
    }
}
