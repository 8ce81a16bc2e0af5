use std::fmt::Write as _;

use regex_tester_engine::{RenderedResult, escape_html};
use serde::Serialize;

use crate::config::OutputFormat;

/// One match as presented to the user, with character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    #[serde(rename = "match")]
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub groups: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matches: Vec<MatchView>,
    pub highlighted: String,
    pub error: Option<String>,
}

impl Report {
    pub fn from_result(subject: &str, result: &RenderedResult) -> Self {
        let matches = result
            .matches()
            .iter()
            .map(|m| {
                let (start, end) = m.char_span(subject);
                MatchView {
                    text: m.text.clone(),
                    start,
                    end,
                    groups: m.groups.clone(),
                }
            })
            .collect();

        Self {
            matches,
            highlighted: result.highlighted().to_string(),
            error: result.error().map(ToString::to_string),
        }
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            matches: Vec::new(),
            highlighted: String::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn format(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Html => Ok(self.to_html()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(error) = &self.error {
            let _ = writeln!(out, "Error: {}", error);
            return out;
        }

        match self.matches.len() {
            0 => out.push_str("No matches\n"),
            1 => out.push_str("1 match\n"),
            n => {
                let _ = writeln!(out, "{} matches", n);
            }
        }

        for (i, m) in self.matches.iter().enumerate() {
            let _ = writeln!(out, "  {}. {:?} at {}..{}", i + 1, m.text, m.start, m.end);
            for (group_index, group) in m.groups.iter().enumerate() {
                match group {
                    Some(text) => {
                        let _ = writeln!(out, "     group {}: {:?}", group_index + 1, text);
                    }
                    None => {
                        let _ = writeln!(out, "     group {}: (no match)", group_index + 1);
                    }
                }
            }
        }

        out.push('\n');
        out.push_str(&self.highlighted);
        out.push('\n');
        out
    }

    fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(error) = &self.error {
            let _ = writeln!(out, "<p class=\"error\">{}</p>", escape_html(error));
            return out;
        }

        let _ = writeln!(out, "<pre class=\"highlighted\">{}</pre>", self.highlighted);
        if self.matches.is_empty() {
            out.push_str("<p>No matches found.</p>\n");
            return out;
        }

        out.push_str("<table class=\"matches\">\n");
        out.push_str("<tr><th>#</th><th>Match</th><th>Start</th><th>End</th><th>Groups</th></tr>\n");
        for (i, m) in self.matches.iter().enumerate() {
            let groups = m
                .groups
                .iter()
                .map(|g| g.as_deref().map_or_else(|| "None".to_string(), escape_html))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                escape_html(&m.text),
                m.start,
                m.end,
                groups
            );
        }
        out.push_str("</table>\n");
        out
    }
}
