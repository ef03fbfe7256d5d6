//! Whitespace normalization for scraped text.

use regex::Regex;
use std::sync::OnceLock;

fn ws_re() -> &'static Regex {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"))
}

/// Collapse scraped text: newlines are dropped outright, then every
/// remaining run of whitespace becomes a single space.
///
/// Edges are not trimmed. A leading run collapses to one space, not zero;
/// the timestamp token rule counts on that.
pub fn normalize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let s = s.replace('\n', "");
    ws_re().replace_all(&s, " ").into_owned()
}
