//! The `driver` module is the match driver (C4): it runs a compiled grammar's pattern over
//! normalized text in non-overlapping left-to-right order and turns each match into an
//! [`Address`] via [`crate::project`].
use crate::address::Address;
use crate::grammar::{self, CountryGrammar, STREET_BODY_GROUP};
use tracing::trace;

/// True if `start` falls inside a span [`grammar::phone_number_regex`] matches in `text` — a
/// candidate street/address match starting there is a misread phone number, not an address.
fn starts_inside_phone_number(text: &str, start: usize) -> bool {
    grammar::phone_number_regex()
        .find_iter(text)
        .any(|m| start >= m.start() && start < m.end())
}

/// Runs `grammar.full_address` over `text`, yielding one [`Address`] per non-overlapping match.
/// `full_street` on each result is the span of the street body within the match, absent only if
/// the grammar ever matches a bare leading PO box with no street body following it. Matches that
/// start inside a phone number (per `SPEC_FULL.md`'s phone-number exclusion) are discarded.
#[tracing::instrument(skip(text, grammar))]
pub(crate) fn match_addresses(text: &str, country_id: &'static str, grammar: &CountryGrammar) -> Vec<Address> {
    let mut out = Vec::new();
    for captures in grammar.full_address.captures_iter(text) {
        let whole = captures.get(0).expect("capture 0 always matches");
        if starts_inside_phone_number(text, whole.start()) {
            trace!(start = whole.start(), "discarding full_address match inside phone number");
            continue;
        }
        trace!(start = whole.start(), end = whole.end(), "matched full_address");
        let fields = crate::project::project(&captures, &grammar.full_address_table);
        let full_street = captures
            .name(STREET_BODY_GROUP)
            .map(|m| m.as_str().to_string());
        out.push(Address::new(
            country_id,
            whole.start(),
            whole.end(),
            whole.as_str(),
            full_street,
            fields,
        ));
    }
    out
}

/// Runs `grammar.full_street` over `text`, yielding one [`Address`] per non-overlapping match.
/// Every result's `full_street` mirrors `full_address`, since the whole match *is* the street
/// (or the standalone PO box substituting for one). Matches that start inside a phone number are
/// discarded, as in [`match_addresses`].
#[tracing::instrument(skip(text, grammar))]
pub(crate) fn match_streets(text: &str, country_id: &'static str, grammar: &CountryGrammar) -> Vec<Address> {
    let mut out = Vec::new();
    for captures in grammar.full_street.captures_iter(text) {
        let whole = captures.get(0).expect("capture 0 always matches");
        if starts_inside_phone_number(text, whole.start()) {
            trace!(start = whole.start(), "discarding full_street match inside phone number");
            continue;
        }
        trace!(start = whole.start(), end = whole.end(), "matched full_street");
        let fields = crate::project::project(&captures, &grammar.full_street_table);
        out.push(Address::new(
            country_id,
            whole.start(),
            whole.end(),
            whole.as_str(),
            Some(whole.as_str().to_string()),
            fields,
        ));
    }
    out
}
