//! Canada-specific grammar vocabulary: province/territory names, the alphanumeric postal code,
//! and the recognized spellings of the country name.
use super::{CountryGrammar, Vocabulary};
use std::sync::OnceLock;

/// Canadian provinces and territories, by full name and by Canada Post abbreviation.
pub(crate) const REGION1: &[&str] = &[
    "Alberta", "AB", "British Columbia", "BC", "Manitoba", "MB", "New Brunswick", "NB",
    "Newfoundland and Labrador", "NL", "Nova Scotia", "NS", "Ontario", "ON",
    "Prince Edward Island", "PE", "Quebec", "Québec", "QC", "Saskatchewan", "SK",
    "Northwest Territories", "NT", "Nunavut", "NU", "Yukon", "YT",
];

/// Recognized spellings of the country name.
pub(crate) const COUNTRY_NAMES: &[&str] = &["Canada", "CA"];

/// `postal_code`: the Canadian alphanumeric form, `ANA NAN` with an optional single separating
/// space (`T2P 3E6`, `T2P3E6`).
pub(crate) fn postal_code() -> String {
    r"\b[A-Za-z]\d[A-Za-z][ \t]?\d[A-Za-z]\d\b".to_string()
}

fn vocabulary() -> Vocabulary {
    Vocabulary {
        country_id: "CA",
        region1: REGION1,
        postal_code,
        country_names: COUNTRY_NAMES,
    }
}

static GRAMMAR: OnceLock<CountryGrammar> = OnceLock::new();

/// The compiled CA grammar, built on first use and cached for the life of the process.
pub(crate) fn grammar() -> &'static CountryGrammar {
    super::cached(&GRAMMAR, &vocabulary())
}
