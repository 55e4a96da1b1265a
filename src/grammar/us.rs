//! US-specific grammar vocabulary: state/territory names, the 5 or 5+4 digit ZIP code, and the
//! handful of recognized spellings of the country name itself.
use super::{CountryGrammar, Vocabulary};
use std::sync::OnceLock;

/// US states, the District of Columbia, and the inhabited territories, by full name and by
/// abbreviation. `"D.C."` and `"N.Y."` are listed as their own dotted literals rather than a
/// generic "abbreviation + optional dot" rule, which is what makes `"NJ."` a reject: a bare
/// two-letter code never carries a trailing dot on its own.
pub(crate) const REGION1: &[&str] = &[
    "Alabama", "AL", "Alaska", "AK", "Arizona", "AZ", "Arkansas", "AR", "California", "CA",
    "Colorado", "CO", "Connecticut", "CT", "Delaware", "DE", "Florida", "FL", "Georgia", "GA",
    "Hawaii", "HI", "Idaho", "ID", "Illinois", "IL", "Indiana", "IN", "Iowa", "IA", "Kansas",
    "KS", "Kentucky", "KY", "Louisiana", "LA", "Maine", "ME", "Maryland", "MD", "Massachusetts",
    "MA", "Michigan", "MI", "MICH", "Minnesota", "MN", "Mississippi", "MS", "Missouri", "MO",
    "Montana", "MT", "Nebraska", "NE", "Nevada", "NV", "New Hampshire", "NH", "New Jersey", "NJ",
    "New Mexico", "NM", "New York", "NY", "N.Y.", "North Carolina", "NC", "North Dakota", "ND",
    "Ohio", "OH", "Oklahoma", "OK", "Oregon", "OR", "Pennsylvania", "PA", "Rhode Island", "RI",
    "South Carolina", "SC", "South Dakota", "SD", "Tennessee", "TN", "Texas", "TX", "Utah", "UT",
    "Vermont", "VT", "Virginia", "VA", "Washington", "WA", "West Virginia", "WV", "Wisconsin",
    "WI", "Wyoming", "WY", "District of Columbia", "DC", "D.C.", "Puerto Rico", "PR", "Guam",
    "GU", "American Samoa", "AS", "U.S. Virgin Islands", "VI", "Northern Mariana Islands", "MP",
];

/// Recognized spellings of the country name, for the trailing `country` field.
pub(crate) const COUNTRY_NAMES: &[&str] = &[
    "United States of America",
    "United States",
    "USA",
    "U.S.A.",
    "U.S.",
    "US",
];

/// `postal_code` (ZIP): 5 digits, optionally followed by a hyphen and exactly 4 more. The
/// trailing `\b` is what rejects both `4567` (too short to anchor the next boundary at 5) and
/// `750621` (a pure 6-digit run can never end a 5-digit capture on a word boundary).
pub(crate) fn postal_code() -> String {
    r"\b\d{5}(?:-\d{4})?\b".to_string()
}

fn vocabulary() -> Vocabulary {
    Vocabulary {
        country_id: "US",
        region1: REGION1,
        postal_code,
        country_names: COUNTRY_NAMES,
    }
}

static GRAMMAR: OnceLock<CountryGrammar> = OnceLock::new();

/// The compiled US grammar, built on first use and cached for the life of the process.
pub(crate) fn grammar() -> &'static CountryGrammar {
    super::cached(&GRAMMAR, &vocabulary())
}
