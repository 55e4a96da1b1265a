//! The `country` module is the country registry (C7): the [`Country`] tag, and the [`Parser`]
//! that maps a tag onto its lazily-compiled grammar.
use crate::address::Address;
use crate::driver;
use crate::error::AddressError;
use crate::grammar::{CountryGrammar, ca, us};

/// A country this crate knows a grammar for.
///
/// Deliberately has no [`Default`]: a missing country is a compile-time error for every typed
/// caller, not a runtime one. [`AddressError::MissingCountry`] exists only for the untyped
/// conversion path (`Option<Country>` -> `Country`), not for this enum itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum Country {
    #[display("US")]
    Us,
    #[display("CA")]
    Ca,
}

impl Country {
    fn grammar(&self) -> &'static CountryGrammar {
        match self {
            Country::Us => us::grammar(),
            Country::Ca => ca::grammar(),
        }
    }

    /// The tag recorded on every [`Address`] this country's [`Parser`] produces.
    pub fn id(&self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Ca => "CA",
        }
    }
}

impl TryFrom<&str> for Country {
    type Error = AddressError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "US" | "USA" | "U.S." | "U.S.A." | "UNITED STATES" | "UNITED STATES OF AMERICA" => {
                Ok(Country::Us)
            }
            "CA" | "CAN" | "CANADA" => Ok(Country::Ca),
            other => Err(AddressError::UnknownCountry(other.to_string())),
        }
    }
}

impl TryFrom<Option<Country>> for Country {
    type Error = AddressError;

    /// The untyped conversion path `SPEC_FULL.md` §8.1 keeps [`AddressError::MissingCountry`]
    /// alive for: a caller holding an `Option<Country>` (say, from deserialized input) asks to
    /// convert it into the definite `Country` a [`Parser`] needs.
    fn try_from(maybe: Option<Country>) -> Result<Self, Self::Error> {
        maybe.ok_or(AddressError::MissingCountry)
    }
}

/// A parser bound to one [`Country`]. Cheap to construct: the grammar itself is compiled once
/// per process, the first time either `parse` method runs for that country, and cached from
/// then on (see [`crate::grammar::cached`]).
#[derive(Copy, Clone, Debug)]
pub struct Parser {
    country: Country,
}

impl Parser {
    /// Builds a parser for `country`. Never fails: the grammar for a known [`Country`] always
    /// compiles, so the only way to fail to get a `Parser` is to fail to get a `Country` first,
    /// via [`TryFrom<&str>`].
    pub fn get(country: Country) -> Self {
        Self { country }
    }

    /// The country this parser matches against.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Finds every address in `text`, in left-to-right, non-overlapping order.
    pub fn parse(&self, text: &str) -> Vec<Address> {
        let normalized = crate::normalize::normalize(text);
        driver::match_addresses(&normalized, self.country.id(), self.country.grammar())
    }

    /// Finds every street (no city/region/postal code required) in `text`, in left-to-right,
    /// non-overlapping order.
    pub fn parse_single_street(&self, text: &str) -> Vec<Address> {
        let normalized = crate::normalize::normalize(text);
        driver::match_streets(&normalized, self.country.id(), self.country.grammar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_country_has_a_distinct_id() {
        let ids: Vec<&str> = Country::iter().map(|c| c.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids.len(), sorted.len(), "duplicate Country::id() in {ids:?}");
    }

    #[test]
    fn recognizes_aliases() {
        assert_eq!(Country::try_from("us").unwrap(), Country::Us);
        assert_eq!(Country::try_from("U.S.A.").unwrap(), Country::Us);
        assert_eq!(Country::try_from("Canada").unwrap(), Country::Ca);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = Country::try_from("Narnia").unwrap_err();
        assert!(matches!(err, AddressError::UnknownCountry(tag) if tag == "NARNIA"));
    }

    #[test]
    fn missing_country_conversion() {
        let err = Country::try_from(None).unwrap_err();
        assert!(matches!(err, AddressError::MissingCountry));
    }
}
