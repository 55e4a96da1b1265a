//! The `address` module defines [`Address`], the structured record produced by [`crate::parse`]
//! and [`crate::parse_single_street`].
use serde::{Deserialize, Serialize};

/// Trailing punctuation stripped from every free-text field on construction, in addition to
/// whitespace.  Grammar separators (a trailing comma before a field that did not ultimately
/// match) should never leak into a projected value.
const TRIM_PUNCTUATION: [char; 2] = [',', ';'];

/// A single postal address extracted from free-form text.
///
/// Every `Option<String>` field is trimmed of leading/trailing whitespace and of the
/// [`TRIM_PUNCTUATION`] stripset at construction time (see [`Address::new`]).  Once built, an
/// `Address` is immutable; equality and [`std::fmt::Display`] both follow directly from the
/// field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// ISO-like tag of the country whose grammar produced this address (`"US"`, `"CA"`).
    pub country_id: String,
    /// Byte offset of the match start in the normalized input.
    pub match_start: usize,
    /// Byte offset of the match end in the normalized input.
    pub match_end: usize,
    /// The canonical reassembled address string; equal to the matched span of the normalized
    /// input.
    pub full_address: String,
    /// The canonical reassembled street portion.  Equals `full_address` for results returned by
    /// [`crate::parse_single_street`].
    pub full_street: Option<String>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub typeless_street_name: Option<String>,
    pub street_type: Option<String>,
    pub post_direction: Option<String>,
    pub pre_direction: Option<String>,
    pub occupancy: Option<String>,
    pub floor: Option<String>,
    pub building: Option<String>,
    pub mail_stop: Option<String>,
    pub po_box: Option<String>,
    pub city: Option<String>,
    pub region1: Option<String>,
    pub region2: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Trims a raw projected field value, or discards it entirely if nothing remains.
fn clean(raw: Option<String>) -> Option<String> {
    raw.and_then(|value| {
        let trimmed = value.trim().trim_end_matches(&TRIM_PUNCTUATION[..]).trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Address {
    /// Builds an `Address` from projected fields, trimming each free-text value.  `full_street`
    /// is `None` for a [`crate::parse`] match that only covers a PO box with no street body;
    /// callers that need a street-only result fall back to `full_address` in that case, matching
    /// `SPEC_FULL.md` §7's `parse_single_street` contract.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country_id: impl Into<String>,
        match_start: usize,
        match_end: usize,
        full_address: impl Into<String>,
        full_street: Option<String>,
        fields: AddressFields,
    ) -> Self {
        Self {
            country_id: country_id.into(),
            match_start,
            match_end,
            full_address: full_address.into(),
            full_street: clean(full_street),
            street_number: clean(fields.street_number),
            street_name: clean(fields.street_name),
            typeless_street_name: clean(fields.typeless_street_name),
            street_type: clean(fields.street_type),
            post_direction: clean(fields.post_direction),
            pre_direction: clean(fields.pre_direction),
            occupancy: clean(fields.occupancy),
            floor: clean(fields.floor),
            building: clean(fields.building),
            mail_stop: clean(fields.mail_stop),
            po_box: clean(fields.po_box),
            city: clean(fields.city),
            region1: clean(fields.region1),
            region2: clean(fields.region2),
            postal_code: clean(fields.postal_code),
            country: clean(fields.country),
        }
    }
}

/// The free-text component fields of an [`Address`], gathered before trimming.  Kept as a
/// separate struct so [`crate::project`] can build it incrementally from a capture table without
/// a seventeen-argument constructor call.
#[derive(Debug, Clone, Default)]
pub struct AddressFields {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub typeless_street_name: Option<String>,
    pub street_type: Option<String>,
    pub post_direction: Option<String>,
    pub pre_direction: Option<String>,
    pub occupancy: Option<String>,
    pub floor: Option<String>,
    pub building: Option<String>,
    pub mail_stop: Option<String>,
    pub po_box: Option<String>,
    pub city: Option<String>,
    pub region1: Option<String>,
    pub region2: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_and_trailing_punctuation() {
        let mut fields = AddressFields::default();
        fields.region1 = Some("USA ".to_string());
        fields.city = Some("CityVille, ".to_string());
        let addr = Address::new(
            "US",
            5,
            10,
            "Street 1b CityVille USA",
            Some("Street 1b".to_string()),
            fields,
        );
        assert_eq!(addr.region1.as_deref(), Some("USA"));
        assert_eq!(addr.city.as_deref(), Some("CityVille"));
        assert_eq!(addr.full_street.as_deref(), Some("Street 1b"));
        assert_eq!(addr.to_string(), "Street 1b CityVille USA");
    }

    #[test]
    fn blank_after_trim_becomes_none() {
        let mut fields = AddressFields::default();
        fields.occupancy = Some(" , ".to_string());
        let addr = Address::new("US", 0, 0, "", None, fields);
        assert_eq!(addr.occupancy, None);
    }
}
