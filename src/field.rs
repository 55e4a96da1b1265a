//! The `field` module defines the closed set of semantic address fields a composed pattern can
//! capture, and the table type the [`crate::grammar`] composer uses to project a raw named
//! capture back onto an [`crate::Address`].
//!
//! This is the statically-typed substitute for the dynamic capture-group-name-to-field mapping
//! described in `SPEC_FULL.md` §3: instead of trusting a regex group's name at projection time,
//! the composer records `(group name in the compiled pattern, Field)` pairs as it builds the
//! pattern, and the projector looks values up by that table.

/// One semantic slot of an [`crate::Address`] that a grammar token can populate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum Field {
    StreetNumber,
    PreDirection,
    StreetName,
    TypelessStreetName,
    StreetType,
    PostDirection,
    Occupancy,
    Floor,
    Building,
    MailStop,
    PoBox,
    City,
    Region1,
    Region2,
    PostalCode,
    Country,
}

impl Field {
    /// The base name used as a regex capture-group identifier before any duplicate-name suffix
    /// is appended (see [`crate::grammar::suffixed`]).
    pub fn group_base(&self) -> &'static str {
        match self {
            Field::StreetNumber => "street_number",
            Field::PreDirection => "pre_direction",
            Field::StreetName => "street_name",
            Field::TypelessStreetName => "typeless_street_name",
            Field::StreetType => "street_type",
            Field::PostDirection => "post_direction",
            Field::Occupancy => "occupancy",
            Field::Floor => "floor",
            Field::Building => "building",
            Field::MailStop => "mail_stop",
            Field::PoBox => "po_box",
            Field::City => "city",
            Field::Region1 => "region1",
            Field::Region2 => "region2",
            Field::PostalCode => "postal_code",
            Field::Country => "country",
        }
    }
}

/// Maps every capture-group name actually present in a compiled pattern (including suffixed
/// duplicates like `street_name_a`) back to the [`Field`] it belongs to.
pub type FieldTable = Vec<(String, Field)>;
