//! The `project` module is the capture projector (C5): it turns a single regex match's named
//! captures into an [`AddressFields`], using a [`FieldTable`] to know which capture group feeds
//! which field.
//!
//! A [`Field`] can legitimately own more than one group in the same pattern (a leading PO box
//! suffixed `_a`, the street body's own `po_box`, and the `full_street`-only standalone `_b`
//! branch). When that happens the first group in table order that actually matched wins; the
//! alternatives are mutually exclusive by construction, so at most one of them is ever populated
//! for a given match.
use crate::address::AddressFields;
use crate::field::{Field, FieldTable};
use regex::Captures;

/// Reads every group in `table` out of `captures`, keeping the first non-empty value seen for
/// each [`Field`].
pub(crate) fn project(captures: &Captures, table: &FieldTable) -> AddressFields {
    let mut fields = AddressFields::default();
    for (group, field) in table {
        let Some(value) = captures.name(group).map(|m| m.as_str().to_string()) else {
            continue;
        };
        let slot = slot_mut(&mut fields, *field);
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    fields
}

fn slot_mut(fields: &mut AddressFields, field: Field) -> &mut Option<String> {
    match field {
        Field::StreetNumber => &mut fields.street_number,
        Field::PreDirection => &mut fields.pre_direction,
        Field::StreetName => &mut fields.street_name,
        Field::TypelessStreetName => &mut fields.typeless_street_name,
        Field::StreetType => &mut fields.street_type,
        Field::PostDirection => &mut fields.post_direction,
        Field::Occupancy => &mut fields.occupancy,
        Field::Floor => &mut fields.floor,
        Field::Building => &mut fields.building,
        Field::MailStop => &mut fields.mail_stop,
        Field::PoBox => &mut fields.po_box,
        Field::City => &mut fields.city,
        Field::Region1 => &mut fields.region1,
        Field::Region2 => &mut fields.region2,
        Field::PostalCode => &mut fields.postal_code,
        Field::Country => &mut fields.country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn first_non_empty_wins_across_suffixed_duplicates() {
        let re = Regex::new(r"(?:(?P<po_box_a>PO Box \d+)|(?P<po_box>nope))?").unwrap();
        let table: FieldTable = vec![
            ("po_box_a".to_string(), Field::PoBox),
            ("po_box".to_string(), Field::PoBox),
        ];
        let caps = re.captures("PO Box 42").unwrap();
        let fields = project(&caps, &table);
        assert_eq!(fields.po_box.as_deref(), Some("PO Box 42"));
    }
}
