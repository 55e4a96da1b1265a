//! End-to-end scenarios: feed raw, unnormalized text straight into the public façade and check
//! the resulting [`Address`] fields, the way a caller actually uses this crate.
use addrgrammar::{Country, parse, parse_single_street};

#[test]
fn parses_a_directional_street_with_abbreviated_region_and_zip() {
    let found = parse("2590 Elm Road NE - Warren, OH 44483, US", Country::Us);
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(addr.country_id, "US");
    assert_eq!(addr.street_number.as_deref(), Some("2590"));
    assert_eq!(addr.street_name.as_deref(), Some("Elm"));
    assert_eq!(addr.street_type.as_deref(), Some("Road"));
    assert_eq!(addr.post_direction.as_deref(), Some("NE"));
    assert_eq!(addr.city.as_deref(), Some("Warren"));
    assert_eq!(addr.region1.as_deref(), Some("OH"));
    assert_eq!(addr.postal_code.as_deref(), Some("44483"));
    assert_eq!(addr.country.as_deref(), Some("US"));
}

#[test]
fn parses_a_multi_word_street_name_across_a_newline() {
    let found = parse("899 HEATHROW PARK LN\nLAKE MARY,FL 32746", Country::Us);
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(addr.street_number.as_deref(), Some("899"));
    assert_eq!(addr.street_name.as_deref(), Some("HEATHROW PARK"));
    assert_eq!(addr.street_type.as_deref(), Some("LN"));
    assert_eq!(addr.city.as_deref(), Some("LAKE MARY"));
    assert_eq!(addr.region1.as_deref(), Some("FL"));
    assert_eq!(addr.postal_code.as_deref(), Some("32746"));
}

#[test]
fn parses_a_suite_occupancy_between_street_and_city() {
    let found = parse(
        "225 E. John Carpenter Freeway, Suite 1500 Irving, Texas 75062",
        Country::Us,
    );
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(addr.street_number.as_deref(), Some("225"));
    assert_eq!(addr.pre_direction.as_deref(), Some("E."));
    assert_eq!(addr.street_name.as_deref(), Some("John Carpenter"));
    assert_eq!(addr.street_type.as_deref(), Some("Freeway"));
    assert_eq!(addr.occupancy.as_deref(), Some("Suite 1500"));
    assert_eq!(addr.city.as_deref(), Some("Irving"));
    assert_eq!(addr.region1.as_deref(), Some("Texas"));
    assert_eq!(addr.postal_code.as_deref(), Some("75062"));
}

#[test]
fn parses_a_po_box_trailing_the_street() {
    let found = parse(
        "354 Eisenhower Parkway, P.O. Box 472, Livingston, NJ 07039",
        Country::Us,
    );
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(addr.po_box.as_deref(), Some("P.O. Box 472"));
    assert_eq!(addr.city.as_deref(), Some("Livingston"));
    assert_eq!(addr.region1.as_deref(), Some("NJ"));
}

#[test]
fn parses_a_canadian_address_with_compact_postal_code() {
    let found = parse("1111, 101-3RD STR SW, CALGARY, ALBERTA, T2P3E6", Country::Ca);
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(addr.country_id, "CA");
    assert_eq!(addr.street_number.as_deref(), Some("1111"));
    assert_eq!(addr.street_name.as_deref(), Some("101-3RD"));
    assert_eq!(addr.street_type.as_deref(), Some("STR"));
    assert_eq!(addr.post_direction.as_deref(), Some("SW"));
    assert_eq!(addr.city.as_deref(), Some("CALGARY"));
    assert_eq!(addr.region1.as_deref(), Some("ALBERTA"));
    assert_eq!(addr.postal_code.as_deref(), Some("T2P3E6"));
}

#[test]
fn finds_no_address_in_address_free_text() {
    assert!(parse("Please call us back at your earliest convenience.", Country::Us).is_empty());
}

#[test]
fn finds_multiple_addresses_in_one_text() {
    let found = parse(
        "Bill to 123 Main St, Springfield, IL 62701 and ship to 456 Oak Ave, Madison, WI 53703",
        Country::Us,
    );
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].city.as_deref(), Some("Springfield"));
    assert_eq!(found[1].city.as_deref(), Some("Madison"));
}

#[test]
fn parse_single_street_accepts_a_bare_street_with_no_city_or_region() {
    let found = parse_single_street("123 Main Street", Country::Us);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_street.as_deref(), Some("123 Main Street"));
    assert_eq!(found[0].full_address, found[0].full_street.clone().unwrap());
}

#[test]
fn parse_single_street_accepts_a_standalone_po_box() {
    let found = parse_single_street("P.O. BOX 99999", Country::Us);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].po_box.as_deref(), Some("P.O. BOX 99999"));
}

#[test]
fn parse_single_street_ignores_trailing_city_and_region() {
    let found = parse_single_street("123 Main Street, Springfield, IL", Country::Us);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].full_street.as_deref(), Some("123 Main Street"));
}

#[test]
fn parse_single_street_accepts_a_po_box_leading_a_bare_street() {
    let found = parse_single_street("P.O. BOX 41256, One Velvet Drive", Country::Us);
    assert_eq!(found.len(), 1);
    let addr = &found[0];
    assert_eq!(
        addr.full_street.as_deref(),
        Some("P.O. BOX 41256, One Velvet Drive")
    );
    assert_eq!(addr.po_box.as_deref(), Some("P.O. BOX 41256"));
    assert_eq!(addr.street_number.as_deref(), Some("One"));
    assert_eq!(addr.street_name.as_deref(), Some("Velvet"));
    assert_eq!(addr.street_type.as_deref(), Some("Drive"));
}
