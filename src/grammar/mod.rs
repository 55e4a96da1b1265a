//! The `grammar` module is the token library (C1) and pattern composer (C2): it builds the
//! regex source for `full_street` and `full_address` out of small, independently testable
//! fragments, and tracks which capture-group name belongs to which [`crate::Field`] as it goes.
//!
//! Individual fragments are deliberately left un-anchored and un-grouped; composition decides
//! where a fragment gets wrapped in a named group and what that group is called. A fragment is
//! wrapped in `(?i:...)` wherever the grammar wants case folding (numerals, directions, keyword
//! tokens); `street_name` and `city` are left case-sensitive, since their shape -- each word
//! starts with an uppercase letter -- is itself part of what makes them distinguishable from
//! surrounding prose (see `SPEC_FULL.md` §3.1).
pub mod ca;
pub mod us;

use crate::field::{Field, FieldTable};
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Wraps `body` so it folds case only within this fragment.
fn ci(body: &str) -> String {
    format!("(?i:{body})")
}

/// Registers a named capture group for `field` under `name`, pushing the mapping into `table`.
fn capture(field: Field, name: &str, body: &str, table: &mut FieldTable) -> String {
    table.push((name.to_string(), field));
    format!("(?P<{name}>{body})")
}

/// Builds the group name `{base}_{suffix}` used when the same [`Field`] needs to be captured at
/// two positions of one compiled pattern (`regex` rejects a duplicate name outright, unlike
/// Python's branch-reset groups -- see `SPEC_FULL.md` §8.2).
fn suffixed(field: Field, suffix: &str) -> String {
    format!("{}_{suffix}", field.group_base())
}

/// Name of the group [`crate::driver`] reads to recover the street-body span out of a
/// `full_address` match, independent of any single [`Field`] -- it is not itself a semantic
/// field, just the substring `full_street` is set to.
pub(crate) const STREET_BODY_GROUP: &str = "street_body_span";

// ---------------------------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------------------------

const ONES: &str = "zero|one|two|three|four|five|six|seven|eight|nine";
const TEENS: &str = "ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen";
const TENS: &str = "twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety";

/// A spelled-out cardinal, e.g. "One Thousand And Fifty Nine", "Thirty seven", "Three hundred Ten".
fn spelled_number() -> String {
    let ones = format!("(?:{ONES})");
    let teens = format!("(?:{TEENS})");
    let tens = format!("(?:{TENS})");
    format!(
        "(?:(?:{ones}|{tens})\\s+thousand\\s+)?(?:(?:{ones})\\s+hundred\\s+)?(?:and\\s+)?(?:{tens}(?:\\s+{ones})?|{teens}|{ones})"
    )
}

/// A digit-form street number: 1-5 digits, optionally with a trailing letter or hyphenated
/// letter suffix (`155-B`, `5214F`). A bare run longer than 5 digits can never satisfy the
/// trailing `\b`, so `536233` and `111111` are rejected without a lookbehind.
fn digit_number() -> String {
    r"\d{1,5}(?:-?[A-Za-z])?\b".to_string()
}

/// The full `street_number` token, unwrapped (composition decides the group name/suffix).
pub(crate) fn street_number_core() -> String {
    ci(&format!("(?:{}|{})", digit_number(), spelled_number()))
}

// ---------------------------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------------------------

/// `pre_direction`/`post_direction` share one shape: a long form (`Northeast`), a compound short
/// form with a dot after each letter or none at all (`NE`, `N.E.`, never `NE.`), or a single
/// letter with an optional trailing dot (`N`, `N.`).
pub(crate) fn direction_core() -> String {
    let long = "North|South|East|West|Northeast|Northwest|Southeast|Southwest";
    let compound_dotted = r"N\.E\.|N\.W\.|S\.E\.|S\.W\.";
    let compound_plain = "NE|NW|SE|SW";
    let single = r"N\.?|S\.?|E\.?|W\.?";
    ci(&format!(
        "(?:{compound_dotted}|{compound_plain}|{long}|{single})"
    ))
}

// ---------------------------------------------------------------------------------------------
// Street types
// ---------------------------------------------------------------------------------------------

/// Base street-type vocabulary shared by US and CA grammars (USPS suffix list plus a handful of
/// Canadian-specific words). Sorted longest-first at use so multi-word entries like `"Cut Off"`
/// are preferred over any single-word prefix they might otherwise be truncated to.
pub(crate) const STREET_TYPES: &[&str] = &[
    "Street", "Str", "St", "Avenue", "Ave", "Boulevard", "Blvd", "Drive", "Dr", "Court", "Ct", "Place",
    "Pl", "Square", "Sq", "Loop", "Lane", "Ln", "Road", "Rd", "Parkway", "Pkwy", "Circle", "Cir",
    "Highway", "Hwy", "Freeway", "Fwy", "Way", "Terrace", "Ter", "Trail", "Trl", "Path", "Pike",
    "Alley", "Aly", "Bend", "Bluff", "Bluffs", "Bottom", "Branch", "Bridge", "Brook", "Brooks",
    "Burg", "Bypass", "Camp", "Canyon", "Cape", "Causeway", "Center", "Centers", "Circles",
    "Cliff", "Cliffs", "Club", "Common", "Commons", "Corner", "Corners", "Course", "Cove",
    "Coves", "Creek", "Crescent", "Crest", "Crossing", "Crossroad", "Curve", "Cut Off", "Dale",
    "Dam", "Divide", "Estate", "Estates", "Expressway", "Expy", "Extension", "Ext", "Fall",
    "Falls", "Ferry", "Field", "Fields", "Flat", "Flats", "Ford", "Forest", "Forge", "Fork",
    "Forks", "Fort", "Garden", "Gardens", "Gateway", "Glen", "Glens", "Green", "Greens", "Grove",
    "Groves", "Harbor", "Harbors", "Haven", "Heights", "Hill", "Hills", "Hollow", "Inlet",
    "Island", "Islands", "Isle", "Junction", "Junctions", "Key", "Keys", "Knoll", "Knolls",
    "Lake", "Lakes", "Land", "Landing", "Light", "Lights", "Loaf", "Lock", "Locks", "Lodge",
    "Manor", "Manors", "Meadow", "Meadows", "Mews", "Mill", "Mills", "Mission", "Motorway",
    "Mount", "Mountain", "Mountains", "Neck", "Orchard", "Oval", "Overpass", "Park", "Parks",
    "Pass", "Passage", "Pine", "Pines", "Plain", "Plains", "Plaza", "Point", "Points", "Port",
    "Ports", "Prairie", "Radial", "Ramp", "Ranch", "Rapid", "Rapids", "Rest", "Ridge", "Ridges",
    "River", "Row", "Rue", "Run", "Shoal", "Shoals", "Shore", "Shores", "Skyway", "Spring",
    "Springs", "Spur", "Station", "Stravenue", "Stream", "Summit", "Throughway", "Trace",
    "Track", "Trafficway", "Tunnel", "Turnpike", "Underpass", "Union", "Unions", "Valley",
    "Valleys", "Viaduct", "View", "Views", "Village", "Villages", "Ville", "Vista", "Walk",
    "Walks", "Wall", "Wells", "Bay", "Concession", "Line", "Chemin", "Rang",
];

fn street_type_vocabulary() -> String {
    let mut words: Vec<&str> = STREET_TYPES.to_vec();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    escaped.join("|")
}

/// `street_type`, including the extended interstate/route composite forms (`I-35`, `Interstate
/// 35`, `I-35 Service Road`, `Street route 5`) and a trailing parenthetical route annotation
/// (`LP. (Route A1)`).
pub(crate) fn street_type_core() -> String {
    let base = street_type_vocabulary();
    ci(&format!(
        r"(?:(?:{base})\.?(?:\s*\(Route\s+[A-Za-z0-9]+\s*\))?|I-\s?\d+(?:\s+Service\s+Road)?|Interstate\s+\d+|(?:Street\s+)?[Rr]oute\s+\d+)"
    ))
}

// ---------------------------------------------------------------------------------------------
// Word shapes: street names and cities
// ---------------------------------------------------------------------------------------------

/// One capitalized word, allowing an internal apostrophe/hyphen and an optional trailing dot
/// (`O'Brien`, `Mary-Anne`, `E.`). Left case-sensitive: only the first letter must be uppercase,
/// which is what keeps junk lowercase filler text out of `street_name`/`city` captures.
fn capitalized_word() -> &'static str {
    r"[A-Z][A-Za-z'-]*\.?"
}

/// A run of 1-5 capitalized words, used for city names.
fn capitalized_phrase(max_words: u8) -> String {
    let word = capitalized_word();
    format!(r"{word}(?:\s+{word}){{0,{}}}", max_words.saturating_sub(1))
}

/// A street-name word: a capitalized word, or a digit-led token (`101-3RD`, `5TH`) for numbered
/// street names that don't otherwise carry a capital letter.
fn street_name_word() -> String {
    format!(r"(?:{}|\d[0-9A-Za-z-]*\b)", capitalized_word())
}

/// A run of 1-N street-name words (see [`street_name_word`]).
fn street_name_phrase(max_words: u8) -> String {
    let word = street_name_word();
    format!(r"{word}(?:\s+{word}){{0,{}}}", max_words.saturating_sub(1))
}

/// `typeless_street_name`: a bare street number + name phrase with no recognizable street type,
/// guarded against false positives by capping length/word count (e.g. accept "El Camino Real",
/// reject the unbounded-looking "Camino Del Toro Loco").
fn typed_street_name_guarded() -> String {
    street_name_phrase(3)
}

// ---------------------------------------------------------------------------------------------
// Unit-ish tokens: occupancy, floor, building, mail stop
// ---------------------------------------------------------------------------------------------

/// An occupancy identifier: a mixed alnum/`#`/`&`/`-` run, optionally followed by one short
/// (1-3 char) space-separated suffix chunk that ends on a word boundary (`"130 S"`, `"14-15"`,
/// `"a&b"`). The trailing `\b` is what keeps this from swallowing a following city name like
/// `"Irving"` -- a 1-3 char prefix of "Irving" never lands on a word boundary.
fn occupancy_id() -> &'static str {
    r"[#&]?[A-Za-z0-9][A-Za-z0-9#&-]*(?:[ \t][A-Za-z0-9#&-]{1,3}\b)?"
}

/// `occupancy`: a keyword (`suite`, `ste`, `apt`, `unit`, `rm`, `bay`, `site`, `place`, `pl`,
/// `st`) optionally followed by an identifier, or a bare `#` keyword with a mandatory identifier.
/// A dotted keyword (`ST.`, `Rm.`) allows the identifier to follow with no further separator; an
/// undotted keyword requires at least one space, which is what rejects `suite900`/`Suite#2`.
pub(crate) fn occupancy_core() -> String {
    let words = "suite|ste|apt|unit|rm|bay|site|place|pl|st";
    let id = occupancy_id();
    ci(&format!(
        r"(?:(?:{words})\.[ \t]*(?:{id})?|(?:{words})[ \t]+(?:{id})?|#[ \t]*{id})"
    ))
}

/// `floor`: `floor <n>`, or an ordinal followed by `floor`/`fl` with an optional trailing
/// modifier word (`1st floor`, `16th. floor`, `1st fl Horiz`). The mandatory whitespace between
/// the ordinal (and its optional dot) and the keyword is what rejects `16th.floor`/`1stfloor`.
pub(crate) fn floor_core() -> String {
    ci(r"(?:floor[ \t]+\d+|\d+(?:st|nd|rd|th)\.?[ \t]+(?:floor|fl)\.?(?:[ \t]+Horiz(?:ontal)?)?)")
}

/// `building`: `building`/`bldg`, a mandatory space, then an optional identifier (roman numeral,
/// single letter, spelled number, or a 1-4 digit run). The mandatory space before the identifier
/// is what rejects `bldgm`/`bldg100 `; the 4-digit cap is what rejects `building 10000 `.
pub(crate) fn building_core() -> String {
    ci(r"(?:building|bldg)[ \t]+(?:[IVXLCDM]+|[A-Za-z]|zero|one|two|three|four|five|six|seven|eight|nine|ten|\d{1,4})?[ \t]*")
}

/// `mail_stop`: `MS`/`MS:`/`MSC` followed by an optional intervening word and a mandatory
/// identifier, either a run of up to 4 digits or a letters-then-digits code (`BCM204`).
pub(crate) fn mail_stop_core() -> String {
    ci(r"(?:MSC|MS):?[ \t]+(?:[A-Za-z]+[ \t]+)?(?:[A-Za-z]+\d+|\d{1,4})\b")
}

// ---------------------------------------------------------------------------------------------
// PO box
// ---------------------------------------------------------------------------------------------

/// `po_box`: a keyword (`PO Box`, `P.O. Box`, `PoBox`, `Post Office Box`, `PO Drawer`, bare
/// `Box`, or `PMB`) followed by a mandatory space and an identifier that may carry a leading `#`.
/// The mandatory separator is what rejects `po box108`/`PoBox53485`/`P.O. box119`.
pub(crate) fn po_box_core() -> String {
    let keyword = r"(?:(?:P\.?\s?O\.?\s*|POST\s+OFFICE\s+)?(?:BOX|DRAWER)|PMB)";
    ci(&format!(r"{keyword}[ \t]+#?[ \t]*[A-Za-z0-9]+"))
}

// ---------------------------------------------------------------------------------------------
// Postal codes (country-specific, defined in `us`/`ca`) and phone-number exclusion
// ---------------------------------------------------------------------------------------------

/// A bare phone number. `regex` has no lookaround, so this can't be wired in as an inline
/// negative assertion the way a PCRE-based grammar would; instead [`crate::driver`] pre-scans
/// text for spans matching this pattern and discards any `full_street`/`full_address` match that
/// starts inside one, so a trailing `555-1234` never gets swallowed into a street number.
pub(crate) fn phone_number_core() -> String {
    r"(?:\(\d{3}\)\s?|\d{3}[-.\s])\d{3}[-.\s]\d{4}".to_string()
}

static PHONE_NUMBER: OnceLock<Regex> = OnceLock::new();

/// The compiled phone-number exclusion pattern, built once and cached for the process lifetime.
pub(crate) fn phone_number_regex() -> &'static Regex {
    PHONE_NUMBER.get_or_init(|| Regex::new(&phone_number_core()).expect("phone_number_core is a fixed, tested pattern"))
}

// ---------------------------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------------------------

/// Country-specific vocabulary a [`CountryGrammar`] needs beyond the shared token library.
pub(crate) struct Vocabulary {
    pub country_id: &'static str,
    pub region1: &'static [&'static str],
    pub postal_code: fn() -> String,
    pub country_names: &'static [&'static str],
}

/// The compiled `full_street` and `full_address` patterns for one country, plus the field
/// tables a [`crate::project`] call needs to turn their captures into an [`crate::Address`].
pub struct CountryGrammar {
    pub full_street: Regex,
    pub full_street_table: FieldTable,
    pub full_address: Regex,
    pub full_address_table: FieldTable,
}

/// Separator between major sections of a composed pattern (street body, city, region, postal
/// code, country): a comma or a bare dash, each with optional surrounding space, or plain
/// whitespace alone -- including a bare newline, which normalization deliberately preserves so
/// it can serve as a section break the same way a comma does (`"NE - Warren"`, `"NE, Warren"`,
/// `"LN\nLAKE MARY"` all separate this way).
fn sep() -> &'static str {
    r"(?:[ \t\r\n]*[,-][ \t\r\n]*|[ \t\r\n]+)"
}

/// Looser separator used inside the street body, where a bare dash is usually part of a token
/// itself (`101-3RD`) rather than a section break: a comma with optional surrounding space, or
/// plain whitespace alone (`"1111, 101-3RD"`, `"1111 101-3RD"`).
fn sep_comma() -> &'static str {
    r"(?:[ \t\r\n]*,[ \t\r\n]*|[ \t\r\n]+)"
}

pub(crate) fn region_alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let escaped: Vec<String> = sorted
        .iter()
        .map(|w| w.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
        .collect();
    ci(&format!("(?:{})", escaped.join("|")))
}

/// Builds the repeated accessory section shared by `full_street` and the street body inside
/// `full_address`: zero to four of occupancy/floor/building/mail_stop/po_box, each comma- or
/// space-separated from its neighbor.
fn accessories(table: &mut FieldTable) -> String {
    let occupancy = capture(Field::Occupancy, Field::Occupancy.group_base(), &occupancy_core(), table);
    let floor = capture(Field::Floor, Field::Floor.group_base(), &floor_core(), table);
    let building = capture(Field::Building, Field::Building.group_base(), &building_core(), table);
    let mail_stop = capture(Field::MailStop, Field::MailStop.group_base(), &mail_stop_core(), table);
    let po_box = capture(Field::PoBox, Field::PoBox.group_base(), &po_box_core(), table);
    let sep = sep();
    format!(r"(?:{sep}(?:{occupancy}|{floor}|{building}|{mail_stop}|{po_box})){{0,4}}")
}

/// Builds the street-number-led body: `street_number [pre_direction] (typed street name |
/// typeless street name) [street_type] [post_direction] <accessories>`.
fn street_body(table: &mut FieldTable) -> String {
    let street_number = capture(
        Field::StreetNumber,
        Field::StreetNumber.group_base(),
        &street_number_core(),
        table,
    );
    let pre_direction = capture(
        Field::PreDirection,
        Field::PreDirection.group_base(),
        &direction_core(),
        table,
    );
    let street_name = capture(
        Field::StreetName,
        Field::StreetName.group_base(),
        &street_name_phrase(4),
        table,
    );
    let street_type = capture(
        Field::StreetType,
        Field::StreetType.group_base(),
        &street_type_core(),
        table,
    );
    let typeless_street_name = capture(
        Field::TypelessStreetName,
        Field::TypelessStreetName.group_base(),
        &typed_street_name_guarded(),
        table,
    );
    let post_direction = capture(
        Field::PostDirection,
        Field::PostDirection.group_base(),
        &direction_core(),
        table,
    );
    let named = format!(r"{street_name}\s+{street_type}");
    let accessories = accessories(table);
    let after_number = sep_comma();
    format!(
        r"{street_number}{after_number}(?:{pre_direction}\s+)?(?:{named}|{typeless_street_name})(?:\s+{post_direction})?{accessories}"
    )
}

/// Builds the `full_street` pattern: an optional PO box leading the street body (`P.O. BOX
/// 41256, One Velvet Drive`), or the street-number-led body alone, or a standalone PO box with
/// no street body at all (`P.O. BOX 99999`). Both PO box branches need their own suffixed
/// `po_box` group since `regex` forbids reusing the name the body's own accessory section
/// already claimed.
fn build_full_street(table: &mut FieldTable) -> String {
    let po_box_leading = capture(
        Field::PoBox,
        &suffixed(Field::PoBox, "a"),
        &po_box_core(),
        table,
    );
    let body = street_body(table);
    let body = format!("(?P<{STREET_BODY_GROUP}>{body})");
    let po_box_alone = capture(
        Field::PoBox,
        &suffixed(Field::PoBox, "b"),
        &po_box_core(),
        table,
    );
    let sep = sep();
    format!(r"(?:(?:{po_box_leading}{sep})?{body}|{po_box_alone})")
}

/// Builds the `full_address` pattern: an optional leading PO box, the street-number-led body,
/// then city/region/postal code/country. The leading PO box group is suffixed `po_box_a` since
/// the street body's own accessory section already claims the base `po_box` name.
fn build_full_address(vocab: &Vocabulary, table: &mut FieldTable) -> String {
    let po_box_leading = capture(
        Field::PoBox,
        &suffixed(Field::PoBox, "a"),
        &po_box_core(),
        table,
    );
    let body = street_body(table);
    let body = format!("(?P<{STREET_BODY_GROUP}>{body})");
    let city = capture(Field::City, Field::City.group_base(), &capitalized_phrase(4), table);
    let region1 = capture(
        Field::Region1,
        Field::Region1.group_base(),
        &region_alternation(vocab.region1),
        table,
    );
    let postal_code = capture(
        Field::PostalCode,
        Field::PostalCode.group_base(),
        &(vocab.postal_code)(),
        table,
    );
    let country = capture(
        Field::Country,
        Field::Country.group_base(),
        &region_alternation(vocab.country_names),
        table,
    );
    let sep = sep();
    format!(
        r"(?:{po_box_leading}{sep})?{body}(?:{sep}{city})?(?:{sep}{region1})?(?:{sep}{postal_code})?(?:{sep}{country})?"
    )
}

/// Compiles both patterns for `vocab`, logging the source at `trace` level -- these are the
/// only multi-hundred-byte strings this crate ever builds, and a broken composition is much
/// easier to debug with the generated source in hand.
pub(crate) fn build(vocab: &Vocabulary) -> CountryGrammar {
    let mut full_street_table = FieldTable::new();
    let full_street_source = build_full_street(&mut full_street_table);
    trace!(country = vocab.country_id, pattern = %full_street_source, "compiling full_street");
    let full_street = Regex::new(&full_street_source)
        .unwrap_or_else(|e| panic!("full_street pattern for {} failed to compile: {e}", vocab.country_id));

    let mut full_address_table = FieldTable::new();
    let full_address_source = build_full_address(vocab, &mut full_address_table);
    trace!(country = vocab.country_id, pattern = %full_address_source, "compiling full_address");
    let full_address = Regex::new(&full_address_source)
        .unwrap_or_else(|e| panic!("full_address pattern for {} failed to compile: {e}", vocab.country_id));

    CountryGrammar {
        full_street,
        full_street_table,
        full_address,
        full_address_table,
    }
}

/// Lazily builds and caches the grammar for one country; each country's patterns are compiled
/// at most once per process.
pub(crate) fn cached(cell: &'static OnceLock<CountryGrammar>, vocab: &Vocabulary) -> &'static CountryGrammar {
    cell.get_or_init(|| build(vocab))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(core: &str, input: &str) -> bool {
        let anchored = Regex::new(&format!("^(?:{core})$")).unwrap();
        anchored.is_match(input)
    }

    #[test]
    fn street_number_accepts_digit_and_spelled_forms() {
        for s in [
            "1", "15", "1256", "32457", "155-B", "25-C", "5214F",
            "One Thousand And Fifty Nine", "Two hundred and fifty", "Three hundred four",
            "Thirty seven", "FIFTY One", "Three hundred Ten",
        ] {
            assert!(full_match(&street_number_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn street_number_rejects_overlong_or_malformed() {
        for s in ["1000 E", "536233", "111111", "1111ss11", "123 456"] {
            assert!(!full_match(&street_number_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn direction_accepts_all_documented_forms() {
        for s in ["N.", "N", "S", "West", "eASt", "NW", "SE", "S.E."] {
            assert!(full_match(&direction_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn direction_rejects_malformed_compounds() {
        for s in ["NW.", "NS", "EW"] {
            assert!(!full_match(&direction_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn occupancy_accepts_documented_forms() {
        for s in [
            "ST.8-520", "suite 900", "Suite #2", "suite #218", "suite J7", "suite 102A",
            "suite a&b", "Suite J#200", "suite 710-327", "Suite A", "ste A", "Ste 101",
            "ste 502b", "ste 14-15", "ste E", "ste 9E", "Suite 1800", "STE 130 S", "Apt 1B",
            "Rm. 52", "#2b", "Unit 101", "unit 101", "#20", "Place ", "Pl ", "PL.",
            "Place #1200", "Pl #1200", "#1900", "#2500C", "# 1900", "# 2500C", "Bay 52",
            "BAY 52", "Site 123",
        ] {
            assert!(full_match(&occupancy_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn occupancy_rejects_missing_separator() {
        for s in ["suite900 ", "Suite#2", "suite218 "] {
            assert!(!full_match(&occupancy_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn floor_accepts_documented_forms() {
        for s in [
            "floor 3", "floor 11", "floor 15", "1st floor", "2nd floor", "15th floor",
            "16th. floor", "2nd Fl", "16th FL.", "1st fl Horiz", "56th floor Horizontal",
        ] {
            assert!(full_match(&floor_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn floor_rejects_missing_separator() {
        for s in ["16th.floor", "1stfloor"] {
            assert!(!full_match(&floor_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn building_accepts_documented_forms() {
        for s in [
            "Building II", "bldg m", "Building F", "bldg 2", "building 3", "building 100",
            "building 1000", "Building ", "building one ", "Building three ",
        ] {
            assert!(full_match(&building_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn building_rejects_missing_separator_or_overlong_id() {
        for s in ["bldg", "bldgm", "bldg100 ", "building 10000 "] {
            assert!(!full_match(&building_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn mail_stop_accepts_documented_forms() {
        for s in ["MS CORP 003", "MS: BCM204", "MSC 1234", "MS 1234"] {
            assert!(full_match(&mail_stop_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn mail_stop_rejects_overlong_or_missing_id() {
        for s in ["MS 12345", "MS CORP"] {
            assert!(!full_match(&mail_stop_core(), s), "expected reject: {s}");
        }
    }

    #[test]
    fn po_box_accepts_documented_forms() {
        for s in [
            "po box 108", "Po Box 53485", "P.O. box 119", "PO box 1070", "Box 101",
            "box 129", "P.O.BOX 167", "PoBox 129", "POST OFFICE BOX 129", "P.O. BOX 99999",
            "PMB 29700", "pmb #29700", "PO Box # A3656", "PO Drawer J",
        ] {
            assert!(full_match(&po_box_core(), s), "expected accept: {s}");
        }
    }

    #[test]
    fn po_box_rejects_missing_separator() {
        for s in ["po box108", "PoBox53485", "P.O. box119"] {
            assert!(!full_match(&po_box_core(), s), "expected reject: {s}");
        }
    }
}
