#![warn(missing_docs)]
//! Locale-parameterized postal address extraction from free-form text.
//!
//! ```
//! use addrgrammar::{Country, parse};
//!
//! let addresses = parse("Ship to 225 E. John Carpenter Freeway, Irving, TX 75062", Country::Us);
//! assert_eq!(addresses[0].city.as_deref(), Some("Irving"));
//! ```
//!
//! Matching never errors: a text with no recognizable address simply yields an empty `Vec`.
//! Construction can fail -- see [`AddressError`] -- only when a country tag comes from untyped
//! input (a string, or an absent `Option<Country>`); the typed entry points in this module never
//! touch that path.
mod address;
mod country;
mod driver;
mod error;
mod field;
mod grammar;
mod normalize;
mod project;

pub use address::{Address, AddressFields};
pub use country::{Country, Parser};
pub use error::{AddressError, AddressResult};
pub use field::Field;

/// Finds every address in `text` for `country`, in left-to-right, non-overlapping order.
///
/// Equivalent to `Parser::get(country).parse(text)`; use [`Parser`] directly to reuse one
/// country's compiled grammar across many calls without re-resolving the [`Country`] each time.
pub fn parse(text: &str, country: Country) -> Vec<Address> {
    Parser::get(country).parse(text)
}

/// Finds every street (no city/region/postal code required) in `text` for `country`, in
/// left-to-right, non-overlapping order.
pub fn parse_single_street(text: &str, country: Country) -> Vec<Address> {
    Parser::get(country).parse_single_street(text)
}
