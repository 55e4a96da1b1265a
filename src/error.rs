//! The `error` module defines the library-specific `AddressError` type and the
//! `AddressResult` alias built on top of it.
use thiserror::Error;

/// The `AddressError` enum represents every way a [`crate::Parser`] can fail to come into
/// existence. Matching is never an error: a text with no recognizable address simply produces
/// an empty result (see [`crate::parse`]).
#[derive(Error, Debug)]
pub enum AddressError {
    /// Raised when a country tag does not match any entry in the [`crate::Country`] registry.
    #[error("unrecognized country tag: {0}")]
    UnknownCountry(String),
    /// Raised when a parser is constructed without a country at all.  Kept for API
    /// completeness alongside [`AddressError::UnknownCountry`]; see `SPEC_FULL.md` §8.1 for why
    /// Rust's type system makes this variant reachable only from the untyped conversion path.
    #[error("a country is required to build a parser")]
    MissingCountry,
    /// Wraps a pattern compilation failure.  In practice unreachable once the grammar is
    /// stable, since every composed pattern is exercised by this crate's own test suite, but
    /// kept so pattern construction stays fallible rather than `unwrap`-ing at startup.
    #[error("failed to compile address grammar: {0}")]
    Pattern(#[from] regex::Error),
}

/// Alias for the `Result` type using the local error type.
pub type AddressResult<T> = Result<T, AddressError>;
