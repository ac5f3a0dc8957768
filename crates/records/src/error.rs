//! Result and Error types for rendf-records

/// Type alias for `Result<T, records::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `rendf-records` crate
///
/// Every variant carries enough positional context to point at the
/// offending card and field. A failed record is never partially
/// constructed, and the caller's cursor has already advanced past the
/// consumed cards, so retries must restart from a cursor saved before the
/// failing call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fixed-width field is not a valid number under the sign-delimited
    /// exponent convention
    #[error("line {line}: \"{text}\" is not a valid fixed-width number")]
    Format { line: usize, text: String },

    /// A card is too narrow to hold six fields and an identity tail
    #[error("line {line}: card holds {found} columns, expected at least 75")]
    Truncated { line: usize, found: usize },

    /// The identity tail of a card disagrees with the enclosing context
    #[error("line {line}: unexpected {label} (expected {expected}, found {found})")]
    Trailer {
        line: usize,
        label: &'static str,
        expected: i64,
        found: i64,
    },

    /// A declared count field disagrees with the parsed item count
    ///
    /// `line` is zero when the inconsistent value was assembled in memory
    /// rather than read from text.
    #[error("line {line}: inconsistent {field} (expected {expected}, found {found})")]
    Count {
        line: usize,
        field: &'static str,
        expected: i64,
        found: i64,
    },

    /// A code selecting between payload layouts is outside its allowed set
    #[error("line {line}: unsupported {field} value {value}")]
    Discriminant {
        line: usize,
        field: &'static str,
        value: i64,
    },

    /// The buffer ran out while a record still expected more cards
    #[error("line {line}: unexpected end of input")]
    UnexpectedEnd { line: usize },
}
