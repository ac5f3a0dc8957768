//! Module for reading and writing ENDF-6 records and sections
//!
//! The ENDF-6 format stores evaluated nuclear data as fixed-column text
//! cards grouped into tapes, materials, files (MF) and sections (MT).
//! This crate covers the record layer: the numeric field and card codecs,
//! the generic record family nearly every section is assembled from, and
//! a set of section types showing how the family composes.
//!
//! | Record                  | Content                                       |
//! | ----------------------- | --------------------------------------------- |
//! | [Control]               | two float and four integer slots, one card    |
//! | [List]                  | control header plus NPL values                |
//! | [Tab2]                  | interpolation regions governing N2 points     |
//! | [Tab1]                  | interpolation regions plus NP (x, y) pairs    |
//! | [InterpolationSequence] | Tab2 header plus N2 self-describing records   |
//! | [Directory]             | section cross-reference entry                 |
//!
//! Every record implements [Record]: a streaming constructor reading from
//! a [Cursor], an identity-stamping `print`, and an `nc` card count kept
//! consistent with what `print` emits. Parsing and printing are exact
//! inverses, down to the sign-delimited exponent convention of the
//! 11-column numeric fields.
//!
//! # Quickstart example
//!
//! ```rust
//! use rendf_records::{Cursor, Record, Tab1};
//!
//! // A two-point table with a single linear interpolation region
//! let table = Tab1::new(
//!     0.0, 0.0, 0, 0,
//!     vec![2], vec![2],
//!     vec![1e-5, 2e7], vec![1.0, 2.0],
//! ).unwrap();
//!
//! // Print it as cards stamped with MAT 9228, MF 3, MT 102
//! let mut buffer = String::new();
//! let lines = table.print(&mut buffer, 9228, 3, 102);
//! assert_eq!(lines, table.nc());
//!
//! // Reading it back gives the same value and the same text
//! let mut cursor = Cursor::new(&buffer);
//! let round_trip = Tab1::from_text(&mut cursor, 9228, 3, 102).unwrap();
//! assert_eq!(round_trip, table);
//! ```

// Modules
mod cursor;
mod error;
mod line;
mod parsers;
mod record;
pub mod section;

// flatten public API and inline the documentation
#[doc(inline)]
pub use cursor::Cursor;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use record::{Control, Directory, InterpolationSequence, List, Record, Tab1, Tab2};
