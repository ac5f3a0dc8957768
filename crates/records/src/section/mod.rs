//! Section types assembled from the generic record family
//!
//! Each module covers one evaluated data file (MF). Within a module the
//! `Section` type composes the record family into the layout of that
//! file, dispatching on the discriminant codes (LNU, LTT, LAW, LANG,
//! LTP, LTY, LB) read from the data itself. An unmatched code is a hard
//! error, never a fallback branch.
//!
//! | Module | File | Content                                      |
//! | ------ | ---- | -------------------------------------------- |
//! | [mf1]  | MF1  | fission neutron multiplicities (MT452)       |
//! | [mf4]  | MF4  | angular distributions of secondary particles |
//! | [mf6]  | MF6  | product energy-angle distributions           |
//! | [mf8]  | MF8  | fission product yields (MT454/MT459)         |
//! | [mf33] | MF33 | cross section covariance matrices            |

// Modules
pub mod mf1;
pub mod mf33;
pub mod mf4;
pub mod mf6;
pub mod mf8;

// internal modules
use crate::cursor::Cursor;
use crate::error::Result;
use crate::line::{read_card, write_card};

/// Consume the section-end sentinel card (MT = 0, blank fields)
pub(crate) fn read_send(cursor: &mut Cursor, mat: i32, mf: i32) -> Result<()> {
    read_card(cursor, mat, mf, 0).map(|_| ())
}

/// Write the section-end sentinel card
pub(crate) fn write_send(out: &mut String, mat: i32, mf: i32) {
    write_card(out, "", mat, mf, 0);
}
