// internal modules
use crate::cursor::Cursor;
use crate::error::Result;
use crate::line::{int_slot, read_card, write_card};
use crate::record::Record;

// rendf modules
use rendf_format::f;

/// Cross-reference entry for one section of a material
///
/// The first two slots of the card are blank; the remaining four give the
/// file and section numbers, the card count of the referenced section and
/// its modification flag. The material and tape layers use these to index
/// into a material without scanning it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Directory {
    /// File number of the referenced section
    pub mf: i64,
    /// Section number of the referenced section
    pub mt: i64,
    /// Card count of the referenced section, excluding its sentinel
    pub nc: i64,
    /// Modification flag
    pub modification: i64,
}

impl Directory {
    /// New directory entry from its four slots
    pub fn new(mf: i64, mt: i64, nc: i64, modification: i64) -> Self {
        Self {
            mf,
            mt,
            nc,
            modification,
        }
    }
}

impl Record for Directory {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let card = read_card(cursor, mat, mf, mt)?;
        Ok(Self {
            mf: card.int(2)?,
            mt: card.int(3)?,
            nc: card.int(4)?,
            modification: card.int(5)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        let data = f!(
            "{:>11}{:>11}{}{}{}{}",
            "",
            "",
            int_slot(self.mf),
            int_slot(self.mt),
            int_slot(self.nc),
            int_slot(self.modification)
        );
        write_card(out, &data, mat, mf, mt);
        1
    }

    /// A directory entry is always a single card
    fn nc(&self) -> usize {
        1
    }
}
