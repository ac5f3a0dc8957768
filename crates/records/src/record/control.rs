// internal modules
use crate::cursor::Cursor;
use crate::error::Result;
use crate::line::{read_card, write_control};
use crate::record::Record;

/// Minimal control record heading nearly every higher-level structure
///
/// One card: two floating point slots, usually the ZA identifier and the
/// atomic weight ratio, and four integer slots whose meaning depends on
/// the enclosing section. Any slot combination is a valid record, so the
/// fields are left public.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Control {
    /// First float slot (ZA on a section head)
    pub c1: f64,
    /// Second float slot (AWR on a section head)
    pub c2: f64,
    /// First integer slot
    pub l1: i64,
    /// Second integer slot
    pub l2: i64,
    /// Third integer slot
    pub n1: i64,
    /// Fourth integer slot
    pub n2: i64,
}

impl Control {
    /// New control record from its six slots
    pub fn new(c1: f64, c2: f64, l1: i64, l2: i64, n1: i64, n2: i64) -> Self {
        Self {
            c1,
            c2,
            l1,
            l2,
            n1,
            n2,
        }
    }

    /// ZA identifier interpretation of the first slot
    pub fn za(&self) -> f64 {
        self.c1
    }

    /// Atomic weight ratio interpretation of the second slot
    pub fn awr(&self) -> f64 {
        self.c2
    }
}

impl Record for Control {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let card = read_card(cursor, mat, mf, mt)?;
        Ok(Self {
            c1: card.float(0)?,
            c2: card.float(1)?,
            l1: card.int(2)?,
            l2: card.int(3)?,
            n1: card.int(4)?,
            n2: card.int(5)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out, self.c1, self.c2, self.l1, self.l2, self.n1, self.n2, mat, mf, mt,
        );
        1
    }

    fn nc(&self) -> usize {
        1
    }
}
