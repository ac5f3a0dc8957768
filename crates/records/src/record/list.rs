// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::{read_card, read_values, write_control, write_values};
use crate::record::Record;

/// Control header plus a flat ordered sequence of values
///
/// The header's N1 slot declares the value count (NPL) and the values run
/// six to a card over as many continuation cards as needed. The count is
/// derived from the stored values, so an inconsistent list cannot be
/// assembled in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    c1: f64,
    c2: f64,
    l1: i64,
    l2: i64,
    n2: i64,
    values: Vec<f64>,
}

impl List {
    /// New list record; NPL is taken from the value count
    pub fn new(c1: f64, c2: f64, l1: i64, l2: i64, n2: i64, values: Vec<f64>) -> Self {
        Self {
            c1,
            c2,
            l1,
            l2,
            n2,
            values,
        }
    }

    /// First float slot of the header
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Second float slot of the header
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// First integer slot of the header
    pub fn l1(&self) -> i64 {
        self.l1
    }

    /// Second integer slot of the header
    pub fn l2(&self) -> i64 {
        self.l2
    }

    /// Declared value count (the N1 slot)
    pub fn npl(&self) -> usize {
        self.values.len()
    }

    /// Fourth integer slot of the header
    pub fn n2(&self) -> i64 {
        self.n2
    }

    /// The listed values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Record for List {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let card = read_card(cursor, mat, mf, mt)?;
        let npl = card.int(4)?;
        let count = usize::try_from(npl).map_err(|_| Error::Count {
            line: card.line(),
            field: "NPL",
            expected: 0,
            found: npl,
        })?;
        Ok(Self {
            c1: card.float(0)?,
            c2: card.float(1)?,
            l1: card.int(2)?,
            l2: card.int(3)?,
            n2: card.int(5)?,
            values: read_values(cursor, mat, mf, mt, count)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.c1,
            self.c2,
            self.l1,
            self.l2,
            self.values.len() as i64,
            self.n2,
            mat,
            mf,
            mt,
        );
        1 + write_values(out, &self.values, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        1 + self.values.len().div_ceil(6)
    }
}
