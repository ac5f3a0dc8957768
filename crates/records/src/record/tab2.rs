// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::{read_card, read_interpolation, write_control, write_interpolation};
use crate::record::Record;

/// Interpolation record partitioning a table into interpolation regions
///
/// Carries NR (boundary, scheme) pairs, three pairs to a card. The
/// boundaries partition the N2 points (or sub-records) governed by the
/// record, so the last boundary must equal the N2 slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tab2 {
    c1: f64,
    c2: f64,
    l1: i64,
    l2: i64,
    n2: i64,
    boundaries: Vec<i64>,
    interpolants: Vec<i64>,
}

impl Tab2 {
    /// New interpolation record, validated eagerly
    pub fn new(
        c1: f64,
        c2: f64,
        l1: i64,
        l2: i64,
        n2: i64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
    ) -> Result<Self> {
        let record = Self {
            c1,
            c2,
            l1,
            l2,
            n2,
            boundaries,
            interpolants,
        };
        record.verify(0)?;
        Ok(record)
    }

    fn verify(&self, line: usize) -> Result<()> {
        if self.interpolants.len() != self.boundaries.len() {
            return Err(Error::Count {
                line,
                field: "NR",
                expected: self.boundaries.len() as i64,
                found: self.interpolants.len() as i64,
            });
        }
        match self.boundaries.last() {
            Some(last) if *last != self.n2 => Err(Error::Count {
                line,
                field: "NBT",
                expected: self.n2,
                found: *last,
            }),
            None if self.n2 != 0 => Err(Error::Count {
                line,
                field: "NR",
                expected: 1,
                found: 0,
            }),
            _ => Ok(()),
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

    /// Number of interpolation regions (the N1 slot)
    pub fn nr(&self) -> usize {
        self.boundaries.len()
    }

    /// Number of governed points or sub-records (the N2 slot)
    pub fn n2(&self) -> i64 {
        self.n2
    }

    /// Region boundaries as point indices
    pub fn boundaries(&self) -> &[i64] {
        &self.boundaries
    }

    /// Interpolation scheme of each region
    pub fn interpolants(&self) -> &[i64] {
        &self.interpolants
    }
}

impl Record for Tab2 {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let card = read_card(cursor, mat, mf, mt)?;
        let nr = card.int(4)?;
        let count = usize::try_from(nr).map_err(|_| Error::Count {
            line: card.line(),
            field: "NR",
            expected: 0,
            found: nr,
        })?;
        let (c1, c2) = (card.float(0)?, card.float(1)?);
        let (l1, l2, n2) = (card.int(2)?, card.int(3)?, card.int(5)?);
        let (boundaries, interpolants) = read_interpolation(cursor, mat, mf, mt, count)?;
        let record = Self {
            c1,
            c2,
            l1,
            l2,
            n2,
            boundaries,
            interpolants,
        };
        record.verify(card.line())?;
        Ok(record)
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.c1,
            self.c2,
            self.l1,
            self.l2,
            self.boundaries.len() as i64,
            self.n2,
            mat,
            mf,
            mt,
        );
        1 + write_interpolation(out, &self.boundaries, &self.interpolants, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        1 + self.boundaries.len().div_ceil(3)
    }
}
