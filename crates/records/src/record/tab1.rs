// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::{
    read_card, read_interpolation, read_pairs, write_control, write_interpolation, write_values,
};
use crate::record::Record;

// external crates
use itertools::Itertools;

/// Interpolation record plus the ordered (x, y) pairs it governs
///
/// The NR (boundary, scheme) pairs partition the NP (x, y) pairs into
/// piecewise-interpolable regions; the last boundary must therefore equal
/// NP, and the x and y sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tab1 {
    c1: f64,
    c2: f64,
    l1: i64,
    l2: i64,
    boundaries: Vec<i64>,
    interpolants: Vec<i64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Tab1 {
    /// New tabulation record, validated eagerly
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c1: f64,
        c2: f64,
        l1: i64,
        l2: i64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self> {
        let record = Self {
            c1,
            c2,
            l1,
            l2,
            boundaries,
            interpolants,
            x,
            y,
        };
        record.verify(0)?;
        Ok(record)
    }

    fn verify(&self, line: usize) -> Result<()> {
        if self.y.len() != self.x.len() {
            return Err(Error::Count {
                line,
                field: "NP",
                expected: self.x.len() as i64,
                found: self.y.len() as i64,
            });
        }
        if self.interpolants.len() != self.boundaries.len() {
            return Err(Error::Count {
                line,
                field: "NR",
                expected: self.boundaries.len() as i64,
                found: self.interpolants.len() as i64,
            });
        }
        let np = self.x.len() as i64;
        match self.boundaries.last() {
            Some(last) if *last != np => Err(Error::Count {
                line,
                field: "NBT",
                expected: np,
                found: *last,
            }),
            None if np != 0 => Err(Error::Count {
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

    /// Number of tabulated points (the N2 slot)
    pub fn np(&self) -> usize {
        self.x.len()
    }

    /// Region boundaries as point indices
    pub fn boundaries(&self) -> &[i64] {
        &self.boundaries
    }

    /// Interpolation scheme of each region
    pub fn interpolants(&self) -> &[i64] {
        &self.interpolants
    }

    /// The tabulated x values
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The tabulated y values
    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

impl Record for Tab1 {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let card = read_card(cursor, mat, mf, mt)?;
        let nr = card.int(4)?;
        let np = card.int(5)?;
        let regions = usize::try_from(nr).map_err(|_| Error::Count {
            line: card.line(),
            field: "NR",
            expected: 0,
            found: nr,
        })?;
        let points = usize::try_from(np).map_err(|_| Error::Count {
            line: card.line(),
            field: "NP",
            expected: 0,
            found: np,
        })?;
        let (c1, c2) = (card.float(0)?, card.float(1)?);
        let (l1, l2) = (card.int(2)?, card.int(3)?);
        let (boundaries, interpolants) = read_interpolation(cursor, mat, mf, mt, regions)?;
        let (x, y) = read_pairs(cursor, mat, mf, mt, points)?;
        let record = Self {
            c1,
            c2,
            l1,
            l2,
            boundaries,
            interpolants,
            x,
            y,
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
            self.x.len() as i64,
            mat,
            mf,
            mt,
        );
        let mut lines = 1 + write_interpolation(out, &self.boundaries, &self.interpolants, mat, mf, mt);
        let pairs: Vec<f64> = self.x.iter().interleave(&self.y).copied().collect();
        lines += write_values(out, &pairs, mat, mf, mt);
        lines
    }

    fn nc(&self) -> usize {
        1 + self.boundaries.len().div_ceil(3) + self.x.len().div_ceil(3)
    }
}
