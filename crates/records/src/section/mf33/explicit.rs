//! NI-type sub-subsections: explicitly given covariance components
//!
//! Each component is a single list record whose L2 slot (LB) selects the
//! matrix encoding read from it: interval pairs, a square matrix over one
//! energy grid, or a rectangular matrix over separate row and column
//! grids.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::record::{List, Record};

// external crates
use derive_more::From;

/// Closed set of explicit covariance encodings, keyed by LB
#[derive(Debug, Clone, PartialEq, From)]
pub enum ExplicitCovariance {
    /// LB=0..4|8|9, (energy, value) interval pairs
    Pairs(CovariancePairs),
    /// LB=5, square matrix over one energy grid
    Square(SquareMatrix),
    /// LB=6, rectangular matrix over separate row and column grids
    Rectangular(RectangularMatrix),
}

impl ExplicitCovariance {
    /// Encoding flag of this component
    pub fn lb(&self) -> i64 {
        match self {
            Self::Pairs(payload) => payload.lb(),
            Self::Square(payload) => payload.lb(),
            Self::Rectangular(payload) => payload.lb(),
        }
    }

    fn data(&self) -> &List {
        match self {
            Self::Pairs(payload) => &payload.data,
            Self::Square(payload) => &payload.data,
            Self::Rectangular(payload) => &payload.data,
        }
    }
}

impl Record for ExplicitCovariance {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let data = List::from_text(cursor, mat, mf, mt)?;
        match data.l2() {
            0..=4 | 8 | 9 => Ok(Self::Pairs(CovariancePairs::from_list(data, line)?)),
            5 => Ok(Self::Square(SquareMatrix::from_list(data, line)?)),
            6 => Ok(Self::Rectangular(RectangularMatrix::from_list(data, line)?)),
            value => Err(Error::Discriminant {
                line,
                field: "LB",
                value,
            }),
        }
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data().print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data().nc()
    }
}

/// Covariance component given as (energy, value) interval pairs
///
/// List record `[0, 0, LT, LB, NT, NP / E, F ...]` with NT = 2 NP; the
/// LT slot gives the number of trailing pairs belonging to the second of
/// two overlapping grids.
#[derive(Debug, Clone, PartialEq)]
pub struct CovariancePairs {
    data: List,
}

impl CovariancePairs {
    /// New pair component, validated eagerly
    pub fn new(lb: i64, lt: i64, energies: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if values.len() != energies.len() {
            return Err(Error::Count {
                line: 0,
                field: "NP",
                expected: energies.len() as i64,
                found: values.len() as i64,
            });
        }
        let count = energies.len() as i64;
        let pairs = energies
            .into_iter()
            .zip(values)
            .flat_map(|(energy, value)| [energy, value])
            .collect();
        Self::from_list(List::new(0.0, 0.0, lt, lb, count, pairs), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if !matches!(data.l2(), 0..=4 | 8 | 9) {
            return Err(Error::Discriminant {
                line,
                field: "LB",
                value: data.l2(),
            });
        }
        let expected = 2 * data.n2();
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NT",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Encoding flag of this component
    pub fn lb(&self) -> i64 {
        self.data.l2()
    }

    /// Number of pairs belonging to the second grid
    pub fn lt(&self) -> i64 {
        self.data.l1()
    }

    /// Total value count of the record
    pub fn nt(&self) -> usize {
        self.data.npl()
    }

    /// Number of (energy, value) pairs
    pub fn np(&self) -> usize {
        self.data.n2() as usize
    }

    /// The interval boundary energies
    pub fn energies(&self) -> Vec<f64> {
        self.data.values().iter().step_by(2).copied().collect()
    }

    /// The covariance component on each interval
    pub fn values(&self) -> Vec<f64> {
        self.data.values().iter().skip(1).step_by(2).copied().collect()
    }
}

impl Record for CovariancePairs {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        Self::from_list(List::from_text(cursor, mat, mf, mt)?, line)
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data.nc()
    }
}

/// Covariance component given as a square matrix over one energy grid
///
/// List record `[0, 0, LS, 5, NT, NE / E ..., F ...]`; a symmetric
/// matrix (LS=1) stores its upper triangle only, so NT = NE(NE+1)/2,
/// while an asymmetric one (LS=0) stores NT = NE + (NE-1) squared.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    data: List,
}

impl SquareMatrix {
    /// New square matrix component, validated eagerly
    pub fn new(ls: i64, energies: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        let count = energies.len() as i64;
        let mut all = energies;
        all.extend(values);
        Self::from_list(List::new(0.0, 0.0, ls, 5, count, all), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if data.l2() != 5 {
            return Err(Error::Discriminant {
                line,
                field: "LB",
                value: data.l2(),
            });
        }
        let ne = data.n2();
        let expected = match data.l1() {
            0 => ne + (ne - 1) * (ne - 1),
            1 => ne * (ne + 1) / 2,
            value => {
                return Err(Error::Discriminant {
                    line,
                    field: "LS",
                    value,
                })
            }
        };
        if ne < 1 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NT",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Encoding flag, always 5
    pub fn lb(&self) -> i64 {
        self.data.l2()
    }

    /// Symmetry flag (1 when only the upper triangle is stored)
    pub fn ls(&self) -> i64 {
        self.data.l1()
    }

    /// Total value count of the record
    pub fn nt(&self) -> usize {
        self.data.npl()
    }

    /// Number of energy grid points
    pub fn ne(&self) -> usize {
        self.data.n2() as usize
    }

    /// The energy grid
    pub fn energies(&self) -> &[f64] {
        &self.data.values()[..self.ne()]
    }

    /// The matrix values in row order
    pub fn values(&self) -> &[f64] {
        &self.data.values()[self.ne()..]
    }
}

impl Record for SquareMatrix {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        Self::from_list(List::from_text(cursor, mat, mf, mt)?, line)
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data.nc()
    }
}

/// Covariance component given as a rectangular matrix
///
/// List record `[0, 0, 0, 6, NT, NER / ER ..., EC ..., F ...]` relating
/// NER row energies to NEC column energies, with NT = NER NEC + 1 and
/// (NER-1)(NEC-1) matrix values.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularMatrix {
    data: List,
}

impl RectangularMatrix {
    /// New rectangular matrix component, validated eagerly
    pub fn new(
        row_energies: Vec<f64>,
        column_energies: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let rows = row_energies.len() as i64;
        let columns = column_energies.len() as i64;
        let expected = (rows - 1) * (columns - 1);
        if rows < 2 || columns < 2 || values.len() as i64 != expected {
            return Err(Error::Count {
                line: 0,
                field: "NT",
                expected: rows * columns + 1,
                found: rows + columns + values.len() as i64,
            });
        }
        let mut all = row_energies;
        all.extend(column_energies);
        all.extend(values);
        Self::from_list(List::new(0.0, 0.0, 0, 6, rows, all), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if data.l2() != 6 {
            return Err(Error::Discriminant {
                line,
                field: "LB",
                value: data.l2(),
            });
        }
        let rows = data.n2();
        let total = data.npl() as i64;
        if rows < 1 {
            return Err(Error::Count {
                line,
                field: "NER",
                expected: 1,
                found: rows,
            });
        }
        // NT = NER NEC + 1 for a whole number of columns
        if (total - 1) % rows != 0 || (total - 1) / rows < 1 {
            return Err(Error::Count {
                line,
                field: "NT",
                expected: rows * ((total - 1) / rows).max(1) + 1,
                found: total,
            });
        }
        Ok(Self { data })
    }

    /// Encoding flag, always 6
    pub fn lb(&self) -> i64 {
        self.data.l2()
    }

    /// Total value count of the record
    pub fn nt(&self) -> usize {
        self.data.npl()
    }

    /// Number of row energies
    pub fn ner(&self) -> usize {
        self.data.n2() as usize
    }

    /// Number of column energies
    pub fn nec(&self) -> usize {
        (self.nt() - 1) / self.ner()
    }

    /// The row energy grid
    pub fn row_energies(&self) -> &[f64] {
        &self.data.values()[..self.ner()]
    }

    /// The column energy grid
    pub fn column_energies(&self) -> &[f64] {
        &self.data.values()[self.ner()..self.ner() + self.nec()]
    }

    /// The matrix values in row order
    pub fn values(&self) -> &[f64] {
        &self.data.values()[self.ner() + self.nec()..]
    }
}

impl Record for RectangularMatrix {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        Self::from_list(List::from_text(cursor, mat, mf, mt)?, line)
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data.nc()
    }
}
