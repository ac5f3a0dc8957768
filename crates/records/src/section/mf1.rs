//! MF1 MT452 - the total number of fission neutrons
//!
//! The total fission neutron multiplicity as a function of incident
//! energy, stored either as a polynomial expansion or as a pointwise
//! table. The representation in use is declared by the LNU flag on the
//! section head.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, List, Record, Tab1};
use crate::section::{read_send, write_send};

// external crates
use derive_more::From;

/// Total fission neutron multiplicity section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    za: f64,
    awr: f64,
    multiplicity: Multiplicity,
}

impl Section {
    /// New section from its head fields and multiplicity data
    pub fn new(za: f64, awr: f64, multiplicity: Multiplicity) -> Self {
        Self {
            za,
            awr,
            multiplicity,
        }
    }

    /// ZA identifier of the material
    pub fn za(&self) -> f64 {
        self.za
    }

    /// Atomic weight ratio of the material
    pub fn awr(&self) -> f64 {
        self.awr
    }

    /// Section number
    pub fn mt(&self) -> i32 {
        452
    }

    /// Multiplicity representation flag
    pub fn lnu(&self) -> i64 {
        self.multiplicity.lnu()
    }

    /// The multiplicity data
    pub fn multiplicity(&self) -> &Multiplicity {
        &self.multiplicity
    }
}

impl Record for Section {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let head = Control::from_text(cursor, mat, mf, mt)?;
        let multiplicity = match head.l2 {
            1 => Multiplicity::Polynomial(PolynomialMultiplicity::from_text(cursor, mat, mf, mt)?),
            2 => Multiplicity::Tabulated(TabulatedMultiplicity::from_text(cursor, mat, mf, mt)?),
            value => {
                return Err(Error::Discriminant {
                    line,
                    field: "LNU",
                    value,
                })
            }
        };
        read_send(cursor, mat, mf)?;
        Ok(Self {
            za: head.c1,
            awr: head.c2,
            multiplicity,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(out, self.za, self.awr, 0, self.lnu(), 0, 0, mat, mf, mt);
        let lines = 1 + self.multiplicity.print(out, mat, mf, mt);
        write_send(out, mat, mf);
        lines + 1
    }

    fn nc(&self) -> usize {
        1 + self.multiplicity.nc()
    }
}

/// Closed set of multiplicity representations, keyed by LNU
#[derive(Debug, Clone, PartialEq, From)]
pub enum Multiplicity {
    /// LNU=1, polynomial expansion in incident energy
    Polynomial(PolynomialMultiplicity),
    /// LNU=2, pointwise table over incident energy
    Tabulated(TabulatedMultiplicity),
}

impl Multiplicity {
    /// Multiplicity representation flag
    pub fn lnu(&self) -> i64 {
        match self {
            Self::Polynomial(_) => 1,
            Self::Tabulated(_) => 2,
        }
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        match self {
            Self::Polynomial(data) => data.print(out, mat, mf, mt),
            Self::Tabulated(data) => data.print(out, mat, mf, mt),
        }
    }

    fn nc(&self) -> usize {
        match self {
            Self::Polynomial(data) => data.nc(),
            Self::Tabulated(data) => data.nc(),
        }
    }
}

/// Polynomial multiplicity representation (LNU=1)
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialMultiplicity {
    data: List,
}

impl PolynomialMultiplicity {
    /// New polynomial representation from its expansion coefficients
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self {
            data: List::new(0.0, 0.0, 0, 0, 0, coefficients),
        }
    }

    /// The polynomial expansion coefficients
    pub fn coefficients(&self) -> &[f64] {
        self.data.values()
    }
}

impl Record for PolynomialMultiplicity {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        Ok(Self {
            data: List::from_text(cursor, mat, mf, mt)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data.nc()
    }
}

/// Tabulated multiplicity representation (LNU=2)
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedMultiplicity {
    data: Tab1,
}

impl TabulatedMultiplicity {
    /// New tabulated representation, validated eagerly
    pub fn new(
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        energies: Vec<f64>,
        multiplicities: Vec<f64>,
    ) -> Result<Self> {
        Ok(Self {
            data: Tab1::new(
                0.0,
                0.0,
                0,
                0,
                boundaries,
                interpolants,
                energies,
                multiplicities,
            )?,
        })
    }

    /// Number of interpolation regions
    pub fn nr(&self) -> usize {
        self.data.nr()
    }

    /// Number of tabulated points
    pub fn np(&self) -> usize {
        self.data.np()
    }

    /// Region boundaries as point indices
    pub fn boundaries(&self) -> &[i64] {
        self.data.boundaries()
    }

    /// Interpolation scheme of each region
    pub fn interpolants(&self) -> &[i64] {
        self.data.interpolants()
    }

    /// The incident energies
    pub fn energies(&self) -> &[f64] {
        self.data.x()
    }

    /// The multiplicity at each incident energy
    pub fn multiplicities(&self) -> &[f64] {
        self.data.y()
    }
}

impl Record for TabulatedMultiplicity {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        Ok(Self {
            data: Tab1::from_text(cursor, mat, mf, mt)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.data.nc()
    }
}
