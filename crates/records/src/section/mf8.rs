//! MF8 MT454/MT459 - fission product yields
//!
//! Independent (MT454) and cumulative (MT459) fission product yields
//! share one layout: a head card declaring LE+1 incident energies, then
//! one list record per energy holding (ZAFP, FPS, Y, DY) quadruplets for
//! every fission product.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, List, Record};
use crate::section::{read_send, write_send};

/// Fission product yield section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    mt: i32,
    za: f64,
    awr: f64,
    yields: Vec<FissionYieldData>,
}

impl Section {
    /// New section from its head fields and per-energy yield data
    pub fn new(mt: i32, za: f64, awr: f64, yields: Vec<FissionYieldData>) -> Self {
        Self {
            mt,
            za,
            awr,
            yields,
        }
    }

    /// Section number (454 independent, 459 cumulative)
    pub fn mt(&self) -> i32 {
        self.mt
    }

    /// ZA identifier of the material
    pub fn za(&self) -> f64 {
        self.za
    }

    /// Atomic weight ratio of the material
    pub fn awr(&self) -> f64 {
        self.awr
    }

    /// Number of incident energies beyond the first
    pub fn le(&self) -> usize {
        self.yields.len().saturating_sub(1)
    }

    /// The yield data, one record per incident energy
    pub fn yields(&self) -> &[FissionYieldData] {
        &self.yields
    }
}

impl Record for Section {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let head = Control::from_text(cursor, mat, mf, mt)?;
        let count = usize::try_from(head.l1).map_err(|_| Error::Count {
            line,
            field: "LE",
            expected: 0,
            found: head.l1,
        })?;
        let mut yields = Vec::with_capacity(count);
        for _ in 0..count {
            yields.push(FissionYieldData::from_text(cursor, mat, mf, mt)?);
        }
        read_send(cursor, mat, mf)?;
        Ok(Self {
            mt,
            za: head.c1,
            awr: head.c2,
            yields,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.za,
            self.awr,
            self.yields.len() as i64,
            0,
            0,
            0,
            mat,
            mf,
            mt,
        );
        let mut lines = 1;
        for energy in &self.yields {
            lines += energy.print(out, mat, mf, mt);
        }
        write_send(out, mat, mf);
        lines + 1
    }

    fn nc(&self) -> usize {
        1 + self.yields.iter().map(Record::nc).sum::<usize>()
    }
}

/// Fission product yields at one incident energy
///
/// List record `[E, 0, I, 0, NN, NFP / ZAFP, FPS, Y, DY ...]` where NN
/// must equal 4 NFP; I gives the interpolation scheme towards the
/// previous energy point.
#[derive(Debug, Clone, PartialEq)]
pub struct FissionYieldData {
    data: List,
}

impl FissionYieldData {
    /// New yield record for one incident energy, validated eagerly
    pub fn new(
        identifiers: Vec<i64>,
        states: Vec<i64>,
        yields: Vec<f64>,
        uncertainties: Vec<f64>,
        energy: f64,
        interpolation: i64,
    ) -> Result<Self> {
        let products = identifiers.len();
        for (field, found) in [
            ("FPS", states.len()),
            ("Y", yields.len()),
            ("DY", uncertainties.len()),
        ] {
            if found != products {
                return Err(Error::Count {
                    line: 0,
                    field,
                    expected: products as i64,
                    found: found as i64,
                });
            }
        }
        let mut values = Vec::with_capacity(4 * products);
        for index in 0..products {
            values.push(identifiers[index] as f64);
            values.push(states[index] as f64);
            values.push(yields[index]);
            values.push(uncertainties[index]);
        }
        Self::from_list(
            List::new(energy, 0.0, interpolation, 0, products as i64, values),
            0,
        )
    }

    fn from_list(data: List, line: usize) -> Result<Self> {
        let expected = 4 * data.n2();
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NN",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Incident energy of this yield set
    pub fn energy(&self) -> f64 {
        self.data.c1()
    }

    /// Interpolation scheme towards the previous energy point
    pub fn interpolation(&self) -> i64 {
        self.data.l1()
    }

    /// Number of fission products
    pub fn nfp(&self) -> usize {
        self.data.n2() as usize
    }

    /// ZA identifier of each fission product
    pub fn identifiers(&self) -> Vec<i64> {
        self.data
            .values()
            .iter()
            .step_by(4)
            .map(|za| *za as i64)
            .collect()
    }

    /// Isomeric state of each fission product
    pub fn states(&self) -> Vec<i64> {
        self.data
            .values()
            .iter()
            .skip(1)
            .step_by(4)
            .map(|fps| *fps as i64)
            .collect()
    }

    /// Yield of each fission product
    pub fn yields(&self) -> Vec<f64> {
        self.data.values().iter().skip(2).step_by(4).copied().collect()
    }

    /// Yield uncertainty of each fission product
    pub fn uncertainties(&self) -> Vec<f64> {
        self.data.values().iter().skip(3).step_by(4).copied().collect()
    }
}

impl Record for FissionYieldData {
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
