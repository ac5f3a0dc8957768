//! LAW=5 - charged particle elastic scattering
//!
//! A [Tab2] over incident energy followed by one self-describing
//! sub-record per energy. Unlike LAW=1, the representation flag (LTP)
//! sits on each sub-record's own header, so the sub-records of one
//! section may mix payload shapes.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::record::{InterpolationSequence, List, Record, Tab2};

// external crates
use derive_more::From;

/// Charged particle elastic scattering distribution for one product
#[derive(Debug, Clone, PartialEq)]
pub struct ChargedParticleElasticScattering {
    sequence: InterpolationSequence<ElasticSubSection>,
}

impl ChargedParticleElasticScattering {
    /// New distribution, validated eagerly
    pub fn new(
        spi: f64,
        lidp: i64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        distributions: Vec<ElasticSubSection>,
    ) -> Result<Self> {
        let interpolation = Tab2::new(
            spi,
            0.0,
            lidp,
            0,
            distributions.len() as i64,
            boundaries,
            interpolants,
        )?;
        Ok(Self {
            sequence: InterpolationSequence::new(interpolation, distributions)?,
        })
    }

    /// Distribution law of this payload
    pub fn law(&self) -> i64 {
        5
    }

    /// Spin of the incident particle
    pub fn spi(&self) -> f64 {
        self.sequence.interpolation().c1()
    }

    /// Identical particle flag
    pub fn lidp(&self) -> i64 {
        self.sequence.interpolation().l1()
    }

    /// Number of incident energies
    pub fn ne(&self) -> usize {
        self.sequence.records().len()
    }

    /// Number of interpolation regions over incident energy
    pub fn nr(&self) -> usize {
        self.sequence.interpolation().nr()
    }

    /// Region boundaries as point indices
    pub fn boundaries(&self) -> &[i64] {
        self.sequence.interpolation().boundaries()
    }

    /// Interpolation scheme of each region
    pub fn interpolants(&self) -> &[i64] {
        self.sequence.interpolation().interpolants()
    }

    /// One sub-record per incident energy
    pub fn distributions(&self) -> &[ElasticSubSection] {
        self.sequence.records()
    }
}

impl Record for ChargedParticleElasticScattering {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        Ok(Self {
            sequence: InterpolationSequence::from_text(cursor, mat, mf, mt)?,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.sequence.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.sequence.nc()
    }
}

/// Closed set of sub-record payload shapes, keyed by each record's LTP
#[derive(Debug, Clone, PartialEq, From)]
pub enum ElasticSubSection {
    /// LTP=1, nuclear amplitude expansion
    NuclearAmplitudeExpansion(NuclearAmplitudeExpansion),
    /// LTP=2, pure Legendre expansion of the nuclear term
    Legendre(LegendreCoefficients),
    /// LTP=12|14|15, tabulated nuclear plus interference term
    NuclearPlusInterference(NuclearPlusInterference),
}

impl ElasticSubSection {
    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data().c2()
    }

    /// Representation flag of this sub-record
    pub fn ltp(&self) -> i64 {
        self.data().l1()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data().npl()
    }

    /// Highest Legendre order, or tabulated point count
    pub fn nl(&self) -> usize {
        self.data().n2() as usize
    }

    fn data(&self) -> &List {
        match self {
            Self::NuclearAmplitudeExpansion(payload) => &payload.data,
            Self::Legendre(payload) => &payload.data,
            Self::NuclearPlusInterference(payload) => &payload.data,
        }
    }
}

impl Record for ElasticSubSection {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let data = List::from_text(cursor, mat, mf, mt)?;
        match data.l1() {
            1 => Ok(Self::NuclearAmplitudeExpansion(
                NuclearAmplitudeExpansion::from_list(data, line)?,
            )),
            2 => Ok(Self::Legendre(LegendreCoefficients::from_list(data, line)?)),
            12 | 14 | 15 => Ok(Self::NuclearPlusInterference(
                NuclearPlusInterference::from_list(data, line)?,
            )),
            value => Err(Error::Discriminant {
                line,
                field: "LTP",
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

/// Nuclear amplitude expansion (LTP=1)
///
/// NL+1 scattering coefficients followed by NL+1 interleaved complex
/// interference coefficients, so NW = 3(NL+1).
#[derive(Debug, Clone, PartialEq)]
pub struct NuclearAmplitudeExpansion {
    data: List,
}

impl NuclearAmplitudeExpansion {
    /// New expansion for one incident energy, validated eagerly
    pub fn new(energy: f64, nl: i64, values: Vec<f64>) -> Result<Self> {
        Self::from_list(List::new(0.0, energy, 1, 0, nl, values), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if data.l1() != 1 {
            return Err(Error::Discriminant {
                line,
                field: "LTP",
                value: data.l1(),
            });
        }
        if data.n2() < 0 {
            return Err(Error::Count {
                line,
                field: "NL",
                expected: 0,
                found: data.n2(),
            });
        }
        let expected = 3 * (data.n2() + 1);
        if data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NW",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Representation flag, always 1
    pub fn ltp(&self) -> i64 {
        self.data.l1()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Highest Legendre order of the expansion
    pub fn nl(&self) -> usize {
        self.data.n2() as usize
    }

    /// The nuclear scattering coefficients b
    pub fn scattering_coefficients(&self) -> &[f64] {
        &self.data.values()[..=self.nl()]
    }

    /// Real parts of the interference coefficients
    pub fn real_interference_coefficients(&self) -> Vec<f64> {
        self.data.values()[self.nl() + 1..]
            .iter()
            .step_by(2)
            .copied()
            .collect()
    }

    /// Imaginary parts of the interference coefficients
    pub fn imaginary_interference_coefficients(&self) -> Vec<f64> {
        self.data.values()[self.nl() + 1..]
            .iter()
            .skip(1)
            .step_by(2)
            .copied()
            .collect()
    }
}

impl Record for NuclearAmplitudeExpansion {
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

/// Pure Legendre expansion of the nuclear term (LTP=2)
///
/// NL+1 coefficients, so NW = NL + 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreCoefficients {
    data: List,
}

impl LegendreCoefficients {
    /// New expansion for one incident energy, validated eagerly
    pub fn new(energy: f64, coefficients: Vec<f64>) -> Result<Self> {
        let nl = coefficients.len() as i64 - 1;
        Self::from_list(List::new(0.0, energy, 2, 0, nl, coefficients), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if data.l1() != 2 {
            return Err(Error::Discriminant {
                line,
                field: "LTP",
                value: data.l1(),
            });
        }
        let expected = data.n2() + 1;
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NW",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Representation flag, always 2
    pub fn ltp(&self) -> i64 {
        self.data.l1()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Highest Legendre order of the expansion
    pub fn nl(&self) -> usize {
        self.data.n2() as usize
    }

    /// The expansion coefficients, order 0 upward
    pub fn coefficients(&self) -> &[f64] {
        self.data.values()
    }
}

impl Record for LegendreCoefficients {
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

/// Tabulated nuclear plus interference term (LTP=12|14|15)
///
/// NL (cosine, probability) pairs, so NW = 2 NL; the LTP value carries
/// the interpolation flavour of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct NuclearPlusInterference {
    data: List,
}

impl NuclearPlusInterference {
    /// New table for one incident energy, validated eagerly
    pub fn new(energy: f64, ltp: i64, values: Vec<f64>) -> Result<Self> {
        let nl = values.len() as i64 / 2;
        Self::from_list(List::new(0.0, energy, ltp, 0, nl, values), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        if !matches!(data.l1(), 12 | 14 | 15) {
            return Err(Error::Discriminant {
                line,
                field: "LTP",
                value: data.l1(),
            });
        }
        let expected = 2 * data.n2();
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NW",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Representation flag carrying the interpolation flavour
    pub fn ltp(&self) -> i64 {
        self.data.l1()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Number of tabulated cosines
    pub fn nl(&self) -> usize {
        self.data.n2() as usize
    }

    /// The scattering cosines
    pub fn cosines(&self) -> Vec<f64> {
        self.data.values().iter().step_by(2).copied().collect()
    }

    /// The probability at each cosine
    pub fn probabilities(&self) -> Vec<f64> {
        self.data.values().iter().skip(1).step_by(2).copied().collect()
    }
}

impl Record for NuclearPlusInterference {
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
