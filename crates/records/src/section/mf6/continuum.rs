//! LAW=1 - continuum energy-angle distributions
//!
//! A [Tab2] over incident energy whose L1 slot (LANG) selects how every
//! sub-record encodes the angular dependence: Legendre coefficients,
//! Kalbach-Mann systematics, or a tabulated cosine grid. Each sub-record
//! is a list of NEP points of width NA+2: the secondary energy followed
//! by NA+1 angular parameters.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::record::{List, Record, Tab2};

// external crates
use derive_more::From;

/// Continuum energy-angle distribution for one reaction product
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuumEnergyAngle {
    interpolation: Tab2,
    distributions: Vec<EnergyDistribution>,
}

impl ContinuumEnergyAngle {
    /// New distribution, validated eagerly
    pub fn new(
        lang: i64,
        lep: i64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        distributions: Vec<EnergyDistribution>,
    ) -> Result<Self> {
        if !matches!(lang, 1 | 2 | 11..=15) {
            return Err(Error::Discriminant {
                line: 0,
                field: "LANG",
                value: lang,
            });
        }
        for distribution in &distributions {
            if !distribution.matches(lang) {
                return Err(Error::Discriminant {
                    line: 0,
                    field: "LANG",
                    value: lang,
                });
            }
        }
        let interpolation = Tab2::new(
            0.0,
            0.0,
            lang,
            lep,
            distributions.len() as i64,
            boundaries,
            interpolants,
        )?;
        Ok(Self {
            interpolation,
            distributions,
        })
    }

    /// Distribution law of this payload
    pub fn law(&self) -> i64 {
        1
    }

    /// Angular representation flag shared by every sub-record
    pub fn lang(&self) -> i64 {
        self.interpolation.l1()
    }

    /// Secondary energy interpolation scheme
    pub fn lep(&self) -> i64 {
        self.interpolation.l2()
    }

    /// Number of incident energies
    pub fn ne(&self) -> usize {
        self.distributions.len()
    }

    /// Number of interpolation regions over incident energy
    pub fn nr(&self) -> usize {
        self.interpolation.nr()
    }

    /// Region boundaries as point indices
    pub fn boundaries(&self) -> &[i64] {
        self.interpolation.boundaries()
    }

    /// Interpolation scheme of each region
    pub fn interpolants(&self) -> &[i64] {
        self.interpolation.interpolants()
    }

    /// One distribution per incident energy
    pub fn distributions(&self) -> &[EnergyDistribution] {
        &self.distributions
    }
}

impl Record for ContinuumEnergyAngle {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let interpolation = Tab2::from_text(cursor, mat, mf, mt)?;
        let lang = interpolation.l1();
        if !matches!(lang, 1 | 2 | 11..=15) {
            return Err(Error::Discriminant {
                line,
                field: "LANG",
                value: lang,
            });
        }
        let count = usize::try_from(interpolation.n2()).map_err(|_| Error::Count {
            line,
            field: "NE",
            expected: 0,
            found: interpolation.n2(),
        })?;
        let mut distributions = Vec::with_capacity(count);
        for _ in 0..count {
            let sub_line = cursor.position();
            let data = List::from_text(cursor, mat, mf, mt)?;
            distributions.push(match lang {
                1 => EnergyDistribution::Legendre(LegendreCoefficients::from_list(data, sub_line)?),
                2 => EnergyDistribution::KalbachMann(KalbachMann::from_list(data, sub_line)?),
                _ => EnergyDistribution::Tabulated(TabulatedDistribution::from_list(
                    data, sub_line,
                )?),
            });
        }
        Ok(Self {
            interpolation,
            distributions,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        let mut lines = self.interpolation.print(out, mat, mf, mt);
        for distribution in &self.distributions {
            lines += distribution.print(out, mat, mf, mt);
        }
        lines
    }

    fn nc(&self) -> usize {
        self.interpolation.nc()
            + self
                .distributions
                .iter()
                .map(EnergyDistribution::nc)
                .sum::<usize>()
    }
}

/// Closed set of sub-record payload shapes, keyed by the container's LANG
#[derive(Debug, Clone, PartialEq, From)]
pub enum EnergyDistribution {
    /// LANG=1, Legendre coefficients per secondary energy
    Legendre(LegendreCoefficients),
    /// LANG=2, Kalbach-Mann systematics per secondary energy
    KalbachMann(KalbachMann),
    /// LANG=11..15, tabulated cosine grid per secondary energy
    Tabulated(TabulatedDistribution),
}

impl EnergyDistribution {
    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        match self {
            Self::Legendre(data) => data.energy(),
            Self::KalbachMann(data) => data.energy(),
            Self::Tabulated(data) => data.energy(),
        }
    }

    /// Number of discrete secondary energies
    pub fn nd(&self) -> i64 {
        self.data().l1()
    }

    /// Number of angular parameters per point
    pub fn na(&self) -> i64 {
        self.data().l2()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data().npl()
    }

    /// Number of secondary energy points
    pub fn nep(&self) -> usize {
        self.data().n2() as usize
    }

    pub(crate) fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.data().print(out, mat, mf, mt)
    }

    pub(crate) fn nc(&self) -> usize {
        self.data().nc()
    }

    fn data(&self) -> &List {
        match self {
            Self::Legendre(data) => &data.data,
            Self::KalbachMann(data) => &data.data,
            Self::Tabulated(data) => &data.data,
        }
    }

    fn matches(&self, lang: i64) -> bool {
        match self {
            Self::Legendre(_) => lang == 1,
            Self::KalbachMann(_) => lang == 2,
            Self::Tabulated(_) => (11..=15).contains(&lang),
        }
    }
}

// The declared counts of a LAW=1 sub-record must satisfy NW = NEP(NA+2)
fn verify_point_counts(data: &List, line: usize) -> Result<()> {
    if data.l2() < 0 {
        return Err(Error::Count {
            line,
            field: "NA",
            expected: 0,
            found: data.l2(),
        });
    }
    if data.n2() < 0 {
        return Err(Error::Count {
            line,
            field: "NEP",
            expected: 0,
            found: data.n2(),
        });
    }
    let expected = data.n2() * (data.l2() + 2);
    if data.npl() as i64 != expected {
        return Err(Error::Count {
            line,
            field: "NW",
            expected,
            found: data.npl() as i64,
        });
    }
    Ok(())
}

/// Legendre representation of one incident energy (LANG=1)
///
/// Each point holds the secondary energy followed by the coefficients
/// f0 ... fNA.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreCoefficients {
    data: List,
}

impl LegendreCoefficients {
    /// New sub-record for one incident energy, validated eagerly
    pub fn new(energy: f64, nd: i64, na: i64, nep: i64, values: Vec<f64>) -> Result<Self> {
        Self::from_list(List::new(0.0, energy, nd, na, nep, values), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        verify_point_counts(&data, line)?;
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Number of discrete secondary energies
    pub fn nd(&self) -> i64 {
        self.data.l1()
    }

    /// Highest Legendre order of the expansion
    pub fn na(&self) -> i64 {
        self.data.l2()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Number of secondary energy points
    pub fn nep(&self) -> usize {
        self.data.n2() as usize
    }

    /// The secondary energies
    pub fn energies(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data.values().iter().step_by(width).copied().collect()
    }

    /// Coefficients f0 ... fNA for each secondary energy
    pub fn coefficients(&self) -> Vec<&[f64]> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| &point[1..])
            .collect()
    }

    /// The order zero coefficient at each secondary energy
    pub fn total_emission_probabilities(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| point[1])
            .collect()
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

/// Kalbach-Mann representation of one incident energy (LANG=2)
///
/// Each point holds the secondary energy, the total emission probability,
/// the precompound fraction r and, when NA=2, the angular distribution
/// slope a.
#[derive(Debug, Clone, PartialEq)]
pub struct KalbachMann {
    data: List,
}

impl KalbachMann {
    /// New sub-record for one incident energy, validated eagerly
    pub fn new(energy: f64, nd: i64, na: i64, nep: i64, values: Vec<f64>) -> Result<Self> {
        Self::from_list(List::new(0.0, energy, nd, na, nep, values), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        verify_point_counts(&data, line)?;
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Number of discrete secondary energies
    pub fn nd(&self) -> i64 {
        self.data.l1()
    }

    /// Number of angular parameters per point (1 or 2)
    pub fn na(&self) -> i64 {
        self.data.l2()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Number of secondary energy points
    pub fn nep(&self) -> usize {
        self.data.n2() as usize
    }

    /// The secondary energies
    pub fn energies(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data.values().iter().step_by(width).copied().collect()
    }

    /// The total emission probability at each secondary energy
    pub fn total_emission_probabilities(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| point[1])
            .collect()
    }

    /// The precompound fraction r at each secondary energy
    pub fn precompound_fractions(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| point[2])
            .collect()
    }

    /// The angular distribution slope a at each secondary energy
    ///
    /// Empty when NA=1, where the slope is derived from systematics.
    pub fn slopes(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .filter_map(|point| point.get(3).copied())
            .collect()
    }
}

impl Record for KalbachMann {
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

/// Tabulated representation of one incident energy (LANG=11..15)
///
/// Each point holds the secondary energy, the total emission probability
/// and NA/2 (cosine, probability) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDistribution {
    data: List,
}

impl TabulatedDistribution {
    /// New sub-record for one incident energy, validated eagerly
    pub fn new(energy: f64, nd: i64, na: i64, nep: i64, values: Vec<f64>) -> Result<Self> {
        Self::from_list(List::new(0.0, energy, nd, na, nep, values), 0)
    }

    pub(crate) fn from_list(data: List, line: usize) -> Result<Self> {
        verify_point_counts(&data, line)?;
        Ok(Self { data })
    }

    /// Incident energy of this sub-record
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Number of discrete secondary energies
    pub fn nd(&self) -> i64 {
        self.data.l1()
    }

    /// Number of angular parameters per point
    pub fn na(&self) -> i64 {
        self.data.l2()
    }

    /// Total value count of the sub-record
    pub fn nw(&self) -> usize {
        self.data.npl()
    }

    /// Number of secondary energy points
    pub fn nep(&self) -> usize {
        self.data.n2() as usize
    }

    /// The secondary energies
    pub fn energies(&self) -> Vec<f64> {
        let width = self.data.l2() as usize + 2;
        self.data.values().iter().step_by(width).copied().collect()
    }

    /// The scattering cosines at each secondary energy
    pub fn cosines(&self) -> Vec<Vec<f64>> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| point[2..].iter().step_by(2).copied().collect())
            .collect()
    }

    /// The probability at each cosine of each secondary energy
    pub fn probabilities(&self) -> Vec<Vec<f64>> {
        let width = self.data.l2() as usize + 2;
        self.data
            .values()
            .chunks(width)
            .map(|point| point[2..].iter().skip(1).step_by(2).copied().collect())
            .collect()
    }
}

impl Record for TabulatedDistribution {
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
