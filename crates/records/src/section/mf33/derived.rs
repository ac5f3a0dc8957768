//! NC-type sub-subsections: covariances derived from other evaluations
//!
//! A flag card `[0, 0, 0, LTY, 0, 0]` followed by one list record whose
//! layout depends on LTY: a redundant-reaction sum rule (LTY=0) or a
//! ratio to a standard cross section (LTY=1..3).

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, List, Record};

// external crates
use derive_more::From;

/// Closed set of derived covariance shapes, keyed by LTY
#[derive(Debug, Clone, PartialEq, From)]
pub enum DerivedCovariance {
    /// LTY=0, derived through a redundant-reaction sum rule
    Redundant(DerivedRedundant),
    /// LTY=1..3, derived as a ratio to a standard cross section
    RatioToStandard(DerivedRatioToStandard),
}

impl DerivedCovariance {
    /// Procedure flag of this sub-subsection
    pub fn lty(&self) -> i64 {
        match self {
            Self::Redundant(_) => 0,
            Self::RatioToStandard(payload) => payload.lty(),
        }
    }
}

impl Record for DerivedCovariance {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let flag = Control::from_text(cursor, mat, mf, mt)?;
        let sub_line = cursor.position();
        let data = List::from_text(cursor, mat, mf, mt)?;
        match flag.l2 {
            0 => Ok(Self::Redundant(DerivedRedundant::from_list(
                data, sub_line,
            )?)),
            1..=3 => Ok(Self::RatioToStandard(DerivedRatioToStandard::from_list(
                flag.l2, data, sub_line,
            )?)),
            value => Err(Error::Discriminant {
                line,
                field: "LTY",
                value,
            }),
        }
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(out, 0.0, 0.0, 0, self.lty(), 0, 0, mat, mf, mt);
        1 + match self {
            Self::Redundant(payload) => payload.data.print(out, mat, mf, mt),
            Self::RatioToStandard(payload) => payload.data.print(out, mat, mf, mt),
        }
    }

    fn nc(&self) -> usize {
        1 + match self {
            Self::Redundant(payload) => payload.data.nc(),
            Self::RatioToStandard(payload) => payload.data.nc(),
        }
    }
}

/// Covariance derived through a redundant-reaction sum rule (LTY=0)
///
/// List record `[E1, E2, 0, 0, 2 NCI, NCI / C, XMT ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRedundant {
    data: List,
}

impl DerivedRedundant {
    /// New sum rule over `(coefficient, reaction)` pairs, validated eagerly
    pub fn new(
        lower: f64,
        upper: f64,
        coefficients: Vec<f64>,
        reactions: Vec<f64>,
    ) -> Result<Self> {
        if reactions.len() != coefficients.len() {
            return Err(Error::Count {
                line: 0,
                field: "NCI",
                expected: coefficients.len() as i64,
                found: reactions.len() as i64,
            });
        }
        let count = coefficients.len() as i64;
        let values = coefficients
            .into_iter()
            .zip(reactions)
            .flat_map(|(coefficient, reaction)| [coefficient, reaction])
            .collect();
        Self::from_list(List::new(lower, upper, 0, 0, count, values), 0)
    }

    fn from_list(data: List, line: usize) -> Result<Self> {
        let expected = 2 * data.n2();
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NCI",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { data })
    }

    /// Lower energy bound of the derivation range
    pub fn lower_energy(&self) -> f64 {
        self.data.c1()
    }

    /// Upper energy bound of the derivation range
    pub fn upper_energy(&self) -> f64 {
        self.data.c2()
    }

    /// Number of contributing reactions
    pub fn nci(&self) -> usize {
        self.data.n2() as usize
    }

    /// Sum rule coefficient of each contributing reaction
    pub fn coefficients(&self) -> Vec<f64> {
        self.data.values().iter().step_by(2).copied().collect()
    }

    /// Section number of each contributing reaction
    pub fn reactions(&self) -> Vec<f64> {
        self.data.values().iter().skip(1).step_by(2).copied().collect()
    }
}

/// Covariance derived as a ratio to a standard cross section (LTY=1..3)
///
/// List record `[E1, E2, MATS, MTS, 2 NEI + 2, NEI / XMFS, XLFSS,
/// E, WE ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRatioToStandard {
    lty: i64,
    data: List,
}

impl DerivedRatioToStandard {
    /// New ratio to a standard, validated eagerly
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lty: i64,
        lower: f64,
        upper: f64,
        standard_material: i64,
        standard_section: i64,
        standard_file: f64,
        standard_state: f64,
        energies: Vec<f64>,
        weights: Vec<f64>,
    ) -> Result<Self> {
        if !matches!(lty, 1..=3) {
            return Err(Error::Discriminant {
                line: 0,
                field: "LTY",
                value: lty,
            });
        }
        if weights.len() != energies.len() {
            return Err(Error::Count {
                line: 0,
                field: "NEI",
                expected: energies.len() as i64,
                found: weights.len() as i64,
            });
        }
        let count = energies.len() as i64;
        let mut values = vec![standard_file, standard_state];
        values.extend(
            energies
                .into_iter()
                .zip(weights)
                .flat_map(|(energy, weight)| [energy, weight]),
        );
        Self::from_list(
            lty,
            List::new(
                lower,
                upper,
                standard_material,
                standard_section,
                count,
                values,
            ),
            0,
        )
    }

    fn from_list(lty: i64, data: List, line: usize) -> Result<Self> {
        let expected = 2 * data.n2() + 2;
        if data.n2() < 0 || data.npl() as i64 != expected {
            return Err(Error::Count {
                line,
                field: "NEI",
                expected,
                found: data.npl() as i64,
            });
        }
        Ok(Self { lty, data })
    }

    /// Procedure flag of the derivation (1, 2 or 3)
    pub fn lty(&self) -> i64 {
        self.lty
    }

    /// Lower energy bound of the derivation range
    pub fn lower_energy(&self) -> f64 {
        self.data.c1()
    }

    /// Upper energy bound of the derivation range
    pub fn upper_energy(&self) -> f64 {
        self.data.c2()
    }

    /// Material number of the standard
    pub fn standard_material(&self) -> i64 {
        self.data.l1()
    }

    /// Section number of the standard
    pub fn standard_section(&self) -> i64 {
        self.data.l2()
    }

    /// File number of the standard
    pub fn standard_file(&self) -> f64 {
        self.data.values()[0]
    }

    /// Final excited state of the standard
    pub fn standard_state(&self) -> f64 {
        self.data.values()[1]
    }

    /// Number of weighted energy points
    pub fn nei(&self) -> usize {
        self.data.n2() as usize
    }

    /// The weighted energies
    pub fn energies(&self) -> Vec<f64> {
        self.data.values()[2..].iter().step_by(2).copied().collect()
    }

    /// The weight at each energy
    pub fn weights(&self) -> Vec<f64> {
        self.data.values()[2..]
            .iter()
            .skip(1)
            .step_by(2)
            .copied()
            .collect()
    }
}
