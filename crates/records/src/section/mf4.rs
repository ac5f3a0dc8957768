//! MF4 - angular distributions of secondary particles
//!
//! One distribution per incident energy, as Legendre coefficients or as a
//! tabulated probability over the scattering cosine. The LTT flag on the
//! section head selects the representation; a mixed section carries a
//! Legendre region at low energy followed by a tabulated region above it.

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, InterpolationSequence, List, Record, Tab1};
use crate::section::{read_send, write_send};

// external crates
use derive_more::From;
use log::trace;

/// Angular distribution section
///
/// Head fields plus the representation payload. The LI flag of the second
/// control card is derived from the representation (1 only for the
/// isotropic case) and cross-checked on parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    mt: i32,
    za: f64,
    awr: f64,
    lct: i64,
    nm: i64,
    distributions: Distributions,
}

impl Section {
    /// New section from its head fields and distribution data
    pub fn new(mt: i32, za: f64, awr: f64, lct: i64, nm: i64, distributions: Distributions) -> Self {
        Self {
            mt,
            za,
            awr,
            lct,
            nm,
            distributions,
        }
    }

    /// Section number of the reaction
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

    /// Reference frame flag (1 lab, 2 centre of mass)
    pub fn lct(&self) -> i64 {
        self.lct
    }

    /// Maximum Legendre order used, carried verbatim from the tape
    pub fn nm(&self) -> i64 {
        self.nm
    }

    /// Representation flag
    pub fn ltt(&self) -> i64 {
        self.distributions.ltt()
    }

    /// Isotropy flag, derived from the representation
    pub fn li(&self) -> i64 {
        match self.distributions {
            Distributions::Isotropic => 1,
            _ => 0,
        }
    }

    /// The angular distribution data
    pub fn distributions(&self) -> &Distributions {
        &self.distributions
    }
}

impl Record for Section {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let head = Control::from_text(cursor, mat, mf, mt)?;
        let ltt = head.l2;
        let line2 = cursor.position();
        let cont = Control::from_text(cursor, mat, mf, mt)?;
        let (li, lct, nm) = (cont.l1, cont.l2, cont.n2);

        // the isotropy flag must agree with the representation
        let expected = i64::from(ltt == 0);
        if li != expected {
            return Err(Error::Count {
                line: line2,
                field: "LI",
                expected,
                found: li,
            });
        }

        trace!("reading angular distributions with LTT={ltt}");
        let distributions = match ltt {
            0 => Distributions::Isotropic,
            1 => Distributions::Legendre(InterpolationSequence::from_text(cursor, mat, mf, mt)?),
            2 => Distributions::Tabulated(InterpolationSequence::from_text(cursor, mat, mf, mt)?),
            3 => Distributions::Mixed {
                legendre: InterpolationSequence::from_text(cursor, mat, mf, mt)?,
                tabulated: InterpolationSequence::from_text(cursor, mat, mf, mt)?,
            },
            value => {
                return Err(Error::Discriminant {
                    line,
                    field: "LTT",
                    value,
                })
            }
        };
        read_send(cursor, mat, mf)?;
        Ok(Self {
            mt,
            za: head.c1,
            awr: head.c2,
            lct,
            nm,
            distributions,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(out, self.za, self.awr, 0, self.ltt(), 0, 0, mat, mf, mt);
        write_control(out, 0.0, self.awr, self.li(), self.lct, 0, self.nm, mat, mf, mt);
        let mut lines = 2;
        match &self.distributions {
            Distributions::Isotropic => {}
            Distributions::Legendre(sequence) => lines += sequence.print(out, mat, mf, mt),
            Distributions::Tabulated(sequence) => lines += sequence.print(out, mat, mf, mt),
            Distributions::Mixed {
                legendre,
                tabulated,
            } => {
                lines += legendre.print(out, mat, mf, mt);
                lines += tabulated.print(out, mat, mf, mt);
            }
        }
        write_send(out, mat, mf);
        lines + 1
    }

    fn nc(&self) -> usize {
        2 + match &self.distributions {
            Distributions::Isotropic => 0,
            Distributions::Legendre(sequence) => sequence.nc(),
            Distributions::Tabulated(sequence) => sequence.nc(),
            Distributions::Mixed {
                legendre,
                tabulated,
            } => legendre.nc() + tabulated.nc(),
        }
    }
}

/// Closed set of angular distribution representations, keyed by LTT
#[derive(Debug, Clone, PartialEq, From)]
pub enum Distributions {
    /// LTT=0, all distributions isotropic, no data follows
    #[from(ignore)]
    Isotropic,
    /// LTT=1, Legendre coefficients per incident energy
    Legendre(InterpolationSequence<LegendreCoefficients>),
    /// LTT=2, tabulated probability per incident energy
    Tabulated(InterpolationSequence<TabulatedDistribution>),
    /// LTT=3, a Legendre region followed by a tabulated region
    #[from(ignore)]
    Mixed {
        /// Distributions of the low energy region
        legendre: InterpolationSequence<LegendreCoefficients>,
        /// Distributions of the high energy region
        tabulated: InterpolationSequence<TabulatedDistribution>,
    },
}

impl Distributions {
    /// Representation flag
    pub fn ltt(&self) -> i64 {
        match self {
            Self::Isotropic => 0,
            Self::Legendre(_) => 1,
            Self::Tabulated(_) => 2,
            Self::Mixed { .. } => 3,
        }
    }
}

/// Legendre expansion of the distribution at one incident energy
///
/// List record `[T, E, LT, 0, NL, 0 / a1 ... aNL]`; the zeroth
/// coefficient is implicit through normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreCoefficients {
    data: List,
}

impl LegendreCoefficients {
    /// New expansion for one incident energy
    pub fn new(energy: f64, coefficients: Vec<f64>) -> Self {
        Self {
            data: List::new(0.0, energy, 0, 0, 0, coefficients),
        }
    }

    /// Temperature slot, zero on modern evaluations
    pub fn temperature(&self) -> f64 {
        self.data.c1()
    }

    /// Incident energy of this distribution
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Highest Legendre order of the expansion
    pub fn nl(&self) -> usize {
        self.data.npl()
    }

    /// The expansion coefficients, order 1 upward
    pub fn coefficients(&self) -> &[f64] {
        self.data.values()
    }
}

impl Record for LegendreCoefficients {
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

/// Tabulated distribution over the scattering cosine at one incident energy
///
/// Tab1 record `[T, E, LT, 0, NR, NP / mu, f]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDistribution {
    data: Tab1,
}

impl TabulatedDistribution {
    /// New tabulated distribution for one incident energy
    pub fn new(
        energy: f64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        cosines: Vec<f64>,
        probabilities: Vec<f64>,
    ) -> Result<Self> {
        Ok(Self {
            data: Tab1::new(
                0.0,
                energy,
                0,
                0,
                boundaries,
                interpolants,
                cosines,
                probabilities,
            )?,
        })
    }

    /// Incident energy of this distribution
    pub fn energy(&self) -> f64 {
        self.data.c2()
    }

    /// Number of interpolation regions over the cosine
    pub fn nr(&self) -> usize {
        self.data.nr()
    }

    /// Number of tabulated cosines
    pub fn np(&self) -> usize {
        self.data.np()
    }

    /// The scattering cosines
    pub fn cosines(&self) -> &[f64] {
        self.data.x()
    }

    /// The probability at each cosine
    pub fn probabilities(&self) -> &[f64] {
        self.data.y()
    }
}

impl Record for TabulatedDistribution {
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
