//! MF6 - product energy-angle distributions
//!
//! One section per reaction, holding NK reaction products. Every product
//! carries a multiplicity table whose header also declares the
//! distribution law (LAW) of the records that follow it, so the payload
//! shape of each product is dispatched on a code read from the data.
//!
//! | LAW | Payload                                       |
//! | --- | --------------------------------------------- |
//! | 0   | none, the law is declared but no data follows |
//! | 1   | [ContinuumEnergyAngle]                        |
//! | 5   | [ChargedParticleElasticScattering]            |

// Modules
pub mod continuum;
pub mod elastic;

// Flatten the container types; leaf payloads stay under their law module
pub use continuum::{ContinuumEnergyAngle, EnergyDistribution};
pub use elastic::{ChargedParticleElasticScattering, ElasticSubSection};

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, Record, Tab1};
use crate::section::{read_send, write_send};

// external crates
use derive_more::From;
use log::trace;

/// Product energy-angle distribution section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    mt: i32,
    za: f64,
    awr: f64,
    jp: i64,
    lct: i64,
    products: Vec<ReactionProduct>,
}

impl Section {
    /// New section from its head fields and reaction products
    pub fn new(
        mt: i32,
        za: f64,
        awr: f64,
        jp: i64,
        lct: i64,
        products: Vec<ReactionProduct>,
    ) -> Self {
        Self {
            mt,
            za,
            awr,
            jp,
            lct,
            products,
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

    /// Promptness flag for fission products
    pub fn jp(&self) -> i64 {
        self.jp
    }

    /// Reference frame flag (1 lab, 2 centre of mass)
    pub fn lct(&self) -> i64 {
        self.lct
    }

    /// Number of reaction products
    pub fn nk(&self) -> usize {
        self.products.len()
    }

    /// The reaction products
    pub fn products(&self) -> &[ReactionProduct] {
        &self.products
    }
}

impl Record for Section {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let head = Control::from_text(cursor, mat, mf, mt)?;
        let count = usize::try_from(head.n1).map_err(|_| Error::Count {
            line,
            field: "NK",
            expected: 0,
            found: head.n1,
        })?;
        trace!("reading {count} reaction products");
        let mut products = Vec::with_capacity(count);
        for _ in 0..count {
            products.push(ReactionProduct::from_text(cursor, mat, mf, mt)?);
        }
        read_send(cursor, mat, mf)?;
        Ok(Self {
            mt,
            za: head.c1,
            awr: head.c2,
            jp: head.l1,
            lct: head.l2,
            products,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.za,
            self.awr,
            self.jp,
            self.lct,
            self.products.len() as i64,
            0,
            mat,
            mf,
            mt,
        );
        let mut lines = 1;
        for product in &self.products {
            lines += product.print(out, mat, mf, mt);
        }
        write_send(out, mat, mf);
        lines + 1
    }

    fn nc(&self) -> usize {
        1 + self.products.iter().map(Record::nc).sum::<usize>()
    }
}

/// One reaction product: multiplicity plus its distribution
///
/// The multiplicity header declares the distribution law; value
/// construction cross-checks the declared law against the supplied
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionProduct {
    multiplicity: Multiplicity,
    distribution: Distribution,
}

impl ReactionProduct {
    /// New reaction product, validated eagerly
    pub fn new(multiplicity: Multiplicity, distribution: Distribution) -> Result<Self> {
        if multiplicity.law() != distribution.law() {
            return Err(Error::Count {
                line: 0,
                field: "LAW",
                expected: multiplicity.law(),
                found: distribution.law(),
            });
        }
        Ok(Self {
            multiplicity,
            distribution,
        })
    }

    /// ZA identifier of the product
    pub fn zap(&self) -> f64 {
        self.multiplicity.zap()
    }

    /// Atomic weight ratio of the product
    pub fn awp(&self) -> f64 {
        self.multiplicity.awp()
    }

    /// Isomeric state flag of the product
    pub fn lip(&self) -> i64 {
        self.multiplicity.lip()
    }

    /// Distribution law of the product
    pub fn law(&self) -> i64 {
        self.multiplicity.law()
    }

    /// The multiplicity table
    pub fn multiplicity(&self) -> &Multiplicity {
        &self.multiplicity
    }

    /// The distribution payload
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }
}

impl Record for ReactionProduct {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let multiplicity = Multiplicity::from_text(cursor, mat, mf, mt)?;
        let distribution = match multiplicity.law() {
            0 => Distribution::Unknown,
            1 => Distribution::ContinuumEnergyAngle(ContinuumEnergyAngle::from_text(
                cursor, mat, mf, mt,
            )?),
            5 => Distribution::ChargedParticleElastic(
                ChargedParticleElasticScattering::from_text(cursor, mat, mf, mt)?,
            ),
            value => {
                return Err(Error::Discriminant {
                    line,
                    field: "LAW",
                    value,
                })
            }
        };
        Ok(Self {
            multiplicity,
            distribution,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        self.multiplicity.print(out, mat, mf, mt) + self.distribution.print(out, mat, mf, mt)
    }

    fn nc(&self) -> usize {
        self.multiplicity.nc() + self.distribution.nc()
    }
}

/// Product multiplicity table
///
/// Tab1 record `[ZAP, AWP, LIP, LAW, NR, NP / E, Y]`; the L2 slot
/// declares the distribution law of the records following the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplicity {
    data: Tab1,
}

impl Multiplicity {
    /// New multiplicity table, validated eagerly
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        zap: f64,
        awp: f64,
        lip: i64,
        law: i64,
        boundaries: Vec<i64>,
        interpolants: Vec<i64>,
        energies: Vec<f64>,
        multiplicities: Vec<f64>,
    ) -> Result<Self> {
        Ok(Self {
            data: Tab1::new(
                zap,
                awp,
                lip,
                law,
                boundaries,
                interpolants,
                energies,
                multiplicities,
            )?,
        })
    }

    /// ZA identifier of the product
    pub fn zap(&self) -> f64 {
        self.data.c1()
    }

    /// Atomic weight ratio of the product
    pub fn awp(&self) -> f64 {
        self.data.c2()
    }

    /// Isomeric state flag of the product
    pub fn lip(&self) -> i64 {
        self.data.l1()
    }

    /// Distribution law declared for the product
    pub fn law(&self) -> i64 {
        self.data.l2()
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

    /// The product yield at each incident energy
    pub fn multiplicities(&self) -> &[f64] {
        self.data.y()
    }
}

impl Record for Multiplicity {
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

/// Closed set of distribution payloads, keyed by the declared LAW
#[derive(Debug, Clone, PartialEq, From)]
pub enum Distribution {
    /// LAW=0, a law is declared but no records follow
    #[from(ignore)]
    Unknown,
    /// LAW=1, continuum energy-angle distribution
    ContinuumEnergyAngle(ContinuumEnergyAngle),
    /// LAW=5, charged particle elastic scattering
    ChargedParticleElastic(ChargedParticleElasticScattering),
}

impl Distribution {
    /// Distribution law of the payload
    pub fn law(&self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::ContinuumEnergyAngle(_) => 1,
            Self::ChargedParticleElastic(_) => 5,
        }
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        match self {
            Self::Unknown => 0,
            Self::ContinuumEnergyAngle(payload) => payload.print(out, mat, mf, mt),
            Self::ChargedParticleElastic(payload) => payload.print(out, mat, mf, mt),
        }
    }

    fn nc(&self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::ContinuumEnergyAngle(payload) => payload.nc(),
            Self::ChargedParticleElastic(payload) => payload.nc(),
        }
    }
}
