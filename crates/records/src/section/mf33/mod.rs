//! MF33 - covariances of neutron cross sections
//!
//! One section per reaction, holding NL blocks of covariances against
//! other reactions. Each block carries NK derived (NC-type) and NI
//! explicit (NI-type) components; the shape of every component is
//! selected by a code read from its own header (LTY for derived, LB for
//! explicit components).

// Modules
mod derived;
mod explicit;

// Flatten
pub use derived::{DerivedCovariance, DerivedRatioToStandard, DerivedRedundant};
pub use explicit::{CovariancePairs, ExplicitCovariance, RectangularMatrix, SquareMatrix};

// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::line::write_control;
use crate::record::{Control, Record};
use crate::section::{read_send, write_send};

// external crates
use log::trace;

/// Cross section covariance section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    mt: i32,
    za: f64,
    awr: f64,
    mtl: i64,
    blocks: Vec<ReactionBlock>,
}

impl Section {
    /// New section from its head fields and reaction blocks
    pub fn new(mt: i32, za: f64, awr: f64, mtl: i64, blocks: Vec<ReactionBlock>) -> Self {
        Self {
            mt,
            za,
            awr,
            mtl,
            blocks,
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

    /// Lumped covariance target section, zero when not lumped
    pub fn mtl(&self) -> i64 {
        self.mtl
    }

    /// Number of reaction blocks
    pub fn nl(&self) -> usize {
        self.blocks.len()
    }

    /// The reaction blocks
    pub fn blocks(&self) -> &[ReactionBlock] {
        &self.blocks
    }
}

impl Record for Section {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let head = Control::from_text(cursor, mat, mf, mt)?;
        let count = usize::try_from(head.n2).map_err(|_| Error::Count {
            line,
            field: "NL",
            expected: 0,
            found: head.n2,
        })?;
        trace!("reading {count} covariance blocks");
        let mut blocks = Vec::with_capacity(count);
        for _ in 0..count {
            blocks.push(ReactionBlock::from_text(cursor, mat, mf, mt)?);
        }
        read_send(cursor, mat, mf)?;
        Ok(Self {
            mt,
            za: head.c1,
            awr: head.c2,
            mtl: head.l2,
            blocks,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.za,
            self.awr,
            0,
            self.mtl,
            0,
            self.blocks.len() as i64,
            mat,
            mf,
            mt,
        );
        let mut lines = 1;
        for block in &self.blocks {
            lines += block.print(out, mat, mf, mt);
        }
        write_send(out, mat, mf);
        lines + 1
    }

    fn nc(&self) -> usize {
        1 + self.blocks.iter().map(Record::nc).sum::<usize>()
    }
}

/// Covariances of one reaction pair
///
/// Control card `[XMF1, XLFS1, MAT1, MT1, NK, NI]` followed by the NK
/// derived and NI explicit components.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionBlock {
    xmf1: f64,
    xlfs1: f64,
    mat1: i64,
    mt1: i64,
    derived: Vec<DerivedCovariance>,
    explicit: Vec<ExplicitCovariance>,
}

impl ReactionBlock {
    /// New reaction block from its header fields and components
    pub fn new(
        xmf1: f64,
        xlfs1: f64,
        mat1: i64,
        mt1: i64,
        derived: Vec<DerivedCovariance>,
        explicit: Vec<ExplicitCovariance>,
    ) -> Self {
        Self {
            xmf1,
            xlfs1,
            mat1,
            mt1,
            derived,
            explicit,
        }
    }

    /// File number of the second reaction, zero meaning MF33
    pub fn xmf1(&self) -> f64 {
        self.xmf1
    }

    /// Final excited state of the second reaction
    pub fn xlfs1(&self) -> f64 {
        self.xlfs1
    }

    /// Material number of the second reaction, zero meaning this material
    pub fn mat1(&self) -> i64 {
        self.mat1
    }

    /// Section number of the second reaction
    pub fn mt1(&self) -> i64 {
        self.mt1
    }

    /// Number of derived components
    pub fn nk(&self) -> usize {
        self.derived.len()
    }

    /// Number of explicit components
    pub fn ni(&self) -> usize {
        self.explicit.len()
    }

    /// The derived (NC-type) components
    pub fn derived(&self) -> &[DerivedCovariance] {
        &self.derived
    }

    /// The explicit (NI-type) components
    pub fn explicit(&self) -> &[ExplicitCovariance] {
        &self.explicit
    }
}

impl Record for ReactionBlock {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let header = Control::from_text(cursor, mat, mf, mt)?;
        let nk = usize::try_from(header.n1).map_err(|_| Error::Count {
            line,
            field: "NK",
            expected: 0,
            found: header.n1,
        })?;
        let ni = usize::try_from(header.n2).map_err(|_| Error::Count {
            line,
            field: "NI",
            expected: 0,
            found: header.n2,
        })?;
        let mut derived = Vec::with_capacity(nk);
        for _ in 0..nk {
            derived.push(DerivedCovariance::from_text(cursor, mat, mf, mt)?);
        }
        let mut explicit = Vec::with_capacity(ni);
        for _ in 0..ni {
            explicit.push(ExplicitCovariance::from_text(cursor, mat, mf, mt)?);
        }
        Ok(Self {
            xmf1: header.c1,
            xlfs1: header.c2,
            mat1: header.l1,
            mt1: header.l2,
            derived,
            explicit,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        write_control(
            out,
            self.xmf1,
            self.xlfs1,
            self.mat1,
            self.mt1,
            self.derived.len() as i64,
            self.explicit.len() as i64,
            mat,
            mf,
            mt,
        );
        let mut lines = 1;
        for component in &self.derived {
            lines += component.print(out, mat, mf, mt);
        }
        for component in &self.explicit {
            lines += component.print(out, mat, mf, mt);
        }
        lines
    }

    fn nc(&self) -> usize {
        1 + self.derived.iter().map(Record::nc).sum::<usize>()
            + self.explicit.iter().map(Record::nc).sum::<usize>()
    }
}
