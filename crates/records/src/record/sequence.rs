// internal modules
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::record::{Record, Tab2};

/// Interpolation header gluing together self-describing sub-records
///
/// One [Tab2] header followed by a homogeneous ordered sequence of
/// sub-records, each reading its own header (including its own length and
/// any payload-selecting code) before the container moves on. The
/// sequence length is bound to the header's N2 slot, which the enclosing
/// section exposes under its proper mnemonic (NE, NZ, ...).
///
/// Used wherever a per-point physics table repeats under one
/// interpolation scheme, e.g. one angular distribution per incident
/// energy.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationSequence<R> {
    interpolation: Tab2,
    records: Vec<R>,
}

impl<R: Record> InterpolationSequence<R> {
    /// New sequence, validated against the header's declared count
    pub fn new(interpolation: Tab2, records: Vec<R>) -> Result<Self> {
        if records.len() as i64 != interpolation.n2() {
            return Err(Error::Count {
                line: 0,
                field: "N2",
                expected: interpolation.n2(),
                found: records.len() as i64,
            });
        }
        Ok(Self {
            interpolation,
            records,
        })
    }

    /// The interpolation header
    pub fn interpolation(&self) -> &Tab2 {
        &self.interpolation
    }

    /// The governed sub-records
    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R: Record> Record for InterpolationSequence<R> {
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self> {
        let line = cursor.position();
        let interpolation = Tab2::from_text(cursor, mat, mf, mt)?;
        let count = usize::try_from(interpolation.n2()).map_err(|_| Error::Count {
            line,
            field: "N2",
            expected: 0,
            found: interpolation.n2(),
        })?;
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(R::from_text(cursor, mat, mf, mt)?);
        }
        Ok(Self {
            interpolation,
            records,
        })
    }

    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize {
        let mut lines = self.interpolation.print(out, mat, mf, mt);
        for record in &self.records {
            lines += record.print(out, mat, mf, mt);
        }
        lines
    }

    fn nc(&self) -> usize {
        self.interpolation.nc() + self.records.iter().map(Record::nc).sum::<usize>()
    }
}
