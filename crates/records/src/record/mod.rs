//! The generic record family every section is assembled from

// Modules
mod control;
mod directory;
mod list;
mod sequence;
mod tab1;
mod tab2;

// Flatten
pub use control::Control;
pub use directory::Directory;
pub use list::List;
pub use sequence::InterpolationSequence;
pub use tab1::Tab1;
pub use tab2::Tab2;

// internal modules
use crate::cursor::Cursor;
use crate::error::Result;

/// Contract shared by every record and section type
///
/// Values are immutable once constructed, either from explicit typed
/// fields (validated eagerly) or by consuming cards from a [Cursor]. The
/// inverse operations never fail: printing is a pure projection of
/// already-validated state.
pub trait Record: Sized {
    /// Streaming constructor
    ///
    /// Consumes cards from the cursor, verifying the identity tail of
    /// every card against `mat`/`mf`/`mt` and advancing the cursor by the
    /// number of cards read. No partial value survives a failure.
    fn from_text(cursor: &mut Cursor, mat: i32, mf: i32, mt: i32) -> Result<Self>;

    /// Write the value stamped with the given identity
    ///
    /// Returns the number of cards written. For section types this
    /// includes the terminal sentinel card, which [nc](Record::nc)
    /// excludes.
    fn print(&self, out: &mut String, mat: i32, mf: i32, mt: i32) -> usize;

    /// Number of cards the value occupies, recomputed from state
    fn nc(&self) -> usize;
}
