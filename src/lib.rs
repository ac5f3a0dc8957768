//! `rendf` is a semi-modular toolkit of fast and reliable libraries for
//! reading and writing ENDF-6 formatted nuclear data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use rendf_format as format;

#[cfg(feature = "records")]
#[cfg_attr(docsrs, doc(cfg(feature = "records")))]
#[doc(inline)]
pub use rendf_records as records;
