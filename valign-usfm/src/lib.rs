//! Conversion of verse-aligned ("vref") flat text files into USFM
//! marker files.
//!
//! A vref-aligned file has one line per verse of a fixed canonical
//! versification; line *i* is the same verse in every file. Empty
//! lines are untranslated verses, and the literal `<range>` marks a
//! verse folded into the previous translated verse. This crate turns
//! such a file into one `\id`/`\c`/`\v` marker file per book.

pub mod aligned;
pub mod consts;
pub mod convert;
pub mod emit;
pub mod hierarchy;
pub mod naming;
pub mod resolve;
pub mod vref;

// Re-exports
pub use aligned::AlignedText;
pub use convert::{convert_aligned_file, ConvertOptions};
pub use emit::{emit_books, EmitReport};
pub use hierarchy::group_by_book;
pub use naming::{BookFileNaming, ParatextNaming, PlainNaming};
pub use resolve::{flatten_units, resolve_units, OrphanRangePolicy};
pub use vref::{ReferenceSource, VrefTable};
