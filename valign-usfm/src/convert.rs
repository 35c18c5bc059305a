use std::path::Path;

use anyhow::Result;
use log::info;

use valign_core::errors::AlignError;

use crate::aligned::AlignedText;
use crate::emit::{emit_books, EmitReport};
use crate::hierarchy::group_by_book;
use crate::naming::{ParatextNaming, PlainNaming};
use crate::resolve::{resolve_units, OrphanRangePolicy};
use crate::vref::VrefTable;

#[derive(Debug, Default)]
pub struct ConvertOptions {
    /// Convert only this book (e.g. `GEN`). Must exist in the table.
    pub book: Option<String>,
    /// Paratext project identifier; switches on Paratext file naming
    /// and places output under a `<project_id>/` subdirectory.
    pub project_id: Option<String>,
    pub orphan_policy: OrphanRangePolicy,
}

///
/// Convert a verse-aligned text file into per-book USFM marker files.
///
/// Reads the reference table and the aligned text, checks the length
/// precondition, resolves verse ranges, groups by book and chapter,
/// and writes one marker file per book into `output`.
///
/// # Arguments:
/// - input: path to the aligned text file (one line per table entry)
/// - vref: path to the canonical reference table
/// - output: directory the marker files go into
/// - options: book filter, project id, orphan range policy
///
pub fn convert_aligned_file(
    input: &Path,
    vref: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<EmitReport> {
    let table = VrefTable::from_file(vref)?;
    info!("Loaded {} verse references from {:?}", table.len(), vref);

    let text = AlignedText::from_file(input)?;
    info!("Loaded {} aligned lines from {:?}", text.len(), input);

    // the one structural invariant everything downstream assumes
    text.validate_against(&table)?;

    if let Some(ref book) = options.book {
        if !table.contains_book(book) {
            return Err(AlignError::UnknownBook(book.clone()).into());
        }
    }

    let units = resolve_units(&table, &text, options.orphan_policy)?;
    let books = group_by_book(units, options.book.as_deref());
    info!("Converting {} book(s)", books.len());

    match options.project_id {
        Some(ref project_id) => {
            let output = output.join(project_id);
            let naming = ParatextNaming::new(project_id.clone());
            emit_books(&books, &output, &naming)
        }
        None => emit_books(&books, output, &PlainNaming),
    }
}
