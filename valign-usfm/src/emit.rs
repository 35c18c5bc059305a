use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use valign_core::models::BookGroup;

use crate::consts::{CHAPTER_MARKER, ID_MARKER, VERSE_MARKER};
use crate::naming::BookFileNaming;

///
/// What happened during emission: the files written, and the books
/// whose write failed. One book failing never stops the others.
///
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, std::io::Error)>,
}

impl EmitReport {
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

///
/// Render one book group to its full marker file content.
///
/// Grammar: one `\id` line, then per chapter a `\c` line followed by
/// its `\v` lines. Verse ranges come out as numeric `v1-v2` labels;
/// the input range sentinel never appears here.
///
pub fn render_book(book: &BookGroup) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(book.n_units() + book.chapters.len() + 1);

    lines.push(format!("{} {}", ID_MARKER, book.code));

    for chapter in &book.chapters {
        lines.push(format!("{} {}", CHAPTER_MARKER, chapter.number));
        for unit in &chapter.units {
            lines.push(format!(
                "{} {} {}",
                VERSE_MARKER,
                unit.verse_label(),
                unit.text
            ));
        }
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

///
/// Write one marker file per book group into `output`.
///
/// Each book is rendered fully in memory and written in a single call,
/// so an interrupted run never leaves a partial book file behind. A
/// book whose write fails is recorded in the report and the remaining
/// books still get written.
///
pub fn emit_books(
    books: &[BookGroup],
    output: &Path,
    naming: &dyn BookFileNaming,
) -> Result<EmitReport> {
    fs::create_dir_all(output).with_context(|| {
        format!(
            "There was an error creating the output directory: {:?}",
            output
        )
    })?;

    let pb = ProgressBar::new(books.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} books ({eta})")?
            .progress_chars("##-"),
    );

    let mut report = EmitReport::default();

    for book in books {
        let file_path = output.join(naming.file_name(&book.code));
        let content = render_book(book);

        match fs::write(&file_path, content) {
            Ok(()) => report.written.push(file_path),
            Err(e) => {
                warn!("Failed to write {}: {}", file_path.display(), e);
                report.failed.push((book.code.clone(), e));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(report)
}
