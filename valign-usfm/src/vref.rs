use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use valign_core::errors::AlignError;
use valign_core::models::VerseRef;
use valign_core::utils::get_dynamic_reader;

///
/// A source of canonical verse references, in table order.
///
/// Implement this to supply an alternate versification scheme; every
/// downstream component detects book and chapter boundaries from the
/// loaded references alone, so swapping the source changes nothing
/// else.
///
pub trait ReferenceSource {
    fn load_refs(&self) -> Result<Vec<VerseRef>>;
}

///
/// The canonical verse reference table, indexed by line position.
///
/// Line *i* of every aligned text file corresponds to `get(i)` here.
///
#[derive(Debug)]
pub struct VrefTable {
    refs: Vec<VerseRef>,
}

impl VrefTable {
    ///
    /// Load a vref table from a file with one `<CODE> <c>:<v>`
    /// reference per line. Blank lines are skipped; anything else
    /// that fails the grammar is a fatal format error carrying the
    /// 1-based line number.
    ///
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;

        let mut refs: Vec<VerseRef> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("There was an error reading line {}", index + 1))?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let vref: VerseRef = trimmed.parse().map_err(|_| AlignError::VrefFormat {
                line: index + 1,
                content: line.clone(),
            })?;

            refs.push(vref);
        }

        Ok(VrefTable { refs })
    }

    pub fn from_source(source: &impl ReferenceSource) -> Result<Self> {
        Ok(VrefTable {
            refs: source.load_refs()?,
        })
    }

    pub fn from_refs(refs: Vec<VerseRef>) -> Self {
        VrefTable { refs }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VerseRef> {
        self.refs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VerseRef> {
        self.refs.iter()
    }

    pub fn contains_book(&self, code: &str) -> bool {
        self.refs.iter().any(|r| r.book == code)
    }
}

/// [ReferenceSource] backed by a vref file on disk.
pub struct FileReferenceSource {
    path: PathBuf,
}

impl FileReferenceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileReferenceSource { path: path.into() }
    }
}

impl ReferenceSource for FileReferenceSource {
    fn load_refs(&self) -> Result<Vec<VerseRef>> {
        let table = VrefTable::from_file(&self.path)?;
        Ok(table.refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;

    fn write_temp_vref(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[rstest]
    fn test_load_table() {
        let file = write_temp_vref(&["GEN 1:1", "GEN 1:2", "GEN 2:1", "EXO 1:1"]);
        let table = VrefTable::from_file(file.path()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.get(2), Some(&VerseRef::new("GEN", 2, 1)));
        assert_eq!(table.get(4), None);
    }

    #[rstest]
    fn test_blank_lines_skipped() {
        let file = write_temp_vref(&["GEN 1:1", "", "GEN 1:2"]);
        let table = VrefTable::from_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
    }

    #[rstest]
    fn test_bad_line_is_format_error() {
        let file = write_temp_vref(&["GEN 1:1", "not a reference"]);
        let result = VrefTable::from_file(file.path());

        assert_eq!(result.is_err(), true);
        let err = result.unwrap_err();
        let err = err.downcast_ref::<AlignError>().unwrap();
        match err {
            AlignError::VrefFormat { line, content } => {
                assert_eq!(*line, 2);
                assert_eq!(content, "not a reference");
            }
            other => panic!("Expected VrefFormat, got {:?}", other),
        }
    }

    #[rstest]
    fn test_contains_book() {
        let file = write_temp_vref(&["GEN 1:1", "EXO 1:1"]);
        let table = VrefTable::from_file(file.path()).unwrap();

        assert_eq!(table.contains_book("EXO"), true);
        assert_eq!(table.contains_book("REV"), false);
    }

    #[rstest]
    fn test_file_reference_source() {
        let file = write_temp_vref(&["GEN 1:1", "GEN 1:2"]);
        let source = FileReferenceSource::new(file.path());
        let table = VrefTable::from_source(&source).unwrap();

        assert_eq!(table.len(), 2);
    }
}
