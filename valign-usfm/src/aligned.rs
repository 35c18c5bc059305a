use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use valign_core::errors::AlignError;
use valign_core::models::AlignedLine;
use valign_core::utils::get_dynamic_reader;

use crate::consts::RANGE_SENTINEL;
use crate::vref::VrefTable;

///
/// The flat, line-indexed text of one translation, parallel to a
/// [VrefTable].
///
/// Every line is kept, including empty ones, so that indices stay
/// aligned with the reference table.
///
pub struct AlignedText {
    lines: Vec<AlignedLine>,
}

///
/// Classify one raw line of a verse-aligned file.
///
/// A line is a range marker only when its entire trimmed content is
/// exactly the sentinel. A line that merely contains the sentinel is
/// malformed; the sentinel is stripped and the line demoted to
/// no-text, since the remainder cannot be attributed to any verse.
///
fn classify_line(index: usize, raw: &str) -> AlignedLine {
    let trimmed = raw.trim();

    if trimmed == RANGE_SENTINEL {
        return AlignedLine {
            index,
            text: String::new(),
            is_range: true,
        };
    }

    let text = if trimmed.contains(RANGE_SENTINEL) {
        warn!(
            "Line {} mixes the range sentinel with other text; treating it as untranslated",
            index + 1
        );
        String::new()
    } else {
        trimmed.to_string()
    };

    AlignedLine {
        index,
        text,
        is_range: false,
    }
}

impl AlignedText {
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;

        let mut lines: Vec<AlignedLine> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("There was an error reading line {}", index + 1))?;
            lines.push(classify_line(index, &line));
        }

        Ok(AlignedText { lines })
    }

    pub fn from_lines(raw: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let lines = raw
            .into_iter()
            .enumerate()
            .map(|(index, line)| classify_line(index, line.as_ref()))
            .collect();

        AlignedText { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedLine> {
        self.lines.iter()
    }

    ///
    /// The one hard precondition of the whole pipeline: the text must
    /// have exactly one line per reference. Checked here, once, before
    /// any downstream component runs; nothing re-validates it later.
    ///
    pub fn validate_against(&self, table: &VrefTable) -> Result<(), AlignError> {
        if self.len() != table.len() {
            return Err(AlignError::LengthMismatch {
                refs: table.len(),
                lines: self.len(),
            });
        }
        Ok(())
    }
}
