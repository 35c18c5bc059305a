use log::warn;

use valign_core::errors::AlignError;
use valign_core::models::VerseUnit;

use crate::aligned::AlignedText;
use crate::consts::RANGE_SENTINEL;
use crate::vref::VrefTable;

///
/// What to do with a range marker that has no open verse to attach
/// to, or whose reference crosses a chapter or book boundary.
///
/// Such markers show up in malformed but otherwise processable files,
/// so the default is to drop them with a warning.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanRangePolicy {
    #[default]
    Warn,
    Strict,
}

///
/// Collapse the flat (reference, line) pairs into verse units.
///
/// The scan keeps at most one open unit. A translated line closes the
/// previous unit and opens a new one; a range line in the same chapter
/// extends the open unit's end reference; an empty line closes
/// whatever is open. Untranslated verses therefore leave no unit
/// behind at all, and the output is strictly increasing in reference
/// order.
///
/// The caller must have validated the table/text lengths already.
///
pub fn resolve_units(
    table: &VrefTable,
    text: &AlignedText,
    policy: OrphanRangePolicy,
) -> Result<Vec<VerseUnit>, AlignError> {
    let mut units: Vec<VerseUnit> = Vec::new();
    let mut open: Option<VerseUnit> = None;

    for line in text.iter() {
        // infallible after validate_against
        let vref = table
            .get(line.index)
            .expect("aligned text longer than reference table");

        if line.is_range {
            match open {
                Some(ref mut unit) if unit.start.same_chapter(vref) => {
                    unit.end = vref.clone();
                }
                _ => {
                    // leading marker, or a marker pointing across a
                    // chapter/book boundary; never merged
                    if let Some(unit) = open.take() {
                        units.push(unit);
                    }
                    match policy {
                        OrphanRangePolicy::Strict => {
                            return Err(AlignError::OrphanRange {
                                line: line.index + 1,
                            });
                        }
                        OrphanRangePolicy::Warn => {
                            warn!(
                                "Orphaned range marker at line {} ({}); dropping it",
                                line.index + 1,
                                vref
                            );
                        }
                    }
                }
            }
        } else if line.text.is_empty() {
            // an empty line always terminates a range
            if let Some(unit) = open.take() {
                units.push(unit);
            }
        } else {
            if let Some(unit) = open.take() {
                units.push(unit);
            }
            open = Some(VerseUnit::single(vref.clone(), line.text.clone()));
        }
    }

    if let Some(unit) = open.take() {
        units.push(unit);
    }

    Ok(units)
}

///
/// The inverse mapping: re-derive the flat aligned array from a unit
/// sequence. Each unit contributes its text at its start position and
/// the range sentinel at every continuation position; all other lines
/// come back empty.
///
/// Units must be in table order, which is what [resolve_units]
/// produces.
///
pub fn flatten_units(units: &[VerseUnit], table: &VrefTable) -> Vec<String> {
    let mut lines = vec![String::new(); table.len()];
    let mut cursor = 0usize;

    for unit in units {
        while cursor < table.len() && table.get(cursor) != Some(&unit.start) {
            cursor += 1;
        }
        if cursor == table.len() {
            break;
        }

        lines[cursor] = unit.text.clone();

        let mut pos = cursor + 1;
        while pos < table.len() {
            let vref = table.get(pos).unwrap();
            if !unit.start.same_chapter(vref) || vref.verse > unit.end.verse {
                break;
            }
            lines[pos] = RANGE_SENTINEL.to_string();
            pos += 1;
        }
        cursor = pos;
    }

    lines
}
