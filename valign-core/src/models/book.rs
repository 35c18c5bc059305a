use crate::models::verse_unit::VerseUnit;

///
/// All verse units of one chapter, in verse order.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ChapterGroup {
    pub number: u32,
    pub units: Vec<VerseUnit>,
}

impl ChapterGroup {
    pub fn new(number: u32) -> Self {
        ChapterGroup {
            number,
            units: Vec::new(),
        }
    }
}

///
/// All chapters of one book that have at least one translated verse.
///
/// Groups are append-only while the hierarchy is being built and are
/// never mutated afterwards. A book or chapter with no translated
/// verses is never represented at all.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BookGroup {
    pub code: String,
    pub chapters: Vec<ChapterGroup>,
}

impl BookGroup {
    pub fn new(code: impl Into<String>) -> Self {
        BookGroup {
            code: code.into(),
            chapters: Vec::new(),
        }
    }

    /// Total verse units across all chapters.
    pub fn n_units(&self) -> usize {
        self.chapters.iter().map(|c| c.units.len()).sum()
    }
}
