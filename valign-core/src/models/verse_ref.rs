use std::fmt::{self, Display};
use std::str::FromStr;

///
/// One canonical verse reference, e.g. `GEN 1:1`.
///
/// A reference table holds one of these per line, in canonical order.
/// The ordering of the table is accepted as given and never validated
/// here; irregular versifications are the table's business.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        VerseRef {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// True when `other` sits in the same book and chapter as `self`.
    pub fn same_chapter(&self, other: &VerseRef) -> bool {
        self.book == other.book && self.chapter == other.chapter
    }
}

fn is_book_code(code: &str) -> bool {
    (2..=3).contains(&code.len())
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

impl FromStr for VerseRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (book, rest) = s
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("Expected \"<CODE> <chapter>:<verse>\", found: {:?}", s))?;

        if !is_book_code(book) {
            return Err(format!("Invalid book code: {:?}", book));
        }

        let (chapter, verse) = rest
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Missing \":\" in chapter/verse part: {:?}", rest))?;

        let chapter: u32 = chapter
            .parse()
            .map_err(|_| format!("Invalid chapter number: {:?}", chapter))?;
        let verse: u32 = verse
            .parse()
            .map_err(|_| format!("Invalid verse number: {:?}", verse))?;

        if chapter == 0 || verse == 0 {
            return Err(format!("Chapter and verse must be positive: {:?}", s));
        }

        Ok(VerseRef {
            book: book.to_string(),
            chapter,
            verse,
        })
    }
}

impl Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}
