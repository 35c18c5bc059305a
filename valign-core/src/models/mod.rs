pub mod aligned_line;
pub mod book;
pub mod verse_ref;
pub mod verse_unit;

pub use aligned_line::AlignedLine;
pub use book::{BookGroup, ChapterGroup};
pub use verse_ref::VerseRef;
pub use verse_unit::VerseUnit;
