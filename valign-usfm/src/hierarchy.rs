use valign_core::models::{BookGroup, ChapterGroup, VerseUnit};

///
/// Partition resolved verse units into per-book, per-chapter groups.
///
/// Groups are created lazily, only when the first unit belonging to
/// them arrives, so untranslated books and chapters never produce an
/// empty group (and later, no empty output file). Boundaries are read
/// off each unit's start reference; nothing here knows any book or
/// chapter constants.
///
/// With a `filter`, only units of that book are grouped. Unit order is
/// monotonic in book, so the scan stops as soon as the filtered book's
/// span has passed.
///
pub fn group_by_book(units: Vec<VerseUnit>, filter: Option<&str>) -> Vec<BookGroup> {
    let mut books: Vec<BookGroup> = Vec::new();
    let mut seen_filtered_book = false;

    for unit in units {
        if let Some(wanted) = filter {
            if unit.start.book != wanted {
                if seen_filtered_book {
                    break;
                }
                continue;
            }
            seen_filtered_book = true;
        }

        let book_changed = books
            .last()
            .map(|b| b.code != unit.start.book)
            .unwrap_or(true);
        if book_changed {
            books.push(BookGroup::new(unit.start.book.clone()));
        }

        let book = books.last_mut().unwrap();
        let chapter_changed = book
            .chapters
            .last()
            .map(|c| c.number != unit.start.chapter)
            .unwrap_or(true);
        if chapter_changed {
            book.chapters.push(ChapterGroup::new(unit.start.chapter));
        }

        book.chapters.last_mut().unwrap().units.push(unit);
    }

    books
}
