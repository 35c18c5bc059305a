use crate::models::verse_ref::VerseRef;

///
/// One emittable verse or coalesced verse range.
///
/// `start` and `end` are equal for a single verse. For a range they
/// always sit in the same book and chapter; the resolver never lets a
/// range cross a chapter boundary.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VerseUnit {
    pub start: VerseRef,
    pub end: VerseRef,
    pub text: String,
}

impl VerseUnit {
    pub fn single(vref: VerseRef, text: impl Into<String>) -> Self {
        VerseUnit {
            start: vref.clone(),
            end: vref,
            text: text.into(),
        }
    }

    pub fn is_range(&self) -> bool {
        self.start != self.end
    }

    /// The verse part of a `\v` marker: `"5"` or `"5-7"`.
    pub fn verse_label(&self) -> String {
        if self.is_range() {
            format!("{}-{}", self.start.verse, self.end.verse)
        } else {
            format!("{}", self.start.verse)
        }
    }
}
