///
/// One line of a verse-aligned text file.
///
/// The line's position in the file is its `index`; the verse it
/// belongs to is whatever the reference table holds at that same
/// index. The line itself carries no reference of its own.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AlignedLine {
    pub index: usize,
    pub text: String,
    pub is_range: bool,
}

impl AlignedLine {
    /// True when the line carries no verse text and no range marker.
    pub fn is_empty(&self) -> bool {
        !self.is_range && self.text.is_empty()
    }
}
