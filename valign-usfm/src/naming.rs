use crate::consts::book_number;

///
/// Policy for naming the output file of one book.
///
/// Naming is a configuration concern, not part of emission itself, so
/// the emitter takes one of these instead of hardcoding a scheme.
///
pub trait BookFileNaming {
    fn file_name(&self, code: &str) -> String;
}

/// Plain naming: `GEN.sfm`.
pub struct PlainNaming;

impl BookFileNaming for PlainNaming {
    fn file_name(&self, code: &str) -> String {
        format!("{}.sfm", code)
    }
}

///
/// Paratext style naming: `01GENMalBT.SFM`, zero-padded canonical
/// book number + code + project identifier. Books outside the
/// canonical 66 get number 00.
///
pub struct ParatextNaming {
    pub project_id: String,
}

impl ParatextNaming {
    pub fn new(project_id: impl Into<String>) -> Self {
        ParatextNaming {
            project_id: project_id.into(),
        }
    }
}

impl BookFileNaming for ParatextNaming {
    fn file_name(&self, code: &str) -> String {
        let number = book_number(code).unwrap_or(0);
        format!("{:02}{}{}.SFM", number, code, self.project_id)
    }
}
