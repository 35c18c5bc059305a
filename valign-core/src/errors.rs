use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Invalid verse reference at line {line}: {content:?}")]
    VrefFormat { line: usize, content: String },

    #[error("Line count mismatch: {refs} verse references but {lines} text lines")]
    LengthMismatch { refs: usize, lines: usize },

    #[error("Book code not present in the reference table: {0}")]
    UnknownBook(String),

    #[error("Range marker with no open verse at line {line}")]
    OrphanRange { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
