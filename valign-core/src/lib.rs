pub mod errors;
pub mod models;
pub mod utils;

pub use errors::AlignError;
pub use models::*;
