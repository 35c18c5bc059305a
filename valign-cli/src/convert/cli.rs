use clap::{arg, Arg, Command};

pub use valign_usfm::consts::*;

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert a verse-aligned text file to per-book USFM marker files.")
        .arg(Arg::new("input"))
        .arg(arg!(--vref <vref>).required(true))
        .arg(arg!(--output <output>))
        .arg(arg!(--book <book>))
        .arg(arg!(--"project-id" <project_id>))
        .arg(arg!(--"strict-ranges"))
}
