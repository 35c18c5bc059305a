use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use valign_usfm::consts::DEFAULT_OUT;
use valign_usfm::{convert_aligned_file, ConvertOptions, OrphanRangePolicy};

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a verse-aligned text file is required.");

    let vref = matches
        .get_one::<String>("vref")
        .expect("A path to a vref reference table is required.");

    let default_out = DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let options = ConvertOptions {
        book: matches.get_one::<String>("book").cloned(),
        project_id: matches.get_one::<String>("project-id").cloned(),
        orphan_policy: if matches.get_flag("strict-ranges") {
            OrphanRangePolicy::Strict
        } else {
            OrphanRangePolicy::Warn
        },
    };

    let input = Path::new(input);
    let vref = Path::new(vref);
    let output = Path::new(output);

    let report = convert_aligned_file(input, vref, output, &options)?;

    for path in &report.written {
        println!("Written: {}", path.display());
    }

    if !report.all_ok() {
        let failed: Vec<&str> = report.failed.iter().map(|(code, _)| code.as_str()).collect();
        anyhow::bail!(
            "{} of {} books failed to write: {}",
            report.failed.len(),
            report.failed.len() + report.written.len(),
            failed.join(", ")
        );
    }

    Ok(())
}
