use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use covrs_core::models::Range;
use covrs_core::utils::get_dynamic_reader;
use covrs_coverage::can_cover_range;

pub fn run_cover(matches: &ArgMatches) -> Result<()> {
    let required = matches
        .get_one::<String>("required")
        .expect("A required span is required.");

    let available_file = matches
        .get_one::<String>("available")
        .expect("A path to a table of candidate ranges is required.");

    let required: Range<f64> = required.parse()?;
    let available = read_range_table(available_file)?;

    info!(
        "Loaded {} candidate ranges from {}",
        available.len(),
        available_file
    );

    if can_cover_range(&required, &available) {
        println!("{} is covered", required);
    } else {
        println!("{} is not covered", required);
    }

    Ok(())
}

fn read_range_table(path: &str) -> Result<Vec<Range<f64>>> {
    let reader = get_dynamic_reader(Path::new(path))?;

    let mut ranges = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        // skip blank lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let range = line
            .parse::<Range<f64>>()
            .with_context(|| format!("Invalid range line: {}", line))?;
        ranges.push(range);
    }

    Ok(ranges)
}
