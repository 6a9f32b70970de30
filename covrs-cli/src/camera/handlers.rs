use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use covrs_core::models::{CameraArray, Range};
use covrs_coverage::check_camera_coverage;

#[derive(Serialize)]
struct CameraCoverageReport {
    cameras: usize,
    required_subject_distance: Range<f64>,
    required_light_level: Range<i32>,
    subject_distance_covered: bool,
    light_level_covered: bool,
    covered: bool,
}

pub fn run_camera(matches: &ArgMatches) -> Result<()> {
    let cameras_file = matches
        .get_one::<String>("cameras")
        .expect("A path to a camera table is required.");

    let distance = matches
        .get_one::<String>("distance")
        .expect("A required subject distance span is required.");

    let light = matches
        .get_one::<String>("light")
        .expect("A required light level span is required.");

    let as_json = matches.get_flag("json");

    let required_distance: Range<f64> = distance.parse()?;
    let required_light: Range<i32> = light.parse()?;

    let cameras = CameraArray::try_from(Path::new(cameras_file))?;
    info!("Loaded {} cameras from {}", cameras.len(), cameras_file);

    let coverage = check_camera_coverage(&required_distance, &required_light, &cameras);

    if as_json {
        let report = CameraCoverageReport {
            cameras: cameras.len(),
            required_subject_distance: required_distance,
            required_light_level: required_light,
            subject_distance_covered: coverage.subject_distance_covered,
            light_level_covered: coverage.light_level_covered,
            covered: coverage.covered(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let verdict = |covered: bool| if covered { "covered" } else { "not covered" };
        println!(
            "subject distance {}: {}",
            required_distance,
            verdict(coverage.subject_distance_covered)
        );
        println!(
            "light level {}: {}",
            required_light,
            verdict(coverage.light_level_covered)
        );
        if coverage.covered() {
            println!("The camera array can emulate the required camera.");
        } else {
            println!("The camera array can not emulate the required camera.");
        }
    }

    Ok(())
}
