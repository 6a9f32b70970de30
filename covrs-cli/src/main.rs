mod camera;
mod cover;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "covrs";
    pub const BIN_NAME: &str = "covrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Coverage checks for ranges and camera arrays: decide whether a required span is fully covered by what is available.")
        .subcommand_required(true)
        .subcommand(cover::cli::create_cover_cli())
        .subcommand(camera::cli::create_camera_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // COVER
        //
        Some((cover::cli::COVER_CMD, matches)) => {
            cover::handlers::run_cover(matches)?;
        }

        //
        // CAMERA
        //
        Some((camera::cli::CAMERA_CMD, matches)) => {
            camera::handlers::run_camera(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
