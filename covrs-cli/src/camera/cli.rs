use clap::{Command, arg};

pub use covrs_coverage::consts::*;

pub fn create_camera_cli() -> Command {
    Command::new(CAMERA_CMD)
        .author("Databio")
        .about("Check whether a camera array can emulate one big camera")
        .arg_required_else_help(true)
        .arg(arg!(-c --cameras <cameras> "A camera table (TSV, optionally gzipped)"))
        .arg(arg!(-d --distance <distance> "The required subject distance span, as start:end"))
        .arg(arg!(-l --light <light> "The required light level span, as start:end"))
        .arg(arg!(--json "Emit the verdict as JSON instead of text"))
}
