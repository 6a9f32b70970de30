use clap::{Command, arg};

pub use covrs_coverage::consts::*;

pub fn create_cover_cli() -> Command {
    Command::new(COVER_CMD)
        .author("Databio")
        .about("Check whether a table of ranges covers a required span")
        .arg_required_else_help(true)
        .arg(arg!(-r --required <required> "The span that must be covered, as start:end"))
        .arg(arg!(-a --available <available> "A table of candidate ranges, one start:end per line"))
}
