use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::CameraArrayError;
use crate::models::{Camera, Range};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, CameraArrayError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file =
        File::open(path).map_err(|_| CameraArrayError::FileRead(path.display().to_string()))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Parse one camera table line into a [Camera]. The expected columns are
/// `name`, `light_lo`, `light_hi`, `dist_lo`, `dist_hi`, tab-separated.
/// Range orientation is not validated; see [Range] for the caller
/// preconditions.
///
/// # Arguments
///
/// - line: the camera table line to parse
///
pub fn parse_camera_line(line: &str) -> Result<Camera, CameraArrayError> {
    let mut fields = line.split('\t');

    let name = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| CameraArrayError::CameraParse(format!("Missing name field: {line}")))?;

    let mut next_field = |what: &str| {
        fields
            .next()
            .ok_or_else(|| CameraArrayError::CameraParse(format!("Missing {what} field: {line}")))
    };

    let light_start = next_field("light level start")?;
    let light_end = next_field("light level end")?;
    let distance_start = next_field("subject distance start")?;
    let distance_end = next_field("subject distance end")?;

    let parse_i32 = |field: &str| {
        field
            .trim()
            .parse::<i32>()
            .map_err(|e| CameraArrayError::CameraParse(format!("'{field}': {e} in: {line}")))
    };
    let parse_f64 = |field: &str| {
        field
            .trim()
            .parse::<f64>()
            .map_err(|e| CameraArrayError::CameraParse(format!("'{field}': {e} in: {line}")))
    };

    Ok(Camera::new(
        name.to_string(),
        Range::new(parse_i32(light_start)?, parse_i32(light_end)?),
        Range::new(parse_f64(distance_start)?, parse_f64(distance_end)?),
    ))
}
