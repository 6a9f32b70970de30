use std::fmt::{self, Display};

use crate::models::Range;

///
/// Camera struct, representation of one hardware camera in a camera table
/// file. A camera operates over two independent envelopes: a discrete light
/// level range and a physical subject distance range.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pub name: String,
    pub light_level: Range<i32>,
    pub subject_distance: Range<f64>,
}

impl Camera {
    pub fn new(name: String, light_level: Range<i32>, subject_distance: Range<f64>) -> Self {
        Camera {
            name,
            light_level,
            subject_distance,
        }
    }

    ///
    /// Get the camera table line for this camera.
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.light_level.start,
            self.light_level.end,
            self.subject_distance.start,
            self.subject_distance.end,
        )
    }
}

impl Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
