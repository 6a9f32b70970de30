use covrs_core::models::{CameraArray, Range};

use super::can_cover_range;

/// Per-axis coverage verdicts for a camera array against a required shot.
///
/// The two axes are independent: the subject distances the array can focus
/// on, and the light levels it can handle. Each axis gets its own
/// [`can_cover_range`] sweep, and the array emulates one big camera only
/// when both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraCoverage {
    /// Whether the required subject distances are fully covered.
    pub subject_distance_covered: bool,
    /// Whether the required light levels are fully covered.
    pub light_level_covered: bool,
}

impl CameraCoverage {
    /// The combined verdict: both axes covered.
    #[inline]
    pub fn covered(&self) -> bool {
        self.subject_distance_covered && self.light_level_covered
    }
}

/// Check a camera array against a required shot, one axis at a time.
///
/// # Arguments
///
/// * `required_subject_distance` - The span of subject distances the shot needs
/// * `required_light_level` - The span of light levels the shot needs
/// * `cameras` - The array to check
///
/// # Examples
///
/// ```
/// use covrs_core::{Camera, CameraArray, Range};
/// use covrs_coverage::check_camera_coverage;
///
/// let array = CameraArray::from(vec![
///     Camera::new("alpha".to_string(), Range::new(100, 500), Range::new(0.5, 5.0)),
///     Camera::new("bravo".to_string(), Range::new(400, 1000), Range::new(4.0, 10.0)),
/// ]);
///
/// let coverage = check_camera_coverage(&Range::new(1.0, 8.0), &Range::new(100, 1200), &array);
/// assert!(coverage.subject_distance_covered);
/// assert!(!coverage.light_level_covered);
/// assert!(!coverage.covered());
/// ```
pub fn check_camera_coverage(
    required_subject_distance: &Range<f64>,
    required_light_level: &Range<i32>,
    cameras: &CameraArray,
) -> CameraCoverage {
    CameraCoverage {
        subject_distance_covered: can_cover_range(
            required_subject_distance,
            &cameras.subject_distance_ranges(),
        ),
        light_level_covered: can_cover_range(required_light_level, &cameras.light_level_ranges()),
    }
}

/// Decide whether `cameras` can jointly stand in for one big camera spanning
/// the required shot on both axes.
///
/// This is the combined verdict of [`check_camera_coverage`]; use that
/// function instead when the per-axis answers matter.
pub fn can_emulate_camera(
    required_subject_distance: &Range<f64>,
    required_light_level: &Range<i32>,
    cameras: &CameraArray,
) -> bool {
    check_camera_coverage(required_subject_distance, required_light_level, cameras).covered()
}
