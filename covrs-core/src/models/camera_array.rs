use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::CameraArrayError;
use crate::models::{Camera, Range};
use crate::utils::{get_dynamic_reader, parse_camera_line};

///
/// CameraArray struct, the representation of a camera table file: one
/// hardware camera per line, with its light level and subject distance
/// envelopes.
///
#[derive(Clone, Debug)]
pub struct CameraArray {
    pub cameras: Vec<Camera>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for CameraArray {
    type Error = CameraArrayError;

    ///
    /// Create a new [CameraArray] from a camera table file.
    ///
    /// Blank lines and lines starting with `#` are skipped. The file may be
    /// plain text or gzip-compressed.
    ///
    /// # Arguments:
    /// - value: path to the camera table on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)?;

        let mut cameras: Vec<Camera> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            cameras.push(parse_camera_line(&line)?);
        }

        if cameras.is_empty() {
            return Err(CameraArrayError::EmptyArray(value.display().to_string()));
        }

        Ok(CameraArray {
            cameras,
            path: Some(value.to_path_buf()),
        })
    }
}

impl From<Vec<Camera>> for CameraArray {
    fn from(cameras: Vec<Camera>) -> Self {
        CameraArray {
            cameras,
            path: None,
        }
    }
}

impl CameraArray {
    /// Get the number of cameras in the array.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Check if the array holds no cameras.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Return an iterator over the cameras in the array.
    pub fn iter(&self) -> std::slice::Iter<'_, Camera> {
        self.cameras.iter()
    }

    ///
    /// Collect the light level envelope of every camera in the array.
    ///
    pub fn light_level_ranges(&self) -> Vec<Range<i32>> {
        self.cameras.iter().map(|c| c.light_level).collect()
    }

    ///
    /// Collect the subject distance envelope of every camera in the array.
    ///
    pub fn subject_distance_ranges(&self) -> Vec<Range<f64>> {
        self.cameras.iter().map(|c| c.subject_distance).collect()
    }
}

impl<'a> IntoIterator for &'a CameraArray {
    type Item = &'a Camera;
    type IntoIter = std::slice::Iter<'a, Camera>;

    fn into_iter(self) -> std::slice::Iter<'a, Camera> {
        self.cameras.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cameras() -> Vec<Camera> {
        vec![
            Camera::new(
                "alpha".to_string(),
                Range::new(100, 500),
                Range::new(0.5, 5.0),
            ),
            Camera::new(
                "bravo".to_string(),
                Range::new(400, 1000),
                Range::new(4.0, 10.0),
            ),
            Camera::new(
                "charlie".to_string(),
                Range::new(900, 1500),
                Range::new(9.0, 20.0),
            ),
        ]
    }

    #[rstest]
    fn test_from_vec(cameras: Vec<Camera>) {
        let array = CameraArray::from(cameras.clone());
        assert_eq!(array.len(), cameras.len());
        assert!(!array.is_empty());
        assert!(array.path.is_none());
    }

    #[rstest]
    fn test_dimension_extractors(cameras: Vec<Camera>) {
        let array = CameraArray::from(cameras);

        assert_eq!(
            array.light_level_ranges(),
            vec![
                Range::new(100, 500),
                Range::new(400, 1000),
                Range::new(900, 1500)
            ]
        );
        assert_eq!(
            array.subject_distance_ranges(),
            vec![
                Range::new(0.5, 5.0),
                Range::new(4.0, 10.0),
                Range::new(9.0, 20.0)
            ]
        );
    }

    #[rstest]
    fn test_iter_yields_all_cameras(cameras: Vec<Camera>) {
        let array = CameraArray::from(cameras);
        let names: Vec<&str> = array.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[rstest]
    fn test_missing_file_is_a_read_error() {
        let result = CameraArray::try_from(Path::new("does/not/exist.tsv"));
        assert!(matches!(result, Err(CameraArrayError::FileRead(_))));
    }
}
