pub mod camera;
pub mod camera_array;
pub mod range;

// re-export for cleaner imports
pub use self::camera::Camera;
pub use self::camera_array::CameraArray;
pub use self::range::Range;
