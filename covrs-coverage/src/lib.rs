//! Core infrastructure for range coverage queries in Rust.
//!
//! This crate decides whether a required span is fully covered by a set of candidate
//! ranges. It is part of the [covrs](https://github.com/databio/covrs) project, which
//! provides tools for reasoning about camera arrays and the spans they can photograph.
//!
//! ## Features
//!
//! - **Greedy coverage queries**: Decide in a single sweep whether candidate ranges
//!   cover a required span end to end
//! - **Generic coordinates**: The same code path serves integer axes (light levels)
//!   and floating-point axes (subject distances)
//! - **Dual-dimension checks**: Combine per-axis verdicts into a single answer for a
//!   camera array
//!
//! All coverage decision logic should live here. Higher-level crates (the CLI) wrap
//! this functionality for their specific use cases but should not reimplement the
//! sweep.
//!
//! ## Quick Start
//!
//! ```rust
//! use covrs_core::Range;
//! use covrs_coverage::can_cover_range;
//!
//! // the span we need to photograph, as subject distances in meters
//! let required = Range::new(0.5, 15.0);
//!
//! // what each camera in the array can focus on
//! let available = vec![
//!     Range::new(0.5, 5.0),
//!     Range::new(4.0, 10.0),
//!     Range::new(9.0, 20.0),
//! ];
//!
//! assert!(can_cover_range(&required, &available));
//!
//! // dropping the middle camera opens a gap between 5.0 and 9.0
//! let gapped = vec![Range::new(0.5, 5.0), Range::new(9.0, 20.0)];
//! assert!(!can_cover_range(&required, &gapped));
//! ```
//!
//! ## Coverage model
//!
//! Ranges are closed intervals: both endpoints belong to the range. Two candidates
//! that merely touch, like `[0, 5]` and `[5, 10]`, chain into continuous coverage of
//! `[0, 10]`. A required range whose end does not exceed its start is covered by
//! anything, including an empty candidate set.
//!
//! ## Examples
//!
//! ### Checking whether a camera array can emulate one big camera
//!
//! ```rust
//! use covrs_core::{Camera, CameraArray, Range};
//! use covrs_coverage::can_emulate_camera;
//!
//! let array = CameraArray::from(vec![
//!     Camera::new("alpha".to_string(), Range::new(100, 500), Range::new(0.5, 5.0)),
//!     Camera::new("bravo".to_string(), Range::new(400, 1000), Range::new(4.0, 10.0)),
//!     Camera::new("charlie".to_string(), Range::new(900, 1500), Range::new(9.0, 20.0)),
//! ]);
//!
//! // a software camera works only when both axes are covered
//! let distance = Range::new(0.5, 15.0);
//! let light = Range::new(100, 1500);
//! assert!(can_emulate_camera(&distance, &light, &array));
//! ```

/// Dual-dimension coverage checks for camera arrays.
///
/// See [`check_camera_coverage`] for details.
pub mod camera;

/// Greedy single-axis coverage queries.
///
/// See [`can_cover_range`] for details.
pub mod cover;

// re-exports
pub use self::camera::{CameraCoverage, can_emulate_camera, check_camera_coverage};
pub use self::cover::can_cover_range;

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for camera emulation checks.
    pub const CAMERA_CMD: &str = "camera";
    /// The command name for single-axis coverage checks.
    pub const COVER_CMD: &str = "cover";
}
