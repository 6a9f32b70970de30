//! Core models for the [covrs](https://github.com/databio/covrs) project.
//!
//! This crate holds the data types shared by the rest of the workspace: the
//! generic closed [`Range`](models::Range), the [`Camera`](models::Camera)
//! device model with its two operating envelopes, and the
//! [`CameraArray`](models::CameraArray) collection that can be read from a
//! camera table file on disk.
//!
//! All coverage computation lives in the `covrs-coverage` crate; this crate
//! should stay free of algorithms beyond the comparison predicates the
//! models themselves define.

pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::{CameraArrayError, RangeParseError};
pub use self::models::{Camera, CameraArray, Range};
