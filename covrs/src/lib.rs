#[cfg(feature = "core")]
#[doc(inline)]
pub use covrs_core as core;

#[cfg(feature = "coverage")]
#[doc(inline)]
pub use covrs_coverage as coverage;
