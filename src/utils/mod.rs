//! Utility modules for the build pipeline.

mod fmt;
pub mod hash;
pub mod path;

pub use fmt::{file_count, format_kb};
