//! # quad-core
//!
//! Core types shared across the quad crates:
//! - [`CourseRow`] — one search result, treated as an opaque JSON value
//! - [`SearchStatus`] — the search lifecycle enum
//! - [`schools`] — the static school registry

pub mod course;
pub mod schools;
pub mod status;

pub use course::CourseRow;
pub use schools::{ALL_SCHOOLS, SCHOOLS, School};
pub use status::SearchStatus;
