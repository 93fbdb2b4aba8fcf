//! Rendering of loaded data to stdout.
//!
//! This module contains submodules responsible for turning loaded feed data
//! into the text the binary prints:
//!
//! # Submodules
//!
//! - [`text`]: The default human-readable views (news list, history overview,
//!   single-day detail)
//! - [`json`]: Pretty JSON of the loaded data, for `--json`
//!
//! Rendering is pure: every function returns a `String` and takes the current
//! time as a parameter where recency is displayed. `main` owns the actual
//! printing.

pub mod json;
pub mod text;
