//! patchup library
//!
//! Read-transform-write primitives behind the scripted source cleanups.

pub mod config;
pub mod patch;
