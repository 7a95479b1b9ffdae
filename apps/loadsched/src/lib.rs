//! # loadsched
//!
//! Library half of the loadsched binary: command surface, configuration and
//! the live status lookup. The schedule model itself lives in
//! `loadsched-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod status;

pub use error::AppError;
