//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed design constants (delimiter marker, ranking cap, visual theme)
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
