//! # Daytime Core
//!
//! Builds the NIST-format daytime line served to every client.
//!
//! ## Modules
//! - `error`: Error types for startup and serving failures
//! - `models`: Calendar time, transition code and message types
//! - `mjd`: Modified Julian Date computation
//! - `transition`: US daylight saving time transition code (TT)
//! - `provider`: Message formatter
//! - `utils`: Protocol constants and format strings

pub mod error;
pub mod mjd;
pub mod models;
pub mod provider;
pub mod transition;
pub mod utils;
