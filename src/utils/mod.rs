//! Utility modules for date and duration handling.
//!
//! # Available Utilities
//!
//! - [`date`] - Date formatting, parsing, comparison and arithmetic functions
//! - [`duration`] - Calendar-aware interval breakdown and Korean rendering
//!
//! All functions here are pure given their arguments (aside from the
//! wall-clock reads in [`date::today`] and [`date::days_from_today`]) and
//! safe to call from any number of threads without coordination.

pub mod date;
pub mod duration;
