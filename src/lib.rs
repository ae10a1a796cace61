//! Inflammation Engine - analysis of patient inflammation measurements
//!
//! Measurements are held in a 2D table where each row contains the readings
//! for a single patient over a number of days and each column represents a
//! single day across all patients. Missing readings are NaN cells. This
//! library loads such tables from CSV or JSON sources and computes daily
//! statistics and per-patient normalisation over them.

pub mod analysis;
pub mod error;
pub mod table;

pub use analysis::{
    daily_max, daily_mean, daily_min, daily_stat, patient_normalise, DailyStat, TableSummary,
};
pub use error::AnalysisError;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;
