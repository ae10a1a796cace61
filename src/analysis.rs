use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::error::AnalysisError;

/// Daily reduction over the patient axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DailyStat {
    Mean,
    Max,
    Min,
}

/// Reduce each day (column) of a measurement table over all patients (rows).
///
/// # Arguments
/// * `data` - 2D table of inflammation readings, one row per patient
/// * `stat` - which reduction to apply per day
///
/// # Returns
/// One value per day. For a table with no patients every day is NaN,
/// whichever reduction is requested.
pub fn daily_stat(data: &Array2<f64>, stat: DailyStat) -> Array1<f64> {
    if data.nrows() == 0 {
        return Array1::from_elem(data.ncols(), f64::NAN);
    }

    let mut out = Array1::zeros(data.ncols());
    for (day, col) in data.columns().into_iter().enumerate() {
        out[day] = match stat {
            DailyStat::Mean => col.sum() / col.len() as f64,
            DailyStat::Max => col.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            DailyStat::Min => col.iter().copied().fold(f64::INFINITY, f64::min),
        };
    }
    out
}

/// Calculate the daily mean of a 2D inflammation table
pub fn daily_mean(data: &Array2<f64>) -> Array1<f64> {
    daily_stat(data, DailyStat::Mean)
}

/// Calculate the daily maximum of a 2D inflammation table
pub fn daily_max(data: &Array2<f64>) -> Array1<f64> {
    daily_stat(data, DailyStat::Max)
}

/// Calculate the daily minimum of a 2D inflammation table
pub fn daily_min(data: &Array2<f64>) -> Array1<f64> {
    daily_stat(data, DailyStat::Min)
}

/// Normalise patient data from a 2D inflammation table.
///
/// Each patient's readings are divided by that patient's maximum reading,
/// ignoring NaN cells. NaN quotients become 0 and any negative artifact of
/// the division is clamped to 0, so every output value lies in [0, 1]. A
/// patient whose readings are all NaN normalises to an all-zero row.
///
/// # Errors
/// * `AnalysisError::ValueError` - a reading is negative (NaN cells exempt)
pub fn patient_normalise(data: &Array2<f64>) -> Result<Array2<f64>, AnalysisError> {
    for value in data.iter() {
        if *value < 0.0 {
            return Err(AnalysisError::ValueError(
                "inflammation values should not be negative".to_string(),
            ));
        }
    }

    let mut normalised = data.clone();
    for (patient, row) in data.rows().into_iter().enumerate() {
        // Skip-missing maximum; stays NaN when the whole row is missing
        let rowmax = row
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(f64::NAN, f64::max);
        for (day, &value) in row.iter().enumerate() {
            let scaled = value / rowmax;
            normalised[[patient, day]] = if scaled.is_nan() || scaled < 0.0 {
                0.0
            } else {
                scaled
            };
        }
    }
    Ok(normalised)
}

/// Summary of a measurement table: shape plus the three daily statistics
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub patients: usize,
    pub days: usize,
    pub daily_mean: Vec<f64>,
    pub daily_max: Vec<f64>,
    pub daily_min: Vec<f64>,
}

impl TableSummary {
    /// Compute all daily statistics for a table
    pub fn compute(data: &Array2<f64>) -> Self {
        Self {
            patients: data.nrows(),
            days: data.ncols(),
            daily_mean: daily_mean(data).to_vec(),
            daily_max: daily_max(data).to_vec(),
            daily_min: daily_min(data).to_vec(),
        }
    }
}
