use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::AnalysisError;

/// Parse a measurement table from headerless comma-delimited text.
///
/// One table row per source line, one column per field. Fields are parsed
/// as `f64`; `nan` marks a missing reading.
///
/// # Errors
/// * `AnalysisError::TypeError` - a field is not numeric
/// * `AnalysisError::ShapeError` - rows have differing widths, or no rows
pub fn from_csv(csv_data: &str) -> crate::Result<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0;
    let mut cols = None;

    for result in reader.records() {
        let record = result?;
        match cols {
            None => cols = Some(record.len()),
            Some(width) if record.len() != width => {
                return Err(AnalysisError::ShapeError(format!(
                    "row {} has {} fields, expected {}",
                    rows + 1,
                    record.len(),
                    width
                ))
                .into());
            }
            Some(_) => {}
        }
        for field in record.iter() {
            let value: f64 = field.parse().map_err(|_| {
                AnalysisError::TypeError(format!("'{}' is not a numeric reading", field))
            })?;
            values.push(value);
        }
        rows += 1;
    }

    build_table(rows, cols.unwrap_or(0), values)
}

/// Parse a measurement table from a JSON array of arrays of numbers.
///
/// `null` cells become NaN (missing reading). Same shape rules as
/// [`from_csv`].
pub fn from_json(json_data: &str) -> crate::Result<Array2<f64>> {
    let parsed: Vec<Vec<Option<f64>>> = serde_json::from_str(json_data).map_err(|e| {
        AnalysisError::TypeError(format!("table cells must be numbers or null: {}", e))
    })?;

    let rows = parsed.len();
    let cols = parsed.first().map_or(0, Vec::len);
    let mut values: Vec<f64> = Vec::with_capacity(rows * cols);

    for (row_idx, row) in parsed.iter().enumerate() {
        if row.len() != cols {
            return Err(AnalysisError::ShapeError(format!(
                "row {} has {} cells, expected {}",
                row_idx + 1,
                row.len(),
                cols
            ))
            .into());
        }
        values.extend(row.iter().map(|cell| cell.unwrap_or(f64::NAN)));
    }

    build_table(rows, cols, values)
}

/// Load a measurement table from a CSV file
pub fn load_csv(path: &Path) -> crate::Result<Array2<f64>> {
    let content = fs::read_to_string(path)?;
    from_csv(&content)
}

/// Load a measurement table from a JSON file
pub fn load_json(path: &Path) -> crate::Result<Array2<f64>> {
    let content = fs::read_to_string(path)?;
    from_json(&content)
}

fn build_table(rows: usize, cols: usize, values: Vec<f64>) -> crate::Result<Array2<f64>> {
    if rows == 0 {
        return Err(AnalysisError::ShapeError("measurement table has no rows".to_string()).into());
    }
    let table = Array2::from_shape_vec((rows, cols), values)
        .map_err(|e| AnalysisError::ShapeError(e.to_string()))?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_from_csv_basic() {
        let table = from_csv("1,2,3\n4,5,6").unwrap();
        assert_eq!(table, arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    }

    #[test]
    fn test_from_csv_trims_whitespace() {
        let table = from_csv(" 1 , 2\n3, 4").unwrap();
        assert_eq!(table, arr2(&[[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_from_csv_missing_reading() {
        let table = from_csv("nan,2\n4,6").unwrap();
        assert!(table[[0, 0]].is_nan());
        assert_eq!(table[[0, 1]], 2.0);
    }

    #[test]
    fn test_from_csv_ragged_rows() {
        let err = from_csv("1,2\n3").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::ShapeError(_))
        ));
    }

    #[test]
    fn test_from_csv_non_numeric_field() {
        let err = from_csv("1,banana\n3,4").unwrap_err();
        let domain = err.downcast_ref::<AnalysisError>().unwrap();
        assert!(matches!(domain, AnalysisError::TypeError(_)));
        assert!(domain.to_string().contains("banana"));
    }

    #[test]
    fn test_from_csv_empty_source() {
        let err = from_csv("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::ShapeError(_))
        ));
    }

    #[test]
    fn test_from_json_basic() {
        let table = from_json("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(table, arr2(&[[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_from_json_null_becomes_nan() {
        let table = from_json("[[null, 2], [4, 6]]").unwrap();
        assert!(table[[0, 0]].is_nan());
        assert_eq!(table[[1, 1]], 6.0);
    }

    #[test]
    fn test_from_json_ragged_rows() {
        let err = from_json("[[1, 2], [3]]").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::ShapeError(_))
        ));
    }

    #[test]
    fn test_from_json_non_numeric_cell() {
        let err = from_json(r#"[[1, "two"]]"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::TypeError(_))
        ));
    }
}
