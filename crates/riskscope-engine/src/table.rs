//! Column inference over logical upload tables.
//!
//! The upload reader hands the engine a rectangular Arrow [`RecordBatch`];
//! the engine picks the column whose string-coerced values have the
//! greatest mean length as "the free-text narrative column". Short
//! categorical and ID columns lose to prose. The heuristic does not
//! validate the chosen column's semantic content.

use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use riskscope_core::EngineError;

/// String-coerce every cell of a batch, column-major. Nulls become empty
/// strings.
pub(crate) fn coerce_columns(batch: &RecordBatch) -> Result<Vec<Vec<String>>, EngineError> {
    let options = FormatOptions::default().with_null("");
    let mut columns = Vec::with_capacity(batch.num_columns());
    for array in batch.columns() {
        let formatter = ArrayFormatter::try_new(array.as_ref(), &options)?;
        let mut values = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            values.push(formatter.value(row).try_to_string()?);
        }
        columns.push(values);
    }
    Ok(columns)
}

/// Index of the narrative column among pre-coerced columns.
///
/// Greatest mean value length wins; ties go to the first column in schema
/// order. Fails with [`EngineError::NoUsableColumn`] when there are no
/// columns or every value is empty.
pub(crate) fn narrative_column_of(columns: &[Vec<String>]) -> Result<usize, EngineError> {
    if columns.is_empty() {
        return Err(EngineError::NoUsableColumn);
    }

    let mut best = 0usize;
    let mut best_mean = 0.0f64;
    for (idx, values) in columns.iter().enumerate() {
        let total: usize = values.iter().map(|v| v.chars().count()).sum();
        let mean = if values.is_empty() {
            0.0
        } else {
            total as f64 / values.len() as f64
        };
        if mean > best_mean {
            best_mean = mean;
            best = idx;
        }
    }

    if best_mean == 0.0 {
        return Err(EngineError::NoUsableColumn);
    }
    Ok(best)
}

/// Index of the narrative column of a batch.
pub fn narrative_column(batch: &RecordBatch) -> Result<usize, EngineError> {
    narrative_column_of(&coerce_columns(batch)?)
}

/// First column whose header contains "country", case-insensitively.
pub(crate) fn country_column(batch: &RecordBatch) -> Option<usize> {
    batch
        .schema()
        .fields()
        .iter()
        .position(|f| f.name().to_lowercase().contains("country"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::string_batch;
    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    #[test]
    fn longest_mean_length_wins() {
        let batch = string_batch(&[
            ("id", vec![Some("1"), Some("2")]),
            (
                "narrative",
                vec![
                    Some("Missing signature on deviation approval"),
                    Some("Training records incomplete for night shift"),
                ],
            ),
            ("site", vec![Some("Pune"), Some("Chennai")]),
        ]);
        assert_eq!(narrative_column(&batch).unwrap(), 1);
    }

    #[test]
    fn ties_break_to_first_column() {
        let batch = string_batch(&[
            ("a", vec![Some("xx"), Some("yy")]),
            ("b", vec![Some("zz"), Some("ww")]),
        ]);
        assert_eq!(narrative_column(&batch).unwrap(), 0);
    }

    #[test]
    fn nulls_count_as_empty() {
        let batch = string_batch(&[
            ("mostly_null", vec![Some("very long narrative text here"), None]),
            ("steady", vec![Some("short but set"), Some("short but set")]),
        ]);
        // mean(29, 0) = 14.5 vs mean(13, 13) = 13.0
        assert_eq!(narrative_column(&batch).unwrap(), 0);
    }

    #[test]
    fn all_empty_values_fail() {
        let batch = string_batch(&[("a", vec![Some(""), None]), ("b", vec![None, Some("")])]);
        assert!(matches!(
            narrative_column(&batch),
            Err(EngineError::NoUsableColumn)
        ));
    }

    #[test]
    fn zero_columns_fail() {
        assert!(matches!(
            narrative_column_of(&[]),
            Err(EngineError::NoUsableColumn)
        ));
    }

    #[test]
    fn non_string_columns_are_coerced() {
        let schema = Schema::new(vec![
            Field::new("count", DataType::Int64, false),
            Field::new("note", DataType::Utf8, false),
        ]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(Int64Array::from(vec![7, 42])),
                Arc::new(StringArray::from(vec!["a recurring gap", "still open"])),
            ],
        )
        .unwrap();
        assert_eq!(narrative_column(&batch).unwrap(), 1);
        let columns = coerce_columns(&batch).unwrap();
        assert_eq!(columns[0], vec!["7", "42"]);
    }

    #[test]
    fn country_header_is_found_case_insensitively() {
        let batch = string_batch(&[
            ("Finding", vec![Some("x")]),
            ("COUNTRY_CODE", vec![Some("DE")]),
        ]);
        assert_eq!(country_column(&batch), Some(1));

        let batch = string_batch(&[("Finding", vec![Some("x")]), ("site", vec![Some("y")])]);
        assert_eq!(country_column(&batch), None);
    }
}
