//! Finding and plan extraction from uploaded tables.

use arrow::record_batch::RecordBatch;
use riskscope_core::{EngineError, Finding};
use tracing::warn;

use crate::table;

/// One uploaded table plus the name of the file it came from.
///
/// The file name doubles as the default country when no country column is
/// detected.
pub struct Upload {
    pub name: String,
    pub table: RecordBatch,
}

impl Upload {
    pub fn new(name: impl Into<String>, table: RecordBatch) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// Extract findings from one upload.
///
/// Selects the narrative column, takes country values from the first
/// header containing "country" (else defaults every record to the upload
/// name), and drops records whose text is empty after trimming. A zero-row
/// table contributes nothing.
pub(crate) fn extract_findings(upload: &Upload) -> Result<Vec<Finding>, EngineError> {
    if upload.table.num_rows() == 0 {
        warn!(file = %upload.name, "upload contains no rows");
        return Ok(Vec::new());
    }

    let columns = table::coerce_columns(&upload.table)?;
    let text_idx = table::narrative_column_of(&columns)?;
    let country_idx = table::country_column(&upload.table);

    let mut findings = Vec::new();
    for row in 0..upload.table.num_rows() {
        let text = columns[text_idx][row].trim();
        if text.is_empty() {
            continue;
        }
        let country = match country_idx {
            Some(idx) => columns[idx][row].clone(),
            None => upload.name.clone(),
        };
        findings.push(Finding::new(text, country));
    }
    Ok(findings)
}

/// Extract process names from an audit plan table.
///
/// Same column heuristic as findings; blanks are filtered downstream by
/// the taxonomy reload, which turns an empty remainder into
/// [`EngineError::EmptyCatalog`].
pub(crate) fn extract_process_names(table: &RecordBatch) -> Result<Vec<String>, EngineError> {
    if table.num_rows() == 0 {
        return Ok(Vec::new());
    }
    let columns = crate::table::coerce_columns(table)?;
    let idx = crate::table::narrative_column_of(&columns)?;
    Ok(columns[idx].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::string_batch;

    #[test]
    fn country_column_supplies_country() {
        let batch = string_batch(&[
            (
                "Finding",
                vec![Some("Deviation closed without approval"), Some("Gauge overdue")],
            ),
            ("Country", vec![Some("Germany"), Some("India")]),
        ]);
        let upload = Upload::new("q3.xlsx", batch);
        let findings = extract_findings(&upload).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].country, "Germany");
        assert_eq!(findings[1].country, "India");
    }

    #[test]
    fn file_name_is_default_country() {
        let batch = string_batch(&[(
            "Finding",
            vec![Some("Deviation closed without approval")],
        )]);
        let upload = Upload::new("emea_findings.xlsx", batch);
        let findings = extract_findings(&upload).unwrap();
        assert_eq!(findings[0].country, "emea_findings.xlsx");
    }

    #[test]
    fn empty_texts_are_dropped() {
        let batch = string_batch(&[(
            "Finding",
            vec![Some("A real finding with some length"), Some("  "), None],
        )]);
        let upload = Upload::new("f.xlsx", batch);
        let findings = extract_findings(&upload).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "A real finding with some length");
    }

    #[test]
    fn zero_row_table_contributes_nothing() {
        let batch = string_batch(&[("Finding", vec![])]);
        let upload = Upload::new("empty.xlsx", batch);
        assert!(extract_findings(&upload).unwrap().is_empty());
    }

    #[test]
    fn plan_names_come_from_narrative_column() {
        let batch = string_batch(&[
            ("id", vec![Some("1"), Some("2")]),
            (
                "Process",
                vec![Some("Training Management"), Some("Document Control")],
            ),
        ]);
        let names = extract_process_names(&batch).unwrap();
        assert_eq!(names, vec!["Training Management", "Document Control"]);
    }

    #[test]
    fn zero_row_plan_is_empty() {
        let batch = string_batch(&[("Process", vec![])]);
        assert!(extract_process_names(&batch).unwrap().is_empty());
    }
}
