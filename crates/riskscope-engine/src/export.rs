//! Report export: the scored corpus as an Arrow batch in the mandated
//! column order. The report exporter collaborator serializes the batch;
//! the engine never touches file formats.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use riskscope_core::{EngineError, ScoredFinding, report};

pub(crate) fn report_batch(scored: &[ScoredFinding]) -> Result<RecordBatch, EngineError> {
    let utf8 = |f: fn(&ScoredFinding) -> String| -> ArrayRef {
        Arc::new(StringArray::from(scored.iter().map(f).collect::<Vec<_>>()))
    };
    let yes_no = |v: bool| if v { "Yes" } else { "No" }.to_string();

    let columns: Vec<ArrayRef> = vec![
        utf8(|s| s.country.clone()),
        utf8(|s| s.process.clone()),
        utf8(|s| s.iso_clause.clone()),
        utf8(|s| s.finding.clone()),
        Arc::new(Float64Array::from(
            scored.iter().map(|s| s.critical_score).collect::<Vec<_>>(),
        )),
        utf8(|s| s.category.to_string()),
        Arc::new(StringArray::from(
            scored.iter().map(|s| yes_no(s.hidden_flag)).collect::<Vec<_>>(),
        )),
        utf8(|s| s.hidden_reason.clone()),
        Arc::new(StringArray::from(
            scored
                .iter()
                .map(|s| yes_no(s.leakage_flag))
                .collect::<Vec<_>>(),
        )),
        utf8(|s| s.leakage_reason.clone()),
        utf8(|s| s.audit_status.clone()),
        utf8(|s| s.checklist_status.clone()),
        utf8(|s| s.business_reason.clone()),
        utf8(|s| s.remediation.clone()),
        utf8(|s| s.schedule.clone()),
    ];

    Ok(RecordBatch::try_new(
        Arc::new(report::report_schema()),
        columns,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::scored_with;
    use arrow::array::Array;
    use riskscope_core::RiskCategory;

    #[test]
    fn batch_follows_mandated_column_order() {
        let scored = vec![scored_with("finding a", "Training Management", 70.71, RiskCategory::High)];
        let batch = report_batch(&scored).unwrap();

        assert_eq!(batch.num_rows(), 1);
        assert_eq!(batch.num_columns(), 15);
        let schema = batch.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, report::COLUMNS);
    }

    #[test]
    fn flags_serialize_as_yes_no() {
        let mut s = scored_with("finding a", "P", 50.0, RiskCategory::Moderate);
        s.hidden_flag = true;
        s.leakage_flag = false;
        let batch = report_batch(&[s]).unwrap();

        let hidden = batch
            .column_by_name("HiddenFlag")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(hidden.value(0), "Yes");
        let leakage = batch
            .column_by_name("LeakageFlag")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(leakage.value(0), "No");
    }

    #[test]
    fn score_and_category_round_trip() {
        let scored = vec![scored_with("f", "P", 92.5, RiskCategory::TopCritical)];
        let batch = report_batch(&scored).unwrap();

        let score = batch
            .column_by_name("Score")
            .unwrap()
            .as_any()
            .downcast_ref::<Float64Array>()
            .unwrap();
        assert_eq!(score.value(0), 92.5);

        let category = batch
            .column_by_name("Category")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(category.value(0), "Top Critical");
    }

    #[test]
    fn empty_scored_set_builds_empty_batch() {
        let batch = report_batch(&[]).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 15);
    }
}
