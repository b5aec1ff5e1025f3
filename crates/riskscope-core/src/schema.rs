/// Arrow schema definitions for the exported audit report.
pub mod report {
    use arrow::datatypes::{DataType, Field, Schema};

    /// Report column names in their mandated export order.
    pub const COLUMNS: &[&str] = &[
        "Country",
        "Process",
        "Clause",
        "Finding",
        "Score",
        "Category",
        "HiddenFlag",
        "HiddenReason",
        "LeakageFlag",
        "LeakageReason",
        "AuditStatus",
        "ChecklistStatus",
        "BusinessReason",
        "Remediation",
        "Schedule",
    ];

    /// Schema of the downloadable report table.
    ///
    /// Every column is Utf8 except `Score`, which carries the composite
    /// risk score as Float64. Flags serialize as "Yes"/"No".
    pub fn report_schema() -> Schema {
        Schema::new(
            COLUMNS
                .iter()
                .map(|&name| {
                    let data_type = if name == "Score" {
                        DataType::Float64
                    } else {
                        DataType::Utf8
                    };
                    Field::new(name, data_type, false)
                })
                .collect::<Vec<_>>(),
        )
    }
}
