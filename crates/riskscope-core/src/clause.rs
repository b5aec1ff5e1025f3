//! ISO 9001:2015 clause mapping as explicit ordered configuration.
//!
//! Resolution is first-match-wins over the declared order, not longest or
//! most specific match. The table is public data so the order is testable
//! and callers can substitute their own mapping.

/// Ordered keyword → clause pairs. A keyword matches when its lowercase
/// form is a substring of the lowercase process name.
pub const ISO_CLAUSES: &[(&str, &str)] = &[
    ("INTERNAL AUDIT", "9.2 Internal Audit"),
    ("MANAGEMENT REVIEW", "9.3 Management Review"),
    ("TRAINING MANAGEMENT", "7.2 Competence"),
    ("SKILL/COMPETENCY MATRIX", "7.2 Competence"),
    ("DOCUMENT CONTROL", "7.5 Documented Information"),
    ("DEVIATION MANAGEMENT", "8.7 Control of Nonconforming Outputs"),
    ("PROCESS CONFIRMATION", "8.5 Production & Service Provision"),
    ("PRODUCT AUDIT (COPA,PEP, SALAPA)", "8.6 Release of Products & Services"),
    ("TEST EQUIPMENT MANAGEMENT", "7.1.5 Monitoring & Measuring Resources"),
    ("EV PARTS MANAGEMENT", "8.4 Control of Externally Provided Processes"),
    ("PAINT INSPECTION", "8.6 Release of Products & Services"),
    ("Q CHECK PROCESS", "8.6 Release of Products & Services"),
    ("Q GATES", "8.6 Release of Products & Services"),
    ("MAINTENANCE MANAGEMENT (PREVENTIVE)", "7.1.3 Infrastructure"),
    ("BLOCKING PROCESS", "8.7 Control of Nonconforming Outputs"),
    ("CONSUMABLE MANAGEMENT", "8.5 Production & Service Provision"),
    ("HR PROCESS", "7.1.2 People"),
    ("TOOLING (PFU)", "7.1.3 Infrastructure"),
    ("ESD COMPLIANCE", "7.1.5 Monitoring & Measuring Resources"),
    ("LAUNCH MANAGEMENT", "6.3 Planning of Changes"),
];

/// Clause returned when no keyword matches the process name.
pub const FALLBACK_CLAUSE: &str = "ISO 9001:2015 – General Process Control";

/// Map a matched process name to a governance clause.
///
/// Scans `pairs` in order and returns the clause of the first keyword whose
/// lowercase form is a substring of the lowercase process name, falling
/// back to [`FALLBACK_CLAUSE`].
pub fn map_clause<'a>(process: &str, pairs: &[(&'a str, &'a str)]) -> &'a str {
    let name = process.to_lowercase();
    pairs
        .iter()
        .find(|(keyword, _)| name.contains(&keyword.to_lowercase()))
        .map(|(_, clause)| *clause)
        .unwrap_or(FALLBACK_CLAUSE)
}
