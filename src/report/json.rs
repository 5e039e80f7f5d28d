use crate::types::report::PageReport;

pub fn to_json(report: &PageReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
