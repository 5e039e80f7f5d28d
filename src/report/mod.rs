pub mod badge;
pub mod json;
pub mod md;

use crate::error::GreenscanError;
use crate::types::report::PageReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &PageReport, format: OutputFormat) -> Result<String, GreenscanError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GreenscanError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
