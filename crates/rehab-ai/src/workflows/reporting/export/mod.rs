//! Report serialization to JSON, CSV, and accessible HTML.

mod csv;
mod html;

use super::views::RSA911Report;
use crate::envelope::{EnvelopeError, ServiceResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const REQUEST_PREFIX: &str = "report-export";
pub const ERROR_CODE: &str = "REPORT_EXPORT_ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Html,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            _ => Err(ExportError::UnsupportedFormat(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReport {
    pub content: String,
    pub filename: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report CSV: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("report CSV was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("failed to render report HTML")]
    Render(#[from] fmt::Error),
}

impl EnvelopeError for ExportError {
    fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

/// Render a report in an already-parsed format.
pub fn export_report_as(
    report: &RSA911Report,
    format: ExportFormat,
) -> Result<ExportedReport, ExportError> {
    let content = match format {
        ExportFormat::Json => serde_json::to_string_pretty(report)?,
        ExportFormat::Csv => csv::render(report)?,
        ExportFormat::Html => html::render(report)?,
    };

    debug!(
        report_id = %report.report_id,
        format = %format,
        bytes = content.len(),
        "report exported"
    );

    Ok(ExportedReport {
        content,
        filename: format!("{}.{}", report.report_id, format.extension()),
    })
}

/// Render a report in the named format (`json`, `csv`, or `html`).
pub fn export_report(report: &RSA911Report, format: &str) -> ServiceResponse<ExportedReport> {
    let result = format
        .parse::<ExportFormat>()
        .and_then(|format| export_report_as(report, format));
    ServiceResponse::from_result(REQUEST_PREFIX, result)
}
