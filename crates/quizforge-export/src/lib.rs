//! quizforge-export — assessment serialization to JSON and HTML.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use quizforge_core::assessment::Assessment;

pub mod html;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Write the assessment in the given format and return the written path.
///
/// Uses `output` verbatim when given; otherwise derives
/// `assessment_{type}_{timestamp}.{ext}` in the current directory.
pub fn export_assessment(
    assessment: &Assessment,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => default_filename(assessment, format),
    };

    match format {
        ExportFormat::Json => assessment.save_json(&path)?,
        ExportFormat::Html => html::write_html_form(assessment, &path)?,
    }

    Ok(path)
}

/// `assessment_{type}_{timestamp}.{ext}` in the current directory.
pub fn default_filename(assessment: &Assessment, format: ExportFormat) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!(
        "assessment_{}_{}.{}",
        assessment.assessment_type,
        timestamp,
        format.extension()
    ))
}
