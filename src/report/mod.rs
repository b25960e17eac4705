//! Human-readable and JSON reporting of probe results

use crate::probe::{ProbeOutcome, SocketPath};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Summary of one probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Directory the probe ran from
    pub working_dir: PathBuf,

    /// Path that was probed
    pub path: SocketPath,

    /// Whether the bind succeeded
    pub success: bool,

    /// OS error description when the bind failed
    pub error: Option<String>,

    /// When the probe finished
    pub finished_at: DateTime<Utc>,
}

impl ProbeReport {
    pub fn new(working_dir: impl Into<PathBuf>, path: SocketPath, outcome: &ProbeOutcome) -> Self {
        Self {
            working_dir: working_dir.into(),
            path,
            success: outcome.is_bound(),
            error: outcome.error().map(|e| e.to_string()),
            finished_at: Utc::now(),
        }
    }

    pub fn outcome_line(&self) -> String {
        match &self.error {
            None => "Socket created successfully".to_string(),
            Some(e) => format!("Error creating socket: {}", e),
        }
    }

    /// Render the report; text mode yields only the outcome line since the
    /// startup line is printed before the probe runs
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.outcome_line()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

pub fn startup_line(working_dir: &Path) -> String {
    format!("Testing socket creation in {}", working_dir.display())
}
