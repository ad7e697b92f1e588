use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lines read from the input file, each with its terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    pub lines: Vec<String>,
}

impl TextDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub lines: Vec<String>,
}

impl TransformResult {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 行與行之間不加分隔符，換行由轉換函式決定
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Read,
    Transform,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReport {
    pub stage: Stage,
    pub message: String,
    pub line_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub lines_read: usize,
    pub lines_written: usize,
    pub stages: Vec<StageReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn completed(&self, stage: Stage) -> bool {
        self.stages.iter().any(|s| s.stage == stage)
    }
}
