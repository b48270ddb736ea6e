//! JSON export of result records
//!
//! A flat, serde-friendly view of a record: both function names, the five
//! run parameters, one `(size, median, mean, std_dev)` tuple per tested size
//! and the inferred notation. The target directory is created on demand.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{file_stem, format_id};
use crate::profiling::ResultRecord;

/// Flat, self-describing form of a result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub analyzed_function: String,
    pub generation_function: String,
    pub initial_order: u32,
    pub order_count: u32,
    pub magnitude_base: usize,
    pub execution_quantity: u32,
    pub repeat_count: u32,

    /// `(size, median, mean, std_dev)` per tested size
    pub measured_points: Vec<(usize, f64, f64, Option<f64>)>,

    pub likely_complexity: String,
}

impl From<&ResultRecord> for ExportRecord {
    fn from(record: &ResultRecord) -> Self {
        let parameters = record.parameters();
        Self {
            analyzed_function: record.analyzed_function().to_owned(),
            generation_function: record.generation_function().to_owned(),
            initial_order: parameters.initial_order,
            order_count: parameters.order_count,
            magnitude_base: parameters.magnitude_base,
            execution_quantity: parameters.execution_quantity,
            repeat_count: parameters.repeat_count,
            measured_points: record.measurements().points().collect(),
            likely_complexity: record.notation().to_owned(),
        }
    }
}

impl ExportRecord {
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes `"<analyzed function> - NNN.json"` files into a directory
#[derive(Debug, Clone)]
pub struct JsonExporter {
    directory: PathBuf,
}

impl JsonExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Target path of a record for a run identifier
    pub fn path_for(&self, analyzed_function: &str, id: u32) -> PathBuf {
        self.directory.join(format!("{}.json", file_stem(analyzed_function, id)))
    }

    /// Write the record and return its padded identifier
    pub fn export(&self, record: &ResultRecord, id: u32) -> Result<String, ExportError> {
        let json = ExportRecord::from(record).to_json()?;

        fs::create_dir_all(&self.directory)?;
        let path = self.path_for(record.analyzed_function(), id);
        fs::write(&path, json)?;

        info!("Exported {} to {}", record.analyzed_function(), path.display());
        Ok(format_id(id))
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}
