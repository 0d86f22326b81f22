//! Dataset loading and schema validation

use crate::error::{Result, WorkforceError};
use crate::input::adapter::{HrAttritionAdapter, HrEmployeeRecord};
use crate::input::file_detector::FileType;
use crate::input::synthetic::SyntheticRatingGenerator;
use crate::processing::candidate::{CandidateRecord, REQUIRED_FIELDS};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Which schema the input arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaKind {
    Candidate,
    HrAttrition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSource {
    pub origin: String,
    pub schema: SchemaKind,
    /// Ratings were generated, not supplied. Such data is for demos only.
    pub synthetic_ratings: bool,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<CandidateRecord>,
    pub source: DatasetSource,
}

/// Loads candidate datasets from CSV or JSON.
pub struct DatasetLoader {
    synthetic_seed: u64,
}

impl DatasetLoader {
    pub fn new(synthetic_seed: u64) -> Self {
        Self { synthetic_seed }
    }

    pub fn load(&self, path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(WorkforceError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                WorkforceError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        let origin = path.display().to_string();
        match FileType::from_extension(extension) {
            FileType::Csv => {
                info!("Reading CSV dataset: {}", path.display());
                let file = std::fs::File::open(path)?;
                self.load_csv(file, &origin)
            }
            FileType::Json => {
                info!("Reading JSON dataset: {}", path.display());
                let content = std::fs::read_to_string(path)?;
                self.load_json(&content, &origin)
            }
            FileType::Unknown => Err(WorkforceError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    /// Read CSV data. Falls back to the HR attrition adapter when the
    /// candidate columns are missing but the employee columns are present.
    pub fn load_csv<R: Read>(&self, input: R, origin: &str) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);
        let headers = reader.headers()?.clone();

        let missing = missing_fields(headers.iter());
        if missing.is_empty() {
            let records = reader
                .deserialize::<CandidateRecord>()
                .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
            info!("Loaded {} candidate records", records.len());
            return Ok(Dataset {
                records,
                source: DatasetSource {
                    origin: origin.to_string(),
                    schema: SchemaKind::Candidate,
                    synthetic_ratings: false,
                },
            });
        }

        if HrAttritionAdapter::matches(headers.iter()) {
            let rows = reader
                .deserialize::<HrEmployeeRecord>()
                .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
            warn!(
                "Detected HR attrition schema; generating synthetic skill ratings (seed {}). Results are demo data only",
                self.synthetic_seed
            );

            let mut adapter = HrAttritionAdapter::new(SyntheticRatingGenerator::new(self.synthetic_seed));
            let records = adapter.transform(&rows);
            info!("Adapted {} employee records", records.len());
            return Ok(Dataset {
                records,
                source: DatasetSource {
                    origin: origin.to_string(),
                    schema: SchemaKind::HrAttrition,
                    synthetic_ratings: true,
                },
            });
        }

        Err(WorkforceError::Schema(format!(
            "Missing columns: {}",
            missing.join(", ")
        )))
    }

    /// Read a JSON array of candidate objects, as submitted from a form.
    pub fn load_json(&self, content: &str, origin: &str) -> Result<Dataset> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let rows = value.as_array().ok_or_else(|| {
            WorkforceError::InvalidInput("JSON input must be an array of candidate objects".to_string())
        })?;

        let mut missing: Vec<&str> = Vec::new();
        for row in rows {
            let object = row.as_object().ok_or_else(|| {
                WorkforceError::InvalidInput("Every JSON candidate must be an object".to_string())
            })?;
            for field in missing_fields(object.keys().map(|k| k.as_str())) {
                if !missing.contains(&field) {
                    missing.push(field);
                }
            }
        }
        if !missing.is_empty() {
            return Err(WorkforceError::Schema(format!(
                "Missing columns: {}",
                missing.join(", ")
            )));
        }

        let records: Vec<CandidateRecord> = serde_json::from_value(value)?;
        info!("Loaded {} candidate records", records.len());
        Ok(Dataset {
            records,
            source: DatasetSource {
                origin: origin.to_string(),
                schema: SchemaKind::Candidate,
                synthetic_ratings: false,
            },
        })
    }
}

/// Required candidate fields absent from `present`, in canonical order.
pub fn missing_fields<'a>(present: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
    let present: Vec<&str> = present.into_iter().collect();
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !present.contains(field))
        .collect()
}
