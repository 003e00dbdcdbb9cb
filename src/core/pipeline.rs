use crate::core::mapper::Mapper;
use crate::core::{ConfigProvider, Pipeline, Record, SourceKind, Storage, TransformResult};
use crate::domain::data::Employee;
use crate::domain::read_models::{EmployeeEntity, IndividualParty};
use crate::domain::salesforce::PersonAccount;
use crate::utils::error::{ApprovalError, ErrorCategory, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Reads source records from a JSON file, maps them and writes the read models.
pub struct MappingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    mapper: Mapper,
}

impl<S: Storage, C: ConfigProvider> MappingPipeline<S, C> {
    pub fn new(storage: S, config: C, mapper: Mapper) -> Self {
        Self {
            storage,
            config,
            mapper,
        }
    }

    fn map_value(&self, index: usize, value: serde_json::Value) -> Result<Record> {
        match self.config.source_kind() {
            SourceKind::Employee => self.map_as::<Employee, EmployeeEntity>(index, value),
            SourceKind::PersonAccount => {
                self.map_as::<PersonAccount, IndividualParty>(index, value)
            }
        }
    }

    fn map_as<Src, Dest>(&self, index: usize, value: serde_json::Value) -> Result<Record>
    where
        Src: DeserializeOwned + 'static,
        Dest: Serialize + 'static,
    {
        let source: Src = serde_json::from_value(value).map_err(|e| ApprovalError::RecordError {
            index,
            message: e.to_string(),
        })?;

        // Broken mapper setup surfaces as-is; bad data is pinned to its record.
        let mapped: Dest = self.mapper.map(&source).map_err(|e| {
            if e.category() == ErrorCategory::Data {
                ApprovalError::RecordError {
                    index,
                    message: e.to_string(),
                }
            } else {
                e
            }
        })?;

        match serde_json::to_value(&mapped)? {
            serde_json::Value::Object(data) => Ok(Record { data }),
            _ => Err(ApprovalError::RecordError {
                index,
                message: "mapped value is not a JSON object".to_string(),
            }),
        }
    }

    fn output_file(&self, format: &str) -> String {
        let filename = format!("{}.{}", self.config.output_basename(), format);
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

/// Splits a JSON document into source records.
///
/// Accepts a bare array, a single object, or a Salesforce query response
/// (`{ "totalSize": n, "done": true, "records": [...] }`).
pub fn split_records(document: serde_json::Value) -> Result<Vec<serde_json::Value>> {
    match document {
        serde_json::Value::Array(items) => Ok(items),
        serde_json::Value::Object(mut obj) => {
            if obj.contains_key("totalSize") {
                if let Some(serde_json::Value::Array(items)) = obj.remove("records") {
                    return Ok(items);
                }
            }
            Ok(vec![serde_json::Value::Object(obj)])
        }
        other => Err(ApprovalError::InvalidFieldValueError {
            field: "input".to_string(),
            value: other.to_string(),
            reason: "expected a JSON array or object".to_string(),
        }),
    }
}

pub fn records_to_json(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// One row per record. Columns are the union of record keys in the key order
/// of `Record.data` (sorted by name); nested values are written as JSON text.
/// No records means an empty file, without a header line.
pub fn records_to_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut headers: Vec<&str> = Vec::new();
    for record in records {
        for key in record.data.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key.as_str());
            }
        }
    }

    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|header| match record.data.get(*header) {
                None | Some(serde_json::Value::Null) => String::new(),
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ApprovalError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MappingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<serde_json::Value>> {
        tracing::debug!("Reading source records from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let document: serde_json::Value = serde_json::from_slice(&bytes)?;
        split_records(document)
    }

    async fn transform(&self, data: Vec<serde_json::Value>) -> Result<TransformResult> {
        let source_kind = self.config.source_kind();
        tracing::debug!("Mapping {} {} records", data.len(), source_kind);

        let records = data
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.map_value(index, value))
            .collect::<Result<Vec<_>>>()?;

        Ok(TransformResult {
            source_kind,
            records,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let bytes = match format.as_str() {
                "json" => records_to_json(&result.records)?,
                "csv" => records_to_csv(&result.records)?,
                other => {
                    return Err(ApprovalError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };

            let path = self.output_file(format);
            tracing::debug!("Writing {} ({} bytes)", path, bytes.len());
            self.storage.write_file(&path, &bytes).await?;
            written.push(path);
        }

        written
            .into_iter()
            .next()
            .ok_or_else(|| ApprovalError::MissingConfigError {
                field: "output_formats".to_string(),
            })
    }
}
