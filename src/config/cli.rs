use crate::core::{ConfigProvider, SourceKind};
use crate::utils::error::{ApprovalError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "approval-mapper")]
#[command(about = "Maps approval source records into persistence entities and read models")]
pub struct CliConfig {
    #[arg(long, required_unless_present = "config", help = "JSON file with source records")]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value = "employee")]
    pub source_kind: SourceKind,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, default_value = "mapped")]
    pub output_basename: String,

    #[arg(long, help = "TOML job file; replaces the other job arguments")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or("")
    }

    fn source_kind(&self) -> SourceKind {
        self.source_kind
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn output_basename(&self) -> &str {
        &self.output_basename
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.is_none() {
            return Err(ApprovalError::MissingConfigError {
                field: "--input".to_string(),
            });
        }
        validation::validate_path("--input", self.input_path())?;
        validation::validate_path("--output-path", &self.output_path)?;
        validation::validate_non_empty_string("--output-basename", &self.output_basename)?;
        validation::validate_output_formats("--output-formats", &self.output_formats)
    }
}
