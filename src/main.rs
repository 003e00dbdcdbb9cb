use approval_mapper::core::ConfigProvider;
use approval_mapper::utils::error::{ApprovalError, ErrorSeverity};
use approval_mapper::utils::{logger, validation::Validate};
use approval_mapper::{
    build_mapper, CliConfig, LocalStorage, MappingEngine, MappingPipeline, TomlConfig,
};
use clap::Parser;

async fn run_job<C>(config: C) -> Result<String, ApprovalError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let mapper = build_mapper()?;
    tracing::debug!("Mapper ready: {:?}", mapper);

    let storage = LocalStorage::new(".");
    let pipeline = MappingPipeline::new(storage, config, mapper);
    MappingEngine::new(pipeline).run().await
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting approval-mapper");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("Loading job file {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(job) => run_job(job).await,
                Err(e) => Err(e),
            }
        }
        None => run_job(cli.clone()).await,
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Mapping completed successfully!");
            println!("✅ Mapping completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Mapping failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(exit_code(e.severity()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_runs_never_exit_zero() {
        let config_error = ApprovalError::MissingConfigError {
            field: "--input".to_string(),
        };
        let io_error = ApprovalError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "employees.json",
        ));
        let mapper_error = ApprovalError::MissingMapError {
            source_type: "Employee",
            destination_type: "IndividualParty",
        };

        assert_eq!(exit_code(config_error.severity()), 1);
        assert_eq!(exit_code(io_error.severity()), 2);
        assert_eq!(exit_code(mapper_error.severity()), 3);
    }
}
