use anyhow::Context;
use clap::Parser;
use recon_etl::domain::ports::{ClientRegistry, ConfigProvider, Storage};
use recon_etl::utils::{logger, validation::Validate};
use recon_etl::{
    CliConfig, HttpRegistry, LocalStorage, ReconPipeline, StaticRegistry, TomlConfig,
};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting recon-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file) => {
                if let Err(e) = file.validate() {
                    tracing::error!("Config file validation failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
                config.apply_file(file);
            }
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // The declared filename is just the basename; the path stays local.
    let filename = Path::new(&config.input)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(&config.input)
        .to_string();

    let input_storage = LocalStorage::new(".".to_string());
    let bytes = input_storage
        .read_file(&config.input)
        .await
        .with_context(|| format!("cannot read input file {}", config.input))?;

    let result = match config.registry_endpoint() {
        Some(endpoint) => {
            tracing::info!(endpoint, "using HTTP client registry");
            run(HttpRegistry::new(endpoint), &filename, bytes).await
        }
        None => {
            tracing::info!(
                codes = config.authorized_codes().len(),
                "using static client registry"
            );
            run(
                StaticRegistry::new(config.authorized_codes()),
                &filename,
                bytes,
            )
            .await
        }
    };

    match result {
        Ok(attachment) => {
            let output_storage = LocalStorage::new(config.output_path().to_string());
            output_storage
                .write_file(&attachment.filename, &attachment.body)
                .await
                .context("writing filtered output")?;

            tracing::info!("✅ Reconciliation completed successfully!");
            println!("✅ Reconciliation completed successfully!");
            println!(
                "📁 Wrote {}/{} ({} bytes, {})",
                config.output_path(),
                attachment.filename,
                attachment.body.len(),
                attachment.content_type
            );
            Ok(())
        }
        Err(e) if e.is_user_error() => {
            tracing::error!("Upload rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("Reconciliation failed: {}", e);
            eprintln!("❌ Internal error, see logs for details");
            std::process::exit(1);
        }
    }
}

async fn run<R: ClientRegistry>(
    registry: R,
    filename: &str,
    bytes: Vec<u8>,
) -> recon_etl::Result<recon_etl::core::CsvAttachment> {
    ReconPipeline::new(registry).process(filename, bytes).await
}
