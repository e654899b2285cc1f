use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReconError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recon-etl")]
#[command(about = "Filters a transactions CSV down to authorized client codes and appends a total row")]
pub struct CliConfig {
    /// Semicolon-delimited CSV file to process
    pub input: String,

    /// Client registry lookup endpoint
    #[arg(long)]
    pub registry_endpoint: Option<String>,

    /// Static allowlist of authorized codes, used when no registry endpoint
    /// is given
    #[arg(long, value_delimiter = ',')]
    pub codes: Vec<String>,

    /// TOML config file; CLI flags take precedence over its values
    #[arg(long)]
    pub config: Option<String>,

    /// Directory the filtered file is written to
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills in settings the command line left unset from a config file.
    pub fn apply_file(&mut self, file: TomlConfig) {
        if self.registry_endpoint.is_none() {
            self.registry_endpoint = file.registry.map(|r| r.endpoint);
        }
        if self.codes.is_empty() {
            self.codes = file.authorization.map(|a| a.codes).unwrap_or_default();
        }
        if self.output_path.is_none() {
            self.output_path = file.output.map(|o| o.path);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn registry_endpoint(&self) -> Option<&str> {
        self.registry_endpoint.as_deref()
    }

    fn authorized_codes(&self) -> &[String] {
        &self.codes
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or("./output")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("input", &self.input)?;
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", self.output_path())?;

        match &self.registry_endpoint {
            Some(endpoint) => validation::validate_url("registry_endpoint", endpoint)?,
            None if self.codes.is_empty() => {
                return Err(ReconError::MissingConfig {
                    field: "registry_endpoint or codes".to_string(),
                });
            }
            None => {
                for code in &self.codes {
                    validation::validate_non_empty_string("codes", code)?;
                }
            }
        }
        Ok(())
    }
}
