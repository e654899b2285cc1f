//! TOML file configuration for non-interactive deployments.

use crate::utils::error::{ReconError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub registry: Option<RegistryConfig>,
    pub authorization: Option<AuthorizationConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    /// Static allowlist used when no registry endpoint is configured.
    pub codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReconError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(registry) = &self.registry {
            validation::validate_url("registry.endpoint", &registry.endpoint)?;
        }
        if let Some(authorization) = &self.authorization {
            for code in &authorization.codes {
                validation::validate_non_empty_string("authorization.codes", code)?;
            }
        }
        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
        }
        Ok(())
    }
}
