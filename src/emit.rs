//! Profile rendering and output.
//!
//! Renders a [`ConnectionProfile`] as YAML or JSON and writes it to disk,
//! creating the file if needed and truncating it otherwise.

use crate::profile::ConnectionProfile;
use clap::ValueEnum;
use log::info;
use std::fs;
use std::path::Path;

/// Errors that can occur while rendering or writing a profile
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Text encoding of a rendered profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

pub fn render(profile: &ConnectionProfile, format: OutputFormat) -> Result<String, EmitError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(profile)?,
        OutputFormat::Json => serde_json::to_string_pretty(profile)?,
    })
}

/// File name for a client's profile, e.g. `connection-org1.yaml`.
pub fn profile_file_name(client: &str, format: OutputFormat) -> String {
    format!("connection-{}.{}", client, format.extension())
}

/// Render and write a profile, overwriting any existing file.
pub fn write_profile(
    profile: &ConnectionProfile,
    path: &Path,
    format: OutputFormat,
) -> Result<(), EmitError> {
    let text = render(profile, format)?;
    fs::write(path, text).map_err(|source| EmitError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote connection profile to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(profile_file_name("org1", OutputFormat::Yaml), "connection-org1.yaml");
        assert_eq!(profile_file_name("org2", OutputFormat::Json), "connection-org2.json");
    }
}
