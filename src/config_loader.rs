use crate::config_file::NetworkFile;
use crate::network_spec::NetworkSpec;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and validate a network description from a YAML file
pub fn load_config(config_path: &Path) -> Result<NetworkFile> {
    info!("Loading network description from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open '{}'", config_path.display()))?;

    let config: NetworkFile = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse '{}'", config_path.display()))?;

    config.validate()?;

    info!(
        "Network '{}' with organizations {:?}",
        config.name, config.organizations
    );
    Ok(config)
}

/// One spec per client organization, with `root` resolved against the
/// description file's directory.
///
/// `clients` overrides the file's own client list when non-empty.
pub fn client_specs(
    config: &NetworkFile,
    config_path: &Path,
    clients: &[String],
) -> Vec<(String, NetworkSpec)> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let base = config.to_spec(base_dir);
    let selected = if clients.is_empty() {
        config.client_organizations()
    } else {
        clients
    };

    selected
        .iter()
        .map(|client| {
            (
                client.clone(),
                base.clone().with_client_organization(client.as_str()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML: &str = r#"
name: example-fabric
channel: common
organizations: [org1, org2]
root: crypto
clients: [org2]
addresses:
  org1: { "*": 10.0.0.1 }
  org2: { "*": 10.0.0.2 }
"#;

    #[test]
    fn test_load_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", YAML).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.name, "example-fabric");
        assert_eq!(config.clients, vec!["org2"]);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "name: n\nchannel: c\norganizations: []\nroot: .\n").unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_client_specs() {
        let config: NetworkFile = serde_yaml::from_str(YAML).unwrap();
        let path = Path::new("/srv/net/network.yaml");

        let specs = client_specs(&config, path, &[]);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].0, "org2");
        assert_eq!(specs[0].1.client_organization(), Some("org2"));
        assert_eq!(specs[0].1.root(), Some(Path::new("/srv/net/crypto")));

        let specs = client_specs(&config, path, &["org1".to_string()]);
        assert_eq!(specs[0].1.client_organization(), Some("org1"));
    }
}
