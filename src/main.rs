use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use fabric_netgen::config_loader;
use fabric_netgen::emit::{self, OutputFormat};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Connection profile generator for Fabric networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network description YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory for generated connection profiles
    #[arg(short, long, default_value = "network")]
    output: PathBuf,

    /// Output format of the generated profiles
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Client organization to generate a profile for (repeatable)
    #[arg(long = "client")]
    clients: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Configuration file: {:?}", args.config);
    info!("Output directory: {:?}", args.output);

    let config = config_loader::load_config(&args.config)?;

    fs::create_dir_all(&args.output)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", args.output.display()))?;

    let specs = config_loader::client_specs(&config, &args.config, &args.clients);
    for (client, spec) in &specs {
        let profile = spec
            .build()
            .wrap_err_with(|| format!("Failed to build connection profile for '{}'", client))?;

        let path = args.output.join(emit::profile_file_name(client, args.format));
        emit::write_profile(&profile, &path, args.format)?;
    }

    info!("Generated {} connection profiles", specs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["fabric-netgen", "--config", "network.yaml"]);

        assert_eq!(args.config, PathBuf::from("network.yaml"));
        assert_eq!(args.output, PathBuf::from("network"));
        assert_eq!(args.format, OutputFormat::Yaml);
        assert!(args.clients.is_empty());
    }

    #[test]
    fn test_client_and_format_args() {
        let args = Args::parse_from([
            "fabric-netgen",
            "--config", "network.yaml",
            "--format", "json",
            "--client", "org1",
            "--client", "org2",
        ]);

        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.clients, vec!["org1", "org2"]);
    }
}
