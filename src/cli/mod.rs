//! CLI entrypoint module structure.
use anyhow::{Context, Result};

use crate::{providers::ServerProviders, server::config::ServerConfig};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Load the configuration selected by the launch profile.
pub fn load_config(profile: &LaunchProfile) -> Result<ServerConfig> {
    ServerConfig::load(profile.config_path.clone(), profile.config_source).with_context(|| {
        format!(
            "failed to load configuration {}",
            profile.config_path.display()
        )
    })
}

/// Execute CLI command mode and return the text to print.
pub fn execute_cli_command(command: CliCommand, config: &ServerConfig) -> String {
    let providers = ServerProviders::from_config(&config.data);
    match command {
        CliCommand::Reason => providers.random_reason(),
        CliCommand::Quote => providers.random_quote(),
    }
}
