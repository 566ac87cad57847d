use tracing::{debug, info};

use super::{ConfigSource, ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &std::path::Path, source: ConfigSource) {
    match source {
        ConfigSource::Env => info!(
            target: "mcp_demo::config",
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        ),
        ConfigSource::Cli => info!(
            target: "mcp_demo::config",
            path = %path.display(),
            "Loading configuration passed with --config"
        ),
        ConfigSource::Default => debug!(
            target: "mcp_demo::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using default config.toml"
        ),
    }
}

pub fn log_defaults(path: &std::path::Path) {
    info!(
        target: "mcp_demo::config",
        path = %path.display(),
        "Configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "mcp_demo::config",
        path = %config.source_path.display(),
        name = %config.server.name,
        host = %config.server.host,
        port = config.server.port,
        data_dir = %config.data.dir.display(),
        reasons_path = %config.data.reasons_path.display(),
        quotes_path = %config.data.quotes_path.display(),
        "Configuration file loaded successfully"
    );
}
