use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "{name}: loaded config {path}; waiting in {transport} mode (host={host}, port={port}). Tools: multiply, get_no_reason, get_motivational_quote. Resource: greeting://{{name}}. Prompt: ask_code_review. Reasons and quotes are read from {data_dir}.",
        name = config.server.name,
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port,
        data_dir = config.data.dir.display()
    )
}
