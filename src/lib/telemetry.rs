//! Telemetry initialization and MCP request span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording start and finish of one tool, resource, or prompt call.
pub struct RequestSpan {
    span: Span,
    started_at: Instant,
    name: &'static str,
}

impl RequestSpan {
    pub fn start(kind: &'static str, name: &'static str) -> Self {
        let span = info_span!(
            target: "mcp_demo::runtime",
            "mcp_request",
            request_kind = kind,
            request_name = name
        );
        Self {
            span,
            started_at: Instant::now(),
            name,
        }
    }

    /// Close the span, recording whether the call succeeded.
    pub fn finish(self, status: &'static str) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        debug!(
            target: "mcp_demo::runtime",
            request_name = self.name,
            status,
            elapsed_us,
            "Completed MCP request"
        );
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub server_name: &'a str,
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub config_path: &'a str,
    pub config_source: &'a str,
    pub data_dir: &'a str,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    tracing::info!(
        target: "mcp_demo::runtime",
        server_name = telemetry.server_name,
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        config_path = telemetry.config_path,
        config_source = telemetry.config_source,
        data_dir = telemetry.data_dir,
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
