//! Entry point for MCP Demo.
use std::process::ExitCode;

use clap::Parser;
use mcp_demo::{
    cli::{
        execute_cli_command, load_config, CliCommand, LaunchProfile, LaunchProfileArgs,
        ParsedCommand,
    },
    lib::telemetry,
    server::runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => run_server(profile).await,
        ParsedCommand::Cli(command, profile) => handle_cli_command(command, &profile),
    }
}

async fn run_server(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let config = load_config(&profile).map_err(RuntimeExit::from_error)?;
    runtime::run_server(profile, config).await
}

fn handle_cli_command(command: CliCommand, profile: &LaunchProfile) -> Result<(), RuntimeExit> {
    let config = load_config(profile).map_err(RuntimeExit::from_error)?;
    println!("{}", execute_cli_command(command, &config));
    Ok(())
}
