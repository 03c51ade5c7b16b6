use confluence_mcp::application::config::{Config, load_env_file};
use confluence_mcp::utils::logger::setup_logger;
use confluence_mcp::{cli, mcp};
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = load_env_file();
    setup_logger();
    match env_file {
        Ok(path) => debug!("Successfully loaded .env file: {}", path.display()),
        Err(e) => debug!("Failed to load .env file: {e}"),
    }
    let config = Config::from_env();

    if std::env::args_os().len() > 1 {
        return cli::run_cli(std::env::args_os(), config).await;
    }

    match mcp::start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("MCP server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
