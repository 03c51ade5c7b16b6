//! # Command-line interface
//!
//! `list-spaces`, `get-space`, `list-pages` and `get-page` print the same
//! markdown the MCP tools return. Failures go to stderr with a non-zero exit.

use crate::application::client::{Client, ConfluenceApi};
use crate::application::config::Config;
use crate::controller::pages::{self, ListPagesOptions};
use crate::controller::spaces::{self, ListSpacesOptions};
use crate::controller::ControllerResponse;
use crate::error::AppError;
use crate::presentation::page::ContentStatus;
use crate::presentation::space::{SpaceStatus, SpaceType};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};

/// Confluence from the command line. Run without arguments to start the MCP server.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mcp-atlassian-confluence",
    version,
    about = "A Model Context Protocol (MCP) server for Atlassian Confluence integration"
)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all Confluence spaces
    ListSpaces {
        /// Filter spaces by type (global, personal, collaboration, knowledge_base)
        #[arg(short = 't', long = "type")]
        space_type: Option<SpaceType>,
        /// Filter spaces by status (current, archived)
        #[arg(short, long)]
        status: Option<SpaceStatus>,
        /// Limit the number of spaces returned
        #[arg(short, long)]
        limit: Option<u32>,
        /// Cursor of the page of results to fetch
        #[arg(short, long)]
        cursor: Option<String>,
    },
    /// Get details about a specific Confluence space
    GetSpace {
        /// ID of the space to retrieve
        space_id: String,
    },
    /// List Confluence pages
    ListPages {
        /// Only pages of these spaces (comma-separated)
        #[arg(long = "space-id", value_delimiter = ',')]
        space_id: Vec<String>,
        /// Filter pages by status (current, archived, draft, ...)
        #[arg(short, long)]
        status: Option<ContentStatus>,
        /// Filter pages by exact title
        #[arg(long)]
        title: Option<String>,
        /// Limit the number of pages returned
        #[arg(short, long)]
        limit: Option<u32>,
        /// Cursor of the page of results to fetch
        #[arg(short, long)]
        cursor: Option<String>,
    },
    /// Get a specific Confluence page with its content
    GetPage {
        /// ID of the page to retrieve
        page_id: String,
    },
}

impl Cli {
    /// Runs the selected command against a Confluence implementation
    pub async fn execute<S: ConfluenceApi + ?Sized>(&self, api: &S) -> ControllerResponse {
        debug!("Running command: {:?}", self.command);

        match &self.command {
            Command::ListSpaces {
                space_type,
                status,
                limit,
                cursor,
            } => {
                let options = ListSpacesOptions {
                    space_type: *space_type,
                    status: *status,
                    limit: *limit,
                    cursor: cursor.clone(),
                };
                spaces::list(api, &options).await
            }
            Command::GetSpace { space_id } => spaces::get(api, space_id).await,
            Command::ListPages {
                space_id,
                status,
                title,
                limit,
                cursor,
            } => {
                let options = ListPagesOptions {
                    space_id: space_id.clone(),
                    status: *status,
                    title: title.clone(),
                    limit: *limit,
                    cursor: cursor.clone(),
                };
                pages::list(api, &options).await
            }
            Command::GetPage { page_id } => pages::get(api, page_id).await,
        }
    }
}

/// Writes a controller response and maps it to an exit code
///
/// Markdown goes to `out`, the error line to `err`.
pub fn write_response<O: Write, E: Write>(
    response: &ControllerResponse,
    out: &mut O,
    err: &mut E,
) -> Result<ExitCode, AppError> {
    if response.is_error {
        writeln!(err, "{}", response.content)?;
        err.flush()?;
        Ok(ExitCode::FAILURE)
    } else {
        writeln!(out, "{}", response.content)?;
        out.flush()?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Writes a controller response to stdout or stderr
pub fn emit(response: &ControllerResponse) -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    match write_response(response, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(e) => {
            error!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parses `args` (including the program name) and runs the command
pub async fn run_cli<I, T>(args: I, config: Config) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(print_error) = e.print() {
                error!("Failed to print usage: {print_error}");
            }
            return code;
        }
    };

    let client = match Client::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Confluence client: {e}");
            eprintln!("Error creating Confluence client: {e}");
            return ExitCode::FAILURE;
        }
    };

    emit(&cli.execute(&client).await)
}
