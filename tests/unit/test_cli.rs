use crate::support::{FakeConfluence, spaces_response};
use clap::Parser;
use confluence_mcp::cli::{Cli, Command, write_response};
use confluence_mcp::prelude::*;
use std::io::{self, Write};
use tokio_test::block_on;

#[test]
fn test_parse_list_spaces() {
    let cli = Cli::try_parse_from([
        "mcp-atlassian-confluence",
        "list-spaces",
        "--type",
        "global",
        "--status",
        "current",
        "--limit",
        "10",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Command::ListSpaces {
            space_type: Some(SpaceType::Global),
            status: Some(SpaceStatus::Current),
            limit: Some(10),
            cursor: None,
        }
    );
}

#[test]
fn test_parse_short_flags() {
    let cli =
        Cli::try_parse_from(["mcp-atlassian-confluence", "list-spaces", "-t", "personal", "-l", "3"])
            .unwrap();
    assert_eq!(
        cli.command,
        Command::ListSpaces {
            space_type: Some(SpaceType::Personal),
            status: None,
            limit: Some(3),
            cursor: None,
        }
    );
}

#[test]
fn test_parse_invalid_enum_value() {
    let result = Cli::try_parse_from(["mcp-atlassian-confluence", "list-spaces", "--type", "team"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_get_space_requires_id() {
    assert!(Cli::try_parse_from(["mcp-atlassian-confluence", "get-space"]).is_err());
    let cli = Cli::try_parse_from(["mcp-atlassian-confluence", "get-space", "98306"]).unwrap();
    assert_eq!(
        cli.command,
        Command::GetSpace {
            space_id: "98306".to_string()
        }
    );
}

#[test]
fn test_parse_list_pages_space_ids() {
    let cli = Cli::try_parse_from([
        "mcp-atlassian-confluence",
        "list-pages",
        "--space-id",
        "1,2",
        "--status",
        "draft",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Command::ListPages {
            space_id: vec!["1".to_string(), "2".to_string()],
            status: Some(ContentStatus::Draft),
            title: None,
            limit: None,
            cursor: None,
        }
    );
}

#[test]
fn test_parse_get_page() {
    let cli = Cli::try_parse_from(["mcp-atlassian-confluence", "get-page", "557060"]).unwrap();
    assert_eq!(
        cli.command,
        Command::GetPage {
            page_id: "557060".to_string()
        }
    );
}

#[tokio::test]
async fn test_execute_dispatches_to_controller() {
    let fake = FakeConfluence {
        spaces: spaces_response(),
        ..FakeConfluence::default()
    };
    let cli = Cli::try_parse_from(["mcp-atlassian-confluence", "list-spaces"]).unwrap();
    let response = cli.execute(&fake).await;
    assert!(!response.is_error);
    assert!(response.content.starts_with("# Confluence Spaces"));

    let cli = Cli::try_parse_from(["mcp-atlassian-confluence", "get-page", "missing"]).unwrap();
    let response = cli.execute(&fake).await;
    assert!(response.is_error);
    assert!(response.content.starts_with("Error getting Confluence page:"));
}

#[test]
fn test_execute_with_block_on() {
    let fake = FakeConfluence::default();
    let cli = Cli::try_parse_from(["mcp-atlassian-confluence", "list-pages"]).unwrap();
    let response = block_on(cli.execute(&fake));
    assert_eq!(response, ControllerResponse::ok("No Confluence pages found."));
}

#[test]
fn test_write_response_routes_by_outcome() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    write_response(&ControllerResponse::ok("# Confluence Spaces"), &mut out, &mut err).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "# Confluence Spaces\n");
    assert!(err.is_empty());

    let mut out = Vec::new();
    let mut err = Vec::new();
    write_response(
        &ControllerResponse::error("Error listing Confluence spaces: boom"),
        &mut out,
        &mut err,
    )
    .unwrap();
    assert!(out.is_empty());
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "Error listing Confluence spaces: boom\n"
    );
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_response_reports_io_error() {
    let mut err = Vec::new();
    let result = write_response(&ControllerResponse::ok("text"), &mut ClosedPipe, &mut err);
    assert!(matches!(result, Err(AppError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
}
