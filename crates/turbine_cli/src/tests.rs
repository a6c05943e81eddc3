//! Unit tests for the `turbine` CLI entrypoint module.

use super::{
    display_filename, format_paste_output, format_preview_rows, format_user_output,
    validated_language, Cli, Commands, WrapArg,
};
use chrono::{Duration, Utc};
use clap::Parser;
use std::path::Path;
use turbine_core::editor::WrapSetting;
use turbine_core::models::{Paste, PasteFile, PastePreview, User, Visibility};

fn paste_fixture() -> Paste {
    Paste {
        name: "scratch".to_string(),
        description: "notes".to_string(),
        files: vec![
            PasteFile {
                filename: "main.py".to_string(),
                content: "print('hi')".to_string(),
                language: None,
            },
            PasteFile {
                filename: "README".to_string(),
                content: "# docs".to_string(),
                language: Some("Markdown".to_string()),
            },
        ],
        author_id: "u_1".to_string(),
        author_name: "ada".to_string(),
        visibility: Visibility::Unlisted,
        created_at: Utc::now() - Duration::days(3),
        views: 41,
        stars: 3,
    }
}

fn preview_fixture(available: bool) -> PastePreview {
    PastePreview {
        id: "p_1".to_string(),
        available,
        name: "snippet".to_string(),
        description: None,
        author_id: "u_1".to_string(),
        author_name: "ada".to_string(),
        visibility: Visibility::Discoverable,
        created_at: Utc::now() - Duration::hours(2),
        views: 10,
        stars: 2,
        starred: None,
    }
}

fn user_fixture() -> User {
    User {
        id: "u_1".to_string(),
        username: "ada".to_string(),
        avatar_url: None,
        github_id: None,
        created_at: Utc::now() - Duration::days(400),
        paste_count: 12,
        stars_received: 4,
        stars_given: 9,
        email: None,
    }
}

#[test]
fn wrap_arg_maps_onto_the_editor_setting() {
    assert_eq!(WrapSetting::from(WrapArg::Auto), WrapSetting::Auto);
    assert_eq!(WrapSetting::from(WrapArg::On), WrapSetting::On);
    assert_eq!(WrapSetting::from(WrapArg::Off), WrapSetting::Off);
}

#[test]
fn display_filename_keeps_only_the_basename() {
    assert_eq!(display_filename(Path::new("/tmp/dir/main.py")), "main.py");
    assert_eq!(display_filename(Path::new("main.py")), "main.py");
}

#[test]
fn paste_output_shows_metadata_language_and_size() {
    let output = format_paste_output(&paste_fixture(), false).unwrap();
    assert!(output.starts_with("scratch by ada"));
    assert!(output.contains("Created 3 days ago"));
    assert!(output.contains("41 views"));
    // Inferred from the filename for the first file, explicit for the second.
    assert!(output.contains("main.py (python, 11 B)"));
    assert!(output.contains("README (markdown, 6 B)"));
    assert!(output.contains("print('hi')"));
}

#[test]
fn paste_json_output_is_the_serialized_paste() {
    let output = format_paste_output(&paste_fixture(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "scratch");
    assert_eq!(value["visibility"], 2);
}

#[test]
fn preview_rows_skip_unavailable_pastes() {
    let rows = format_preview_rows(
        &[preview_fixture(true), preview_fixture(false)],
        false,
    )
    .unwrap();
    assert_eq!(rows.lines().count(), 1);
    assert!(rows.contains("snippet"));
    assert!(rows.contains("2 hours ago"));
}

#[test]
fn user_output_reports_stats_and_optional_email() {
    let without_email = format_user_output(&user_fixture(), false).unwrap();
    assert!(without_email.contains("joined 1 year ago"));
    assert!(without_email.contains("12 pastes"));
    assert!(!without_email.contains("email:"));

    let mut user = user_fixture();
    user.email = Some("ada@example.com".to_string());
    let with_email = format_user_output(&user, false).unwrap();
    assert!(with_email.contains("email: ada@example.com"));
}

#[test]
fn validated_language_canonicalizes_aliases() {
    assert_eq!(validated_language(None), None);
    assert_eq!(
        validated_language(Some("py".to_string())),
        Some("Python".to_string())
    );
    assert_eq!(
        validated_language(Some("Rust".to_string())),
        Some("Rust".to_string())
    );
}

#[test]
fn cli_parses_common_invocations() {
    let cli = Cli::parse_from(["turbine", "get", "abc123"]);
    assert!(matches!(cli.command, Commands::Get { ref id } if id == "abc123"));

    let cli = Cli::parse_from(["turbine", "--json", "pastes", "u_1", "--stars", "-p", "2"]);
    assert!(cli.json);
    match cli.command {
        Commands::Pastes { user, page, stars } => {
            assert_eq!(user.as_deref(), Some("u_1"));
            assert_eq!(page, 2);
            assert!(stars);
        }
        _ => panic!("expected pastes command"),
    }

    let cli = Cli::parse_from(["turbine", "mode", "notes.md", "--wrap", "off"]);
    match cli.command {
        Commands::Mode { filename, wrap, .. } => {
            assert_eq!(filename, "notes.md");
            assert_eq!(wrap, WrapArg::Off);
        }
        _ => panic!("expected mode command"),
    }
}
