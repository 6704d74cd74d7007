//! Tests for CLI argument parsing and the compiled binary

mod common;

use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use common::{Workspace, SAMPLE_TXT};
use masscsv::cli::{Cli, Commands};
use masscsv::pipeline::FailurePolicy;
use predicates::prelude::*;

fn masscsv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("masscsv").unwrap();
    cmd.env_remove("MASSCSV_INPUT_DIR")
        .env_remove("MASSCSV_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_default_values() {
    let cli = Cli::try_parse_from(["masscsv"]).unwrap();

    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.skip_unreadable);

    let settings = cli.settings();
    assert_eq!(settings.extension, ".txt");
    assert_eq!(settings.failure_policy, FailurePolicy::Abort);
}

#[test]
fn test_cli_custom_folders() {
    let cli = Cli::parse_from(["masscsv", "-i", "in", "--output-dir", "out", "--skip-unreadable"]);

    let settings = cli.settings();
    assert_eq!(settings.input_dir, PathBuf::from("in"));
    assert_eq!(settings.output_dir, PathBuf::from("out"));
    assert_eq!(settings.failure_policy, FailurePolicy::Skip);
}

#[test]
fn test_cli_verbose_count() {
    let cli = Cli::parse_from(["masscsv", "-vv"]);

    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_cli_convert_headers() {
    let cli = Cli::parse_from(["masscsv", "convert", "--header", "Col1", "--header", "Col2"]);

    match cli.command {
        Some(Commands::Convert { headers }) => assert_eq!(headers, vec!["Col1", "Col2"]),
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["masscsv", "convert", "-o", "elsewhere"]);

    assert_eq!(cli.output_dir, PathBuf::from("elsewhere"));
}

#[test]
fn test_cli_rejects_invalid_header() {
    let result = Cli::try_parse_from(["masscsv", "convert", "--header", "a"]);

    assert!(result.is_err());
}

#[test]
fn test_binary_convert_subcommand() {
    let ws = Workspace::without_folders();
    std::fs::create_dir(&ws.settings.input_dir).unwrap();
    ws.write_input("a.txt", SAMPLE_TXT);

    masscsv_cmd()
        .arg("-i")
        .arg(&ws.settings.input_dir)
        .arg("-o")
        .arg(&ws.settings.output_dir)
        .args(["convert", "--header", "Col1", "--header", "Col2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed:"));

    assert_eq!(ws.read_output("a.csv"), "Col1,Col2\nfoo,bar\nbaz\n");
}

#[test]
fn test_binary_menu_from_piped_stdin() {
    let ws = Workspace::new();
    ws.write_input("a.txt", SAMPLE_TXT);

    masscsv_cmd()
        .current_dir(ws.dir.path())
        .write_stdin("oops\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please type in a numeric value"))
        .stdout(predicate::str::contains("Processing file:"))
        .stdout(predicate::str::contains("Exiting..."));

    assert_eq!(ws.read_output("a.csv"), "foo,bar\nbaz\n");
}

#[test]
fn test_binary_menu_with_headers() {
    let ws = Workspace::new();
    ws.write_input("a.txt", SAMPLE_TXT);

    masscsv_cmd()
        .current_dir(ws.dir.path())
        .write_stdin("2\nCol1\nb@d\nCol2\nexit\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid column name"));

    assert_eq!(ws.read_output("a.csv"), "Col1,Col2\nfoo,bar\nbaz\n");
}

#[test]
fn test_binary_empty_input_folder() {
    let ws = Workspace::without_folders();

    masscsv_cmd()
        .current_dir(ws.dir.path())
        .write_stdin("1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found in the input folder"));

    assert!(ws.dir.path().join("input").is_dir());
    assert!(ws.dir.path().join("output").is_dir());
}

#[test]
fn test_binary_setup_failure_exits_non_zero() {
    let ws = Workspace::without_folders();
    std::fs::write(ws.dir.path().join("input"), "file in the way").unwrap();

    masscsv_cmd()
        .current_dir(ws.dir.path())
        .write_stdin("3\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to create input folder"));
}
