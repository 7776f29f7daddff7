//! Tests for completions and man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_completions() {
    match parse(&["gemurl", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_rejects_unknown_shell() {
    assert!(Cli::try_parse_from(["gemurl", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["gemurl", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}
