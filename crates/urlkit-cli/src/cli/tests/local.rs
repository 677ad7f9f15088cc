//! Tests for stat, backup and hide.

use super::parse;
use crate::cli::{backup_change, Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_stat() {
    match parse(&["urlkit", "stat", "/tmp/file.txt"]) {
        CliCommand::Stat { path } => assert_eq!(path, PathBuf::from("/tmp/file.txt")),
        _ => panic!("expected Stat"),
    }
}

#[test]
fn cli_parse_backup_show() {
    match parse(&["urlkit", "backup", "/data"]) {
        CliCommand::Backup {
            path,
            exclude,
            include,
        } => {
            assert_eq!(path, PathBuf::from("/data"));
            assert!(!exclude);
            assert!(!include);
            assert_eq!(backup_change(exclude, include), None);
        }
        _ => panic!("expected Backup"),
    }
}

#[test]
fn cli_parse_backup_exclude() {
    match parse(&["urlkit", "backup", "/data", "--exclude"]) {
        CliCommand::Backup {
            exclude, include, ..
        } => assert_eq!(backup_change(exclude, include), Some(true)),
        _ => panic!("expected Backup"),
    }
    match parse(&["urlkit", "backup", "/data", "--include"]) {
        CliCommand::Backup {
            exclude, include, ..
        } => assert_eq!(backup_change(exclude, include), Some(false)),
        _ => panic!("expected Backup"),
    }
}

#[test]
fn cli_backup_flags_conflict() {
    assert!(Cli::try_parse_from(["urlkit", "backup", "/data", "--exclude", "--include"]).is_err());
}

#[test]
fn cli_parse_hide_and_reveal() {
    match parse(&["urlkit", "hide", "notes.txt"]) {
        CliCommand::Hide { path, reveal } => {
            assert_eq!(path, PathBuf::from("notes.txt"));
            assert!(!reveal);
        }
        _ => panic!("expected Hide"),
    }
    match parse(&["urlkit", "hide", ".notes.txt", "--reveal"]) {
        CliCommand::Hide { reveal, .. } => assert!(reveal),
        _ => panic!("expected Hide"),
    }
}
