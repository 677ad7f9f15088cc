//! Tests for same, size, resume, head, query and the timeout override.

use super::parse;
use crate::cli::{probe_config, CliCommand};
use urlkit_core::config::ProbeConfig;

#[test]
fn cli_parse_same() {
    match parse(&["urlkit", "same", "http://a.com/", "http://www.a.com"]) {
        CliCommand::Same { a, b } => {
            assert_eq!(a, "http://a.com/");
            assert_eq!(b, "http://www.a.com");
        }
        _ => panic!("expected Same"),
    }
}

#[test]
fn cli_parse_size_default_timeout() {
    match parse(&["urlkit", "size", "https://example.com/x.iso"]) {
        CliCommand::Size { url, timeout } => {
            assert_eq!(url, "https://example.com/x.iso");
            assert!(timeout.is_none());
        }
        _ => panic!("expected Size"),
    }
}

#[test]
fn cli_parse_resume_with_timeout() {
    match parse(&["urlkit", "resume", "https://example.com/x", "--timeout", "5"]) {
        CliCommand::Resume { url, timeout } => {
            assert_eq!(url, "https://example.com/x");
            assert_eq!(timeout, Some(5));
        }
        _ => panic!("expected Resume"),
    }
}

#[test]
fn cli_parse_head() {
    match parse(&["urlkit", "head", "https://example.com/"]) {
        CliCommand::Head { url, .. } => assert_eq!(url, "https://example.com/"),
        _ => panic!("expected Head"),
    }
}

#[test]
fn cli_parse_query() {
    match parse(&["urlkit", "query", "https://example.com/?a=1"]) {
        CliCommand::Query { url } => assert_eq!(url, "https://example.com/?a=1"),
        _ => panic!("expected Query"),
    }
}

#[test]
fn timeout_flag_overrides_config() {
    let base = ProbeConfig::default();
    assert_eq!(probe_config(&base, None).timeout_secs, 30);
    let cfg = probe_config(&base, Some(7));
    assert_eq!(cfg.timeout_secs, 7);
    assert_eq!(cfg.follow_redirects, base.follow_redirects);
}
