//! Integration tests for the `lc-parse` REPL binary (§6).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lc_parse_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lc-parse"))
}

#[test]
fn a_source_file_argument_prints_indented_json() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("x.l");
    fs::write(&source, "let x: int = 5;").unwrap();

    lc_parse_bin()
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("VarDecl"))
        .stdout(predicate::str::contains("\n  "));
}

#[test]
fn a_syntax_error_prints_context_and_fails() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("bad.l");
    fs::write(&source, "let x =;").unwrap();

    lc_parse_bin().arg(&source).assert().failure().stderr(predicate::str::contains("Syntax Error"));
}

#[test]
fn the_repl_reads_fragments_until_exit() {
    lc_parse_bin()
        .write_stdin("let y = 1;\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VarDecl"));
}
