//! CLI integration tests for the `lc` compiler binary (§6, §8 scenarios).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lc"))
}

#[test]
fn no_args_prints_help_and_exits_zero() {
    lc_bin().assert().success().stdout(predicate::str::contains("usage"));
}

#[test]
fn one_arg_writes_into_out_directory_next_to_cwd() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.l");
    fs::write(&source, "function main() { println(\"hello\"); }").unwrap();

    lc_bin().current_dir(dir.path()).arg(&source).assert().success();

    let generated = fs::read_to_string(dir.path().join("out").join("hello.asm")).unwrap();
    assert!(generated.contains("\"hello\", 0"));
    assert!(generated.contains("call dakshin_print"));
}

#[test]
fn two_args_write_to_the_explicit_path_verbatim() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.l");
    let output = dir.path().join("nested").join("custom.asm");
    fs::write(&source, "function main() { println(\"hi\"); }").unwrap();

    lc_bin().arg(&source).arg(&output).assert().success();

    assert!(output.exists());
}

#[test]
fn a_missing_source_file_is_a_fatal_error() {
    lc_bin().arg("/no/such/file.l").assert().failure();
}

#[test]
fn scenario_s1_hello_emits_print_call_and_main_epilogue() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("s1.l");
    let output = dir.path().join("s1.asm");
    fs::write(&source, "function main() { println(\"hello\"); }").unwrap();

    lc_bin().arg(&source).arg(&output).assert().success();

    let asm = fs::read_to_string(&output).unwrap();
    assert!(asm.contains("main:"));
    assert!(asm.contains("call dakshin_print"));
    assert!(asm.contains("main_end:"));
    assert!(asm.contains("ret"));
}

#[test]
fn scenario_s3_if_else_emits_numbered_branch_labels() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("s3.l");
    let output = dir.path().join("s3.asm");
    fs::write(&source, "function main() { if (1 < 2) { return 10; } else { return 20; } }").unwrap();

    lc_bin().arg(&source).arg(&output).assert().success();

    let asm = fs::read_to_string(&output).unwrap();
    assert!(asm.contains("else_0:"));
    assert!(asm.contains("end_if_0:"));
    assert!(asm.contains("jmp end_if_0"));
}
