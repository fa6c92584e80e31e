//! `lc-parse` - parser REPL (§6).
//!
//! `lc-parse <source_file>` parses the whole file and prints its AST as
//! indented JSON. With no arguments it reads lines from stdin, parsing
//! each one as a self-contained fragment, until the user types `exit`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lc_par::token_norm::{normalize, ParserToken};
use lc_par::{parse_source, ParseError};
use lc_util::{Handler, Span};

fn tokens_for(source: &str) -> Vec<ParserToken> {
    let mut handler = Handler::new();
    let mut lexer = lc_lex::Lexer::new(source, &mut handler);
    let raw = lexer.tokenize();
    let eof_span = raw.last().map(|t| t.span).unwrap_or(Span::DUMMY);
    normalize(raw, eof_span)
}

/// Renders `Syntax Error: <msg>. Got: <token-value>` plus a window of three
/// tokens on either side of the failing one (§7).
fn format_error_context(source: &str, err: &ParseError) -> String {
    let tokens = tokens_for(source);
    let idx = tokens
        .iter()
        .position(|t| t.span.start == err.span.start)
        .unwrap_or_else(|| tokens.len().saturating_sub(1));
    let got = tokens.get(idx).map(|t| t.text.as_str()).unwrap_or("<eof>");

    let lo = idx.saturating_sub(3);
    let hi = (idx + 4).min(tokens.len());
    let window: Vec<String> = tokens[lo..hi]
        .iter()
        .enumerate()
        .map(|(offset, t)| {
            let pos = lo + offset;
            if pos == idx {
                format!(">>{:?}({})<<", t.kind, t.text)
            } else {
                format!("{:?}({})", t.kind, t.text)
            }
        })
        .collect();

    format!("Syntax Error: {}. Got: {}\n  context: {}", err.message, got, window.join(" "))
}

fn parse_and_print(source: &str) -> bool {
    let mut handler = Handler::new();
    match parse_source(source, &mut handler) {
        Ok(program) => {
            for diag in handler.diagnostics() {
                eprintln!("{diag}");
            }
            match serde_json::to_string_pretty(&program) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: failed to serialize AST: {err}"),
            }
            true
        }
        Err(err) => {
            eprintln!("{}", format_error_context(source, &err));
            false
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    match std::fs::read_to_string(path) {
        Ok(source) => {
            if parse_and_print(&source) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: unable to read {path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line);
        match read {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed == "exit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        parse_and_print(trimmed);
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(source_file) => run_file(&source_file),
        None => run_repl(),
    }
}
