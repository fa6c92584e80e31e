//! `lc` - batch compiler entry point (§6).
//!
//! No subcommands, no flags: `lc <source_file> [output_file]`. The surface
//! is deliberately narrow enough that hand-parsing `env::args()` is
//! simpler and clearer than pulling in a flag parser for it.

use std::path::PathBuf;
use std::process::ExitCode;

use lc_drv::{Config, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_env("LC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(false)).try_init();
}

fn print_help(program: &str) {
    println!("usage: {program} <source_file> [output_file]");
    println!();
    println!("With no output_file, assembly is written to out/<stem>.asm.");
}

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "lc".to_string());
    let source_file: Option<String> = args.next();
    let output_file: Option<String> = args.next();

    let Some(source_file) = source_file else {
        print_help(&program);
        return ExitCode::SUCCESS;
    };

    let mut config = Config::new(PathBuf::from(source_file));
    if let Some(output_file) = output_file {
        config = config.with_output(PathBuf::from(output_file));
    }

    tracing::info!(source = ?config.source_file, "compiling");

    let session = Session::new(config);
    match session.run() {
        Ok((_, handler)) => {
            for diag in handler.diagnostics() {
                eprintln!("{diag}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
