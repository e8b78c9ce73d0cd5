use std::io::Write;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;

mod classfile;
mod cli;
mod error;

fn main() {
    let format = fmt::format()
        .with_ansi(true)
        .without_time()
        .with_level(true)
        .with_target(false)
        .with_thread_names(false)
        .compact();

    // stdout carries nothing but the class name, so all diagnostics go to
    // stderr; level comes from RUST_LOG and defaults to warn
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .event_format(format)
        .init();

    // help requests take the same path as a bad argument count, like the
    // usage check of any small unix tool
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(_) => {
            eprintln!("Usage: classpeek <file.class>");
            process::exit(1);
        }
    };

    if let Err(err) = run(&args.file) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    let name = classfile::class_name_from_path(path)?;

    // the name is modified UTF-8; emit the bytes verbatim rather than
    // round-tripping them through a String
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(&name)?;
    out.write_all(b"\n")?;

    Ok(())
}
