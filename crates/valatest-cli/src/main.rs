// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Valatest command-line interface.
//!
//! This is the main entry point for the `valatest` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod diagnostic;
mod io;

/// Valatest: GLib test-runner generation for Vala test fixtures
#[derive(Debug, Parser)]
#[command(name = "valatest")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Discover tests and generate the runner source
    Generate {
        /// Declaration file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<Utf8PathBuf>,

        /// File to write the generated source to (defaults to stdout)
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,

        /// Prefix for generated wrapper names
        #[arg(long, default_value = "valatest_")]
        prefix: String,

        /// Fail when two classes share a fully-qualified name
        #[arg(long)]
        strict_duplicates: bool,
    },

    /// Discover tests and print them without generating code
    List {
        /// Declaration file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<Utf8PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: commands::list::ListFormat,

        /// Fail when two classes share a fully-qualified name
        #[arg(long)]
        strict_duplicates: bool,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    // Skip notes and warnings share stderr with the log stream, so logging
    // stays quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            input,
            output,
            prefix,
            strict_duplicates,
        } => commands::generate::generate(
            input.as_deref(),
            output.as_deref(),
            &prefix,
            strict_duplicates,
        ),
        Command::List {
            input,
            format,
            strict_duplicates,
        } => commands::list::list(input.as_deref(), format, strict_duplicates),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
