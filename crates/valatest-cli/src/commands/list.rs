// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! List discovered tests without generating code.

use camino::Utf8Path;
use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, instrument};
use valatest_core::discover::{Conventions, TestEntry};
use valatest_core::resolve::DuplicatePolicy;

use crate::diagnostic::SourceError;
use crate::io::read_source;

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One GLib test path per line.
    Text,
    /// A JSON array of full test entries.
    Json,
}

/// Print the discovered test entries to stdout.
///
/// Skip notes and warnings still go to stderr, so `list` piped into another
/// tool sees only the entries themselves.
#[instrument(skip_all, fields(input = ?input, format = ?format))]
pub fn list(input: Option<&Utf8Path>, format: ListFormat, strict_duplicates: bool) -> Result<()> {
    let source = read_source(input)?;

    let policy = if strict_duplicates {
        DuplicatePolicy::Error
    } else {
        DuplicatePolicy::Overwrite
    };
    let discovery = valatest_core::discover_tests(&source.text, &Conventions::default(), policy)
        .map_err(|error| SourceError::from_pipeline_error(&error, &source.name, &source.text))?;

    for diagnostic in &discovery.diagnostics {
        eprintln!("{diagnostic}");
    }
    debug!(count = discovery.tests.len(), "Discovered tests");

    print!("{}", format_entries(&discovery.tests, format)?);
    Ok(())
}

/// Renders the entries in the requested format, newline-terminated.
fn format_entries(tests: &[TestEntry], format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Text => {
            let mut out = String::new();
            for entry in tests {
                out.push_str(&entry.path);
                out.push('\n');
            }
            Ok(out)
        }
        ListFormat::Json => {
            let mut out = serde_json::to_string_pretty(tests).into_diagnostic()?;
            out.push('\n');
            Ok(out)
        }
    }
}
