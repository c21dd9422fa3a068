// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Input and output plumbing shared by the subcommands.
//!
//! Input comes from a file path or stdin (absent path or `-`); output goes
//! to a file path or stdout. All paths are UTF-8 ([`camino`]).

use std::fs;
use std::io::{Read, Write};

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};

/// Input text plus the display name diagnostics use for it.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// The path as given, or `<stdin>`.
    pub name: String,
    /// The full input text.
    pub text: String,
}

/// Reads the whole input from a file path, or from stdin when the path is
/// absent or `-`.
pub fn read_source(path: Option<&Utf8Path>) -> Result<SourceText> {
    match path {
        Some(path) if path.as_str() != "-" => {
            let text = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read '{path}'"))?;
            Ok(SourceText {
                name: path.to_string(),
                text,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()
                .wrap_err("Failed to read from stdin")?;
            Ok(SourceText {
                name: "<stdin>".to_string(),
                text,
            })
        }
    }
}

/// Writes the output to a file path, or to stdout when the path is absent.
pub fn write_output(path: Option<&Utf8Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{path}'")),
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write to stdout"),
    }
}
