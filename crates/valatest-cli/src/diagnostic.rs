// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Fatal pipeline errors carry spans but no source text; this module
//! attaches the input so reports render a source excerpt with labeled
//! arrows instead of a bare message.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use valatest_core::Error;

/// A fatal pipeline error with the input text attached for rich rendering.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(valatest::input))]
pub struct SourceError {
    /// Human-readable error message.
    pub message: String,
    /// Input text for context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Primary location of the error.
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the primary span (interpolated by miette derive macro)
    pub label: String,
    /// The earlier declaration, when a duplicate class is reported.
    #[label("first declared here")]
    pub first_span: Option<SourceSpan>,
}

impl SourceError {
    /// Attaches the named input text to a fatal pipeline error.
    pub fn from_pipeline_error(error: &Error, source_name: &str, source: &str) -> Self {
        let (span, label, first_span) = match error {
            Error::Parse(e) => (e.span.into(), "here", None),
            Error::DuplicateClass(e) => {
                (e.second.into(), "declared again here", Some(e.first.into()))
            }
        };

        Self {
            message: error.to_string(),
            src: miette::NamedSource::new(source_name, source.to_string()),
            span,
            label: label.to_string(),
            first_span,
        }
    }
}
