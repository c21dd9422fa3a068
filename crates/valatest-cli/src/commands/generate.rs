// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Generate the test-runner source for a declaration file.

use camino::Utf8Path;
use miette::Result;
use tracing::{debug, info, instrument};
use valatest_core::codegen::{RenderOptions, render};
use valatest_core::discover::Conventions;
use valatest_core::resolve::DuplicatePolicy;

use crate::diagnostic::SourceError;
use crate::io::{read_source, write_output};

/// Discover tests in the input and write the generated runner source.
///
/// Skip notes and warnings go to stderr; the generated Vala source goes to
/// the output file, or stdout when none is given.
#[instrument(skip_all, fields(input = ?input, output = ?output))]
pub fn generate(
    input: Option<&Utf8Path>,
    output: Option<&Utf8Path>,
    prefix: &str,
    strict_duplicates: bool,
) -> Result<()> {
    let source = read_source(input)?;
    debug!(bytes = source.text.len(), "Read input");

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
    info!(count = discovery.tests.len(), "Discovered tests");

    let options = RenderOptions {
        prefix: prefix.into(),
        ..RenderOptions::default()
    };
    let rendered = render(&discovery.tests, &options);

    write_output(output, &rendered)
}
