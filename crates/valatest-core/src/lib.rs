// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Valatest core.
//!
//! This crate contains the full test-discovery pipeline:
//! - Lexical analysis and parsing of the declarative Vala subset
//! - Namespace resolution into a fully-qualified class registry
//! - Test discovery with inheritance-aware override shadowing
//! - Rendering of the GLib test-harness boilerplate
//!
//! [`discover_tests`] runs the first three stages over one input text;
//! [`codegen::render`] turns the result into runnable Vala source.

#![doc = include_str!("../../../README.md")]

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod discover;
pub mod parse;
pub mod resolve;

use miette::Diagnostic;
use thiserror::Error;

/// A fatal failure of the discovery pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    /// The input text does not match the grammar.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] parse::ParseError),

    /// Two classes share a fully-qualified name under the strict policy.
    #[error(transparent)]
    #[diagnostic(transparent)]
    DuplicateClass(#[from] resolve::DuplicateClassError),
}

/// Everything the pipeline produced for one input text.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    /// Ordered test entries, ready for rendering.
    pub tests: Vec<discover::TestEntry>,
    /// Unresolved-parent warnings followed by discovery skip notes.
    pub diagnostics: Vec<diagnostics::Diagnostic>,
}

/// Runs parse, resolution, and discovery over one input text.
///
/// # Errors
///
/// Fails on malformed input, or on a duplicate fully-qualified class name
/// under [`resolve::DuplicatePolicy::Error`].
///
/// # Examples
///
/// ```
/// use valatest_core::discover::Conventions;
/// use valatest_core::resolve::DuplicatePolicy;
///
/// let discovery = valatest_core::discover_tests(
///     "namespace App { public class FooTest : Drt.TestCase { public void test_x(); } }",
///     &Conventions::default(),
///     DuplicatePolicy::default(),
/// )?;
/// assert_eq!(discovery.tests.len(), 1);
/// assert_eq!(discovery.tests[0].path, "/App/FooTest/test_x");
/// # Ok::<(), valatest_core::Error>(())
/// ```
pub fn discover_tests(
    source: &str,
    conventions: &discover::Conventions,
    policy: resolve::DuplicatePolicy,
) -> Result<Discovery, Error> {
    let root = parse::parse(source)?;
    let registry = resolve::resolve(&root, policy)?;
    let (tests, diagnostics) = discover::find_tests(&registry, conventions);
    Ok(Discovery { tests, diagnostics })
}

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::codegen::{RenderOptions, render};
    pub use crate::diagnostics::{Diagnostic, Severity};
    pub use crate::discover::{Conventions, TestEntry, find_tests};
    pub use crate::parse::{ParseError, Span, parse};
    pub use crate::resolve::{ClassRegistry, DuplicatePolicy, ResolvedClass, resolve};
    pub use crate::{Discovery, Error, discover_tests};
}
