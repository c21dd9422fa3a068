// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Non-fatal findings reported by resolution and discovery.
//!
//! Skipped classes and methods are reported as informational diagnostics,
//! never errors; an unresolvable parent reference earns a warning. Callers
//! decide where these go — the command-line tool prints them to stderr.

use ecow::EcoString;

use crate::parse::Span;

/// A non-fatal finding tied to a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: EcoString,
    /// The declaration the finding refers to.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new informational diagnostic.
    #[must_use]
    pub fn info(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            span,
        }
    }

    /// Creates a new warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "Info: {}", self.message),
            Severity::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An informational note, e.g. a class or method skipped by discovery.
    Info,
    /// A finding that deserves attention, e.g. an unresolvable parent.
    Warning,
}
