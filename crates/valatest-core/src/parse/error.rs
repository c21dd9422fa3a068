// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the parsing pipeline.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// A syntax error encountered while parsing a declaration file.
///
/// Parsing is all-or-nothing: the first syntax error aborts the parse and
/// is reported with the span where it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of syntax error.
    #[source]
    pub kind: ParseErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected_token(
        expected: impl Into<EcoString>,
        found: impl Into<EcoString>,
        span: Span,
    ) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.into(),
            },
            span,
        )
    }

    /// Creates the appropriate error for unlexable text.
    ///
    /// Error tokens starting with a double quote are unterminated string
    /// literals; anything else is a stray character.
    #[must_use]
    pub fn from_invalid_text(text: &str, span: Span) -> Self {
        if text.starts_with('"') {
            Self::new(ParseErrorKind::UnterminatedString, span)
        } else {
            Self::new(
                ParseErrorKind::UnexpectedCharacter(EcoString::from(text)),
                span,
            )
        }
    }

    /// Creates an "unterminated body" error for an unclosed `{`.
    #[must_use]
    pub fn unterminated_body(span: Span) -> Self {
        Self::new(ParseErrorKind::UnterminatedBody, span)
    }

    /// Creates an "invalid number" error.
    #[must_use]
    pub fn invalid_number(text: impl Into<EcoString>, span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidNumber(text.into()), span)
    }
}

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The parser found a token it did not expect.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: EcoString,
        /// Display text of the token actually found.
        found: EcoString,
    },

    /// A character that does not start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(EcoString),

    /// A string literal was not terminated.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `{` body was never closed before end of input.
    #[error("unterminated declaration body")]
    UnterminatedBody,

    /// A numeric literal that cannot be represented.
    #[error("invalid number literal '{0}'")]
    InvalidNumber(EcoString),
}
