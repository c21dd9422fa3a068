// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Vala-style declaration files.
//!
//! This module contains the lexer and the recursive-descent parser for the
//! declarative subset understood by the test generator: namespaces, classes,
//! annotations, methods, constructors, and fields.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each token
//! carries its source location via [`Span`]. Comments are skipped during
//! lexing, matching C-style `//` and `/* */` forms.
//!
//! ```
//! use valatest_core::parse::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("class FooTest").collect();
//! assert_eq!(tokens.len(), 2); // class, FooTest
//! ```
//!
//! # Parsing
//!
//! [`parse`] turns source text into an [`ast::Namespace`](crate::ast::Namespace)
//! tree or fails with a [`ParseError`] pointing at the offending token. The
//! whole input must be consumed; trailing garbage is a syntax error.
//!
//! ```
//! use valatest_core::parse::parse;
//!
//! let root = parse("namespace App { public class FooTest { } }")?;
//! assert_eq!(root.members.len(), 1);
//! # Ok::<(), valatest_core::parse::ParseError>(())
//! ```

mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::parse;
pub use span::Span;
pub use token::{Token, TokenKind};
