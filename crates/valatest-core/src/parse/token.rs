// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for the Vala-subset lexer.
//!
//! Each token carries a [`TokenKind`] and the [`Span`] it occupies in the
//! input. Keywords are distinguished from identifiers at lex time so the
//! parser can match on them directly.

use ecow::EcoString;

use super::Span;

/// The kind of token, not including source location.
///
/// String-bearing variants use [`EcoString`] so tokens stay cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Identifiers and literals ===
    /// An identifier: `foo`, `SampleTest`, `test_add`
    Identifier(EcoString),

    /// An integer literal: `42`, `-17`, `+3`
    Integer(EcoString),

    /// A real literal with a decimal point: `3.14`, `1.`
    Real(EcoString),

    /// A scientific-notation real: `1.5e10`, `1e-3`, `2.E5`
    SciReal(EcoString),

    /// A double-quoted string literal, stored without the quotes: `"hello"`
    String(EcoString),

    // === Keywords ===
    /// The `namespace` keyword
    Namespace,
    /// The `class` keyword
    Class,
    /// The `throws` keyword
    Throws,
    /// The `public` access keyword
    Public,
    /// The `private` access keyword
    Private,
    /// The `protected` access keyword
    Protected,
    /// The `internal` access keyword
    Internal,
    /// The `abstract` modifier keyword
    Abstract,
    /// The `override` modifier keyword
    Override,
    /// The `async` modifier keyword
    Async,
    /// The `null` literal keyword
    Null,
    /// The `true` literal keyword
    True,
    /// The `false` literal keyword
    False,

    // === Delimiters ===
    /// Left parenthesis: `(`
    LeftParen,
    /// Right parenthesis: `)`
    RightParen,
    /// Left bracket (annotation start): `[`
    LeftBracket,
    /// Right bracket (annotation end): `]`
    RightBracket,
    /// Left brace (scope or body start): `{`
    LeftBrace,
    /// Right brace: `}`
    RightBrace,

    // === Punctuation ===
    /// Inheritance marker: `:`
    Colon,
    /// Declaration terminator: `;`
    Semicolon,
    /// List separator: `,`
    Comma,
    /// Name separator: `.`
    Dot,
    /// Value binding: `=`
    Equals,
    /// Nullable type suffix: `?`
    Question,

    // === Special ===
    /// End of file
    Eof,

    /// Invalid/error token (preserves unlexable text)
    Error(EcoString),
}

impl TokenKind {
    /// Maps identifier text to its keyword kind, if it is one.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "namespace" => Some(Self::Namespace),
            "class" => Some(Self::Class),
            "throws" => Some(Self::Throws),
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            "internal" => Some(Self::Internal),
            "abstract" => Some(Self::Abstract),
            "override" => Some(Self::Override),
            "async" => Some(Self::Async),
            "null" => Some(Self::Null),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            _ => None,
        }
    }

    /// Returns `true` if this token is one of the access keywords.
    #[must_use]
    pub const fn is_access_keyword(&self) -> bool {
        matches!(
            self,
            Self::Public | Self::Private | Self::Protected | Self::Internal
        )
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the string content if this token carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Identifier(s)
            | Self::Integer(s)
            | Self::Real(s)
            | Self::SciReal(s)
            | Self::String(s)
            | Self::Error(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(s) | Self::Integer(s) | Self::Real(s) | Self::SciReal(s) => {
                write!(f, "{s}")
            }
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Error(s) => write!(f, "<error: {s}>"),
            Self::Namespace => write!(f, "namespace"),
            Self::Class => write!(f, "class"),
            Self::Throws => write!(f, "throws"),
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
            Self::Protected => write!(f, "protected"),
            Self::Internal => write!(f, "internal"),
            Self::Abstract => write!(f, "abstract"),
            Self::Override => write!(f, "override"),
            Self::Async => write!(f, "async"),
            Self::Null => write!(f, "null"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Equals => write!(f, "="),
            Self::Question => write!(f, "?"),
            Self::Eof => write!(f, "<eof>"),
        }
    }
}

/// A token with its source location.
///
/// # Examples
///
/// ```
/// use valatest_core::parse::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier("foo".into()), Span::new(0, 3));
/// assert!(matches!(token.kind(), TokenKind::Identifier(_)));
/// assert_eq!(token.span().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}
