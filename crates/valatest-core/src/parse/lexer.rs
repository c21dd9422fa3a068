// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Vala-style source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written for maximum control over error recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never panic on malformed input; emit [`TokenKind::Error`]
//! - **Precise spans**: Every token carries its exact source location
//! - **Comment skipping**: `//` and `/* */` comments are discarded, not tokenized
//!
//! # Example
//!
//! ```
//! use valatest_core::parse::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("class FooTest").collect();
//! assert_eq!(tokens.len(), 2); // class, FooTest (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{Span, Token, TokenKind};

/// A lexer that tokenizes Vala-style source code.
///
/// The lexer produces tokens with their source spans. It implements
/// [`Iterator`] for easy consumption.
///
/// # Error Recovery
///
/// The lexer never fails completely. Unknown characters and unterminated
/// strings produce [`TokenKind::Error`] tokens, allowing parsing to continue.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks at the character after the next one.
    fn peek_char_second(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                }
                Some('/') if self.peek_char_second() == Some('/') => {
                    self.advance(); // /
                    self.advance(); // /
                    self.advance_while(|c| c != '\n');
                }
                Some('/') if self.peek_char_second() == Some('*') => {
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    /// Skips a block comment: `/* ... */`
    fn skip_block_comment(&mut self) {
        self.advance(); // /
        self.advance(); // *

        loop {
            match self.peek_char() {
                None => break, // Unterminated - recover gracefully
                Some('*') if self.peek_char_second() == Some('/') => {
                    self.advance(); // *
                    self.advance(); // /
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Lexes the next token.
    fn lex_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.current_position();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c, start),
        };

        Token::new(kind, self.span_from(start))
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char, start: u32) -> TokenKind {
        match c {
            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.lex_identifier_or_keyword(),

            // Numbers
            '0'..='9' => self.lex_number(start),

            // Signed numbers: + or - immediately followed by a digit
            '+' | '-' => {
                if self.peek_char_second().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance(); // sign
                    self.lex_number(start)
                } else {
                    self.advance();
                    let text = self.text_for(self.span_from(start));
                    TokenKind::Error(EcoString::from(text))
                }
            }

            // Strings
            '"' => self.lex_string(),

            // Single-character tokens
            '(' => {
                self.advance();
                TokenKind::LeftParen
            }
            ')' => {
                self.advance();
                TokenKind::RightParen
            }
            '[' => {
                self.advance();
                TokenKind::LeftBracket
            }
            ']' => {
                self.advance();
                TokenKind::RightBracket
            }
            '{' => {
                self.advance();
                TokenKind::LeftBrace
            }
            '}' => {
                self.advance();
                TokenKind::RightBrace
            }
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            ';' => {
                self.advance();
                TokenKind::Semicolon
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '.' => {
                self.advance();
                TokenKind::Dot
            }
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '?' => {
                self.advance();
                TokenKind::Question
            }

            // Unknown character - error recovery
            _ => {
                self.advance();
                let text = self.text_for(self.span_from(start));
                TokenKind::Error(EcoString::from(text))
            }
        }
    }

    /// Lexes an identifier or keyword.
    fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let text = self.text_for(self.span_from(start));
        TokenKind::from_keyword(text)
            .unwrap_or_else(|| TokenKind::Identifier(EcoString::from(text)))
    }

    /// Lexes an integer, real, or scientific-notation number.
    ///
    /// A sign, if present, was consumed by the caller and is included via
    /// `start`. The forms are:
    ///
    /// - integer: `42`
    /// - real: `3.14`, `1.` (trailing digits optional)
    /// - scientific: `1e10`, `1.5e-3`, `2.E5` (exponent needs at least one digit)
    fn lex_number(&mut self, start: u32) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());

        // Fractional part: a bare trailing dot is part of the number
        let has_fraction = if self.peek_char() == Some('.') {
            self.advance(); // consume '.'
            self.advance_while(|c| c.is_ascii_digit());
            true
        } else {
            false
        };

        if self.exponent_follows() {
            self.advance(); // consume 'e' or 'E'
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.advance(); // consume sign
            }
            self.advance_while(|c| c.is_ascii_digit());
            let text = self.text_for(self.span_from(start));
            return TokenKind::SciReal(EcoString::from(text));
        }

        let text = self.text_for(self.span_from(start));
        if has_fraction {
            TokenKind::Real(EcoString::from(text))
        } else {
            TokenKind::Integer(EcoString::from(text))
        }
    }

    /// Checks whether a complete exponent (`e`/`E`, optional sign, at least
    /// one digit) starts at the current position, without consuming anything.
    ///
    /// The trailing `e` in `1e` must stay an identifier, so lone markers are
    /// not treated as part of the number.
    fn exponent_follows(&self) -> bool {
        let mut iter = self.chars.clone();
        if !matches!(iter.next(), Some((_, 'e' | 'E'))) {
            return false;
        }
        match iter.next() {
            Some((_, '+' | '-')) => matches!(iter.next(), Some((_, c)) if c.is_ascii_digit()),
            Some((_, c)) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Lexes a double-quoted string literal with backslash escapes.
    fn lex_string(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance(); // opening quote

        loop {
            match self.peek_char() {
                None => {
                    // Unterminated string - error recovery
                    let text = self.text_for(self.span_from(start));
                    return TokenKind::Error(EcoString::from(text));
                }
                Some('"') => {
                    self.advance(); // closing quote
                    break;
                }
                Some('\\') => {
                    self.advance(); // backslash
                    self.advance(); // escaped char
                }
                _ => {
                    self.advance();
                }
            }
        }

        // Extract content without quotes, dropping escape backslashes
        let full_text = self.text_for(self.span_from(start));
        let content = &full_text[1..full_text.len() - 1];
        if content.contains('\\') {
            let mut unescaped = String::with_capacity(content.len());
            let mut chars = content.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        unescaped.push(escaped);
                    }
                } else {
                    unescaped.push(c);
                }
            }
            TokenKind::String(EcoString::from(unescaped.as_str()))
        } else {
            TokenKind::String(EcoString::from(content))
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lex_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.lex_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}
