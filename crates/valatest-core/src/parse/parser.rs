// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parser for the declarative subset.
//!
//! The parser consumes the token stream produced by the lexer and builds the
//! AST defined in [`crate::ast`]. Parsing is all-or-nothing: the first syntax
//! error aborts with a [`ParseError`] carrying the offending span. The whole
//! input must be consumed; anything after the last top-level declaration is
//! an error.
//!
//! Member disambiguation inside a class body uses bounded lookahead: a
//! dotted name directly followed by `(` is a constructor, while annotated or
//! modified members are always methods; otherwise the dotted name is a type
//! and the following identifier decides method (followed by `(`) versus
//! field (followed by `;`).

use ecow::EcoString;

use crate::ast::{
    Access, Annotations, Class, ClassMember, Constructor, Field, Member, Method, Namespace, Value,
};

use super::{ParseError, Span, Token, TokenKind, lex_with_eof};

/// Parses source text into the synthetic top-level namespace.
///
/// Braced member bodies are consumed without interpretation, so the
/// expression code inside them never has to fit the declarative subset.
///
/// # Errors
///
/// Returns a [`ParseError`] for any declaration outside the subset, for
/// unlexable text in declaration position, and for input with no top-level
/// declaration.
///
/// # Examples
///
/// ```
/// use valatest_core::parse::parse;
///
/// let root = parse("namespace App { public class FooTest { } }")?;
/// assert_eq!(root.members.len(), 1);
/// # Ok::<(), valatest_core::parse::ParseError>(())
/// ```
pub fn parse(source: &str) -> Result<Namespace, ParseError> {
    Parser::new(lex_with_eof(source)).parse_top_level()
}

/// The parser state.
struct Parser {
    /// The tokens being parsed, always terminated by an EOF token.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    fn current_token(&self) -> &Token {
        if self.current < self.tokens.len() {
            &self.tokens[self.current]
        } else {
            // If we've advanced past the end of the token stream, fall back to
            // the last token (which is EOF in well-formed input).
            self.tokens
                .last()
                .expect("Parser has no tokens; expected at least an EOF token")
        }
    }

    /// Returns the current token kind.
    fn current_kind(&self) -> &TokenKind {
        self.current_token().kind()
    }

    /// Checks if we're at the end of input.
    fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token and returns the previous one.
    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.tokens[self.current - 1].clone()
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches the given kind.
    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to match the given kind, advancing if it does.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds an "unexpected token" error at the current position.
    ///
    /// Lexer error tokens turn into their own error kind here, so unlexable
    /// text is reported as such wherever it reaches declaration position.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current_token();
        if let TokenKind::Error(text) = token.kind() {
            return ParseError::from_invalid_text(text, token.span());
        }
        ParseError::unexpected_token(expected, token.kind().to_string(), token.span())
    }

    /// Expects an identifier, returning its text and span.
    fn expect_identifier(&mut self, expected: &str) -> Result<(EcoString, Span), ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            let span = self.current_token().span();
            self.advance();
            Ok((name, span))
        } else {
            Err(self.unexpected(expected))
        }
    }

    // ========================================================================
    // Top Level
    // ========================================================================

    /// Parses one or more top-level namespaces or classes, then EOF.
    fn parse_top_level(&mut self) -> Result<Namespace, ParseError> {
        let mut members = Vec::new();
        loop {
            if self.check(&TokenKind::Namespace) {
                members.push(Member::Namespace(self.parse_namespace()?));
            } else if self.at_class_start() {
                members.push(Member::Class(self.parse_class()?));
            } else if self.is_at_end() && !members.is_empty() {
                break;
            } else {
                return Err(self.unexpected("a namespace or class declaration"));
            }
        }

        let end = self.current_token().span().end();
        Ok(Namespace::new(None, members, Span::new(0, end)))
    }

    /// Checks whether the current token can start a class declaration.
    fn at_class_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::LeftBracket | TokenKind::Abstract | TokenKind::Class
        ) || self.current_kind().is_access_keyword()
    }

    /// Parses `namespace <dotted-name> { ... }`.
    fn parse_namespace(&mut self) -> Result<Namespace, ParseError> {
        let start = self
            .expect(&TokenKind::Namespace, "the `namespace` keyword")?
            .span();
        let (name, _) = self.parse_dotted_name("a namespace name")?;
        self.expect(&TokenKind::LeftBrace, "`{`")?;

        let mut members = Vec::new();
        loop {
            if self.check(&TokenKind::Namespace) {
                members.push(Member::Namespace(self.parse_namespace()?));
            } else if self.at_class_start() {
                members.push(Member::Class(self.parse_class()?));
            } else {
                break;
            }
        }

        let close = self.expect(&TokenKind::RightBrace, "a class, a nested namespace, or `}`")?;
        Ok(Namespace::new(
            Some(name),
            members,
            start.merge(close.span()),
        ))
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// Parses a class declaration with its full body.
    fn parse_class(&mut self) -> Result<Class, ParseError> {
        let start = self.current_token().span();
        let annotations = self.parse_annotations()?;
        let access = self.parse_access();
        let is_abstract = self.match_token(&TokenKind::Abstract);
        self.expect(&TokenKind::Class, "the `class` keyword")?;
        let (name, _) = self.expect_identifier("a class name")?;

        let parent = if self.match_token(&TokenKind::Colon) {
            Some(self.parse_type("a parent type name")?.0)
        } else {
            None
        };

        self.expect(&TokenKind::LeftBrace, "`{`")?;

        let mut methods = Vec::new();
        let mut constructors = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            // Fields parse but play no part in discovery, so the class node
            // keeps only the two partitions that do.
            match self.parse_class_member()? {
                ClassMember::Method(method) => methods.push(method),
                ClassMember::Constructor(constructor) => constructors.push(constructor),
                ClassMember::Field(_) => {}
            }
        }

        let close = self.expect(&TokenKind::RightBrace, "`}` or a class member")?;
        Ok(Class {
            name,
            access,
            is_abstract,
            parent,
            annotations,
            methods,
            constructors,
            span: start.merge(close.span()),
        })
    }

    /// Parses a single class-body member: a method, constructor, or field.
    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.current_token().span();
        let annotations = self.parse_annotations()?;
        let access = self.parse_access();
        let is_abstract = self.match_token(&TokenKind::Abstract);
        let is_override = self.match_token(&TokenKind::Override);
        let is_async = self.match_token(&TokenKind::Async);
        let has_modifiers = !annotations.is_empty() || is_abstract || is_override || is_async;

        let (name_or_type, _) = self.parse_dotted_name("a class member declaration")?;

        // A dotted name directly followed by its parameter list is a
        // constructor. Annotated or modified members are always methods.
        if !has_modifiers && self.check(&TokenKind::LeftParen) {
            let arity = self.parse_parameter_list()?;
            let throws = self.parse_throws()?;
            let end = self.parse_member_terminator()?;
            return Ok(ClassMember::Constructor(Constructor {
                name: name_or_type,
                access,
                throws,
                arity,
                span: start.merge(end),
            }));
        }

        // Otherwise the dotted name was a type; the member name follows.
        let mut member_type = name_or_type;
        if self.match_token(&TokenKind::Question) {
            member_type.push('?');
        }
        let (name, _) = self.expect_identifier("a member name")?;

        if self.check(&TokenKind::LeftParen) {
            let arity = self.parse_parameter_list()?;
            // The async marker is also accepted after the parameter list
            let is_async = is_async || self.match_token(&TokenKind::Async);
            let throws = self.parse_throws()?;
            let end = self.parse_member_terminator()?;
            return Ok(ClassMember::Method(Method {
                name,
                access,
                return_type: member_type,
                is_abstract,
                is_override,
                is_async,
                throws,
                annotations,
                arity,
                span: start.merge(end),
            }));
        }

        if has_modifiers {
            return Err(self.unexpected("`(` to begin a parameter list"));
        }
        let end = self.expect(&TokenKind::Semicolon, "`;` or `(`")?;
        Ok(ClassMember::Field(Field {
            name,
            access,
            field_type: member_type,
            span: start.merge(end.span()),
        }))
    }

    // ========================================================================
    // Shared Productions
    // ========================================================================

    /// Parses a dotted name: `foo` or `Foo.Bar.baz`.
    fn parse_dotted_name(&mut self, expected: &str) -> Result<(EcoString, Span), ParseError> {
        let (mut name, mut span) = self.expect_identifier(expected)?;
        while self.match_token(&TokenKind::Dot) {
            let (part, part_span) = self.expect_identifier("an identifier after `.`")?;
            name.push('.');
            name.push_str(&part);
            span = span.merge(part_span);
        }
        Ok((name, span))
    }

    /// Parses a type name: a dotted name with an optional `?` suffix.
    fn parse_type(&mut self, expected: &str) -> Result<(EcoString, Span), ParseError> {
        let (mut name, mut span) = self.parse_dotted_name(expected)?;
        if self.check(&TokenKind::Question) {
            let token = self.advance();
            name.push('?');
            span = span.merge(token.span());
        }
        Ok((name, span))
    }

    /// Parses an optional access keyword.
    fn parse_access(&mut self) -> Access {
        let access = match self.current_kind() {
            TokenKind::Public => Access::Public,
            TokenKind::Private => Access::Private,
            TokenKind::Protected => Access::Protected,
            TokenKind::Internal => Access::Internal,
            _ => return Access::Unspecified,
        };
        self.advance();
        access
    }

    /// Parses zero or more `[name]` / `[name(key=value, ...)]` annotations.
    fn parse_annotations(&mut self) -> Result<Annotations, ParseError> {
        let mut annotations = Annotations::new();
        while self.match_token(&TokenKind::LeftBracket) {
            let (name, _) = self.expect_identifier("an annotation name")?;
            let mut value = None;
            if self.match_token(&TokenKind::LeftParen) {
                if !self.check(&TokenKind::RightParen) {
                    value = self.parse_annotation_params()?;
                }
                self.expect(&TokenKind::RightParen, "`)`")?;
            }
            self.expect(&TokenKind::RightBracket, "`]`")?;
            annotations.insert(name, value);
        }
        Ok(annotations)
    }

    /// Parses `key = value, ...` inside annotation parens.
    ///
    /// Only the first parameter's value is retained; the rest are consumed
    /// for grammar advancement and discarded.
    fn parse_annotation_params(&mut self) -> Result<Option<Value>, ParseError> {
        let mut first = None;
        loop {
            self.expect_identifier("a parameter name")?;
            self.expect(&TokenKind::Equals, "`=`")?;
            let value = self.parse_value()?;
            if first.is_none() {
                first = Some(value);
            }
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        Ok(first)
    }

    /// Parses a literal value: string, number, `null`, `true`, or `false`.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let span = self.current_token().span();
        match self.current_kind().clone() {
            TokenKind::String(text) => {
                self.advance();
                Ok(Value::Str(text))
            }
            TokenKind::Integer(text) => {
                self.advance();
                // Integer literals carry no declared width; magnitudes beyond
                // i64 keep their value as a real.
                match text.parse::<i64>() {
                    Ok(value) => Ok(Value::Int(value)),
                    Err(_) => text
                        .parse::<f64>()
                        .map(Value::Real)
                        .map_err(|_| ParseError::invalid_number(text, span)),
                }
            }
            TokenKind::Real(text) | TokenKind::SciReal(text) => {
                self.advance();
                text.parse::<f64>()
                    .map(Value::Real)
                    .map_err(|_| ParseError::invalid_number(text, span))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Value::Null)
            }
            TokenKind::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            _ => Err(self.unexpected("a literal value")),
        }
    }

    /// Parses `( )` or `( type name [= value], ... )`, returning the arity.
    fn parse_parameter_list(&mut self) -> Result<usize, ParseError> {
        self.expect(&TokenKind::LeftParen, "`(`")?;
        let mut arity = 0;
        if !self.check(&TokenKind::RightParen) {
            loop {
                self.parse_type("a parameter type")?;
                self.expect_identifier("a parameter name")?;
                if self.match_token(&TokenKind::Equals) {
                    self.parse_value()?;
                }
                arity += 1;
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen, "`)`")?;
        Ok(arity)
    }

    /// Parses an optional `throws T1, T2, ...` clause.
    fn parse_throws(&mut self) -> Result<Vec<EcoString>, ParseError> {
        let mut throws = Vec::new();
        if self.match_token(&TokenKind::Throws) {
            loop {
                throws.push(self.parse_dotted_name("an exception type name")?.0);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(throws)
    }

    /// Parses the `;` terminator or a braced body, returning the end span.
    ///
    /// Braced bodies are consumed by brace-depth matching without
    /// interpretation; declaration files usually use `;` but implementation
    /// files carry bodies. Tokens the subset does not know are skipped here,
    /// except an unterminated string, which swallows the rest of the input
    /// and leaves nothing to match braces against.
    fn parse_member_terminator(&mut self) -> Result<Span, ParseError> {
        if self.check(&TokenKind::Semicolon) {
            return Ok(self.advance().span());
        }
        let open = self.expect(&TokenKind::LeftBrace, "`;` or `{`")?;
        let mut depth = 1usize;
        loop {
            if self.is_at_end() {
                return Err(ParseError::unterminated_body(open.span()));
            }
            let token = self.advance();
            match token.kind() {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(token.span());
                    }
                }
                TokenKind::Error(text) if text.as_str().starts_with('"') => {
                    return Err(ParseError::from_invalid_text(text, token.span()));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseErrorKind;

    /// Helper returning the single class in a single top-level namespace.
    fn parse_one_class(source: &str) -> Class {
        let root = parse(source).expect("source should parse");
        match root.members.into_iter().next() {
            Some(Member::Class(class)) => class,
            other => panic!("expected a class, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = parse("").unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedToken { .. }
        ));

        assert!(parse("   // just a comment\n").is_err());
    }

    #[test]
    fn parse_minimal_class() {
        let class = parse_one_class("public class FooTest { }");
        assert_eq!(class.name, "FooTest");
        assert_eq!(class.access, Access::Public);
        assert!(!class.is_abstract);
        assert_eq!(class.parent, None);
        assert!(class.methods.is_empty());
        assert!(class.constructors.is_empty());
    }

    #[test]
    fn parse_class_with_dotted_parent() {
        let class = parse_one_class("public class FooTest : Drt.TestCase { }");
        assert_eq!(class.parent.as_deref(), Some("Drt.TestCase"));
    }

    #[test]
    fn parse_abstract_class() {
        let class = parse_one_class("public abstract class BaseTest : Drt.TestCase { }");
        assert!(class.is_abstract);
    }

    #[test]
    fn parse_annotated_class() {
        let class = parse_one_class(
            "[Compact][CCode(cname = \"foo_t\", unused = 1)] public class FooTest { }",
        );
        assert_eq!(class.annotations.len(), 2);
        assert!(class.annotations.contains("Compact"));
        assert_eq!(
            class.annotations.value("CCode"),
            Some(&Value::Str("foo_t".into()))
        );
    }

    #[test]
    fn repeated_annotation_overwrites_value_in_place() {
        let class =
            parse_one_class("[Version(since = 1)][DBus][Version(since = 2)] public class T { }");
        assert_eq!(class.annotations.len(), 2);
        assert_eq!(class.annotations.value("Version"), Some(&Value::Int(2)));
        let names: Vec<_> = class.annotations.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Version", "DBus"]);
    }

    #[test]
    fn parse_namespace_nesting() {
        let root = parse("namespace A { namespace B { public class Foo { } } }")
            .expect("source should parse");
        assert_eq!(root.name, None);
        let Some(Member::Namespace(a)) = root.members.first() else {
            panic!("expected namespace A");
        };
        assert_eq!(a.name.as_deref(), Some("A"));
        let Some(Member::Namespace(b)) = a.members.first() else {
            panic!("expected namespace B");
        };
        assert_eq!(b.name.as_deref(), Some("B"));
        assert!(matches!(b.members.first(), Some(Member::Class(_))));
    }

    #[test]
    fn parse_dotted_namespace_name() {
        let root = parse("namespace Foo.Bar { public class T { } }").expect("source should parse");
        let Some(Member::Namespace(ns)) = root.members.first() else {
            panic!("expected a namespace");
        };
        assert_eq!(ns.name.as_deref(), Some("Foo.Bar"));
    }

    #[test]
    fn parse_multiple_top_level_declarations() {
        let root = parse("namespace A { } public class B { } namespace C { }")
            .expect("source should parse");
        assert_eq!(root.members.len(), 3);
    }

    #[test]
    fn parse_method_declaration() {
        let class = parse_one_class(
            "public class T { public override async void test_go() throws GLib.Error, IOError; }",
        );
        assert_eq!(class.methods.len(), 1);
        let method = &class.methods[0];
        assert_eq!(method.name, "test_go");
        assert_eq!(method.access, Access::Public);
        assert_eq!(method.return_type, "void");
        assert!(method.is_override);
        assert!(method.is_async);
        assert!(!method.is_abstract);
        assert_eq!(method.throws, vec!["GLib.Error", "IOError"]);
        assert_eq!(method.arity, 0);
    }

    #[test]
    fn parse_postfix_async_marker() {
        let class =
            parse_one_class("public class T { public void test_op() async throws GLib.Error; }");
        let method = &class.methods[0];
        assert!(method.is_async);
        assert_eq!(method.throws, vec!["GLib.Error"]);
    }

    #[test]
    fn parse_abstract_method() {
        let class = parse_one_class("public class T { public abstract void test_x(); }");
        assert!(class.methods[0].is_abstract);
    }

    #[test]
    fn parse_method_with_braced_body() {
        let class = parse_one_class(
            "public class T { public void test_add() { if (x) { y(); } else { z(); } } }",
        );
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "test_add");
    }

    #[test]
    fn braced_bodies_tolerate_expression_code() {
        // Operators and other tokens outside the declarative subset are
        // routine inside implementation bodies; brace matching skips them.
        let class = parse_one_class(
            "public class SampleTest {
                public void test_add()
                {
                    assert(1 + 1 == 2);
                }
                public void test_mix()
                {
                    var total = count * -2 / 3;
                    if (total >= limit && !done) { emit(\"{go}\"); }
                }
            }",
        );
        let names: Vec<_> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["test_add", "test_mix"]);
    }

    #[test]
    fn unterminated_string_in_body_is_reported() {
        let source = "public class T { public void test_x() { emit(\"oops); } }";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
        assert_eq!(&source[err.span.as_range()], "\"oops); } }");
    }

    #[test]
    fn parse_method_parameters_and_arity() {
        let class = parse_one_class(
            "public class T { public void check(int a, string? b = \"x\", GLib.Value c = null); }",
        );
        assert_eq!(class.methods[0].arity, 3);
    }

    #[test]
    fn parse_constructor() {
        let class = parse_one_class("public class T { public T(int x) throws GLib.Error; }");
        assert_eq!(class.constructors.len(), 1);
        let constructor = &class.constructors[0];
        assert_eq!(constructor.name, "T");
        assert_eq!(constructor.access, Access::Public);
        assert_eq!(constructor.arity, 1);
        assert_eq!(constructor.throws, vec!["GLib.Error"]);
    }

    #[test]
    fn parse_named_constructor() {
        let class = parse_one_class("public class T { public T.with_label(string label); }");
        assert_eq!(class.constructors[0].name, "T.with_label");
    }

    #[test]
    fn fields_are_parsed_and_dropped() {
        let class = parse_one_class(
            "public class T { private int count; public string? label; public void test_x(); }",
        );
        assert_eq!(class.methods.len(), 1);
        assert!(class.constructors.is_empty());
    }

    #[test]
    fn member_partitions_preserve_declaration_order() {
        let class = parse_one_class(
            "public class T {
                public void test_b();
                public T();
                public void test_a();
                public T.named();
            }",
        );
        let method_names: Vec<_> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(method_names, vec!["test_b", "test_a"]);
        let constructor_names: Vec<_> = class
            .constructors
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(constructor_names, vec!["T", "T.named"]);
    }

    #[test]
    fn nullable_return_type_keeps_suffix() {
        let class = parse_one_class("public class T { public string? maybe_name(); }");
        assert_eq!(class.methods[0].return_type, "string?");
    }

    #[test]
    fn method_without_access_is_unspecified() {
        let class = parse_one_class("public class T { void helper(); }");
        assert_eq!(class.methods[0].access, Access::Unspecified);
    }

    #[test]
    fn trailing_garbage_is_an_error() {
        let err = parse("public class T { } ;").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn missing_terminator_is_an_error() {
        assert!(parse("public class T { public void test_x() }").is_err());
    }

    #[test]
    fn unterminated_body_reports_open_brace() {
        let source = "public class T { public void test_x() { ";
        let err = parse(source).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedBody);
        assert_eq!(&source[err.span.as_range()], "{");
        assert_eq!(err.span.start(), 38);
    }

    #[test]
    fn stray_character_is_reported() {
        let err = parse("public class T { } @").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedCharacter("@".into()));
    }

    #[test]
    fn unterminated_string_is_reported() {
        let err = parse("[Name(value = \"oops)] class T { }").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    }

    #[test]
    fn oversized_integer_annotation_degrades_to_real() {
        let class = parse_one_class("[V(n = 99999999999999999999)] public class T { }");
        assert_eq!(class.annotations.value("V"), Some(&Value::Real(1e20)));
    }

    #[test]
    fn annotation_values_cover_all_literal_forms() {
        let class = parse_one_class(
            "[A(x = null)][B(x = true)][C(x = -4)][D(x = 2.5)][E(x = 1.5e10)] public class T { }",
        );
        assert_eq!(class.annotations.value("A"), Some(&Value::Null));
        assert_eq!(class.annotations.value("B"), Some(&Value::Bool(true)));
        assert_eq!(class.annotations.value("C"), Some(&Value::Int(-4)));
        assert_eq!(class.annotations.value("D"), Some(&Value::Real(2.5)));
        assert_eq!(class.annotations.value("E"), Some(&Value::Real(1.5e10)));
    }

    #[test]
    fn comments_are_ignored_between_declarations() {
        let class = parse_one_class(
            "// header\npublic class T { /* inline */ public void test_x(); // trail\n }",
        );
        assert_eq!(class.methods.len(), 1);
    }

    #[test]
    fn class_span_covers_declaration() {
        let source = "public class T { }";
        let class = parse_one_class(source);
        assert_eq!(&source[class.span.as_range()], source);
    }

    #[test]
    fn annotated_member_must_be_a_method() {
        // An annotation forces the method production; constructor syntax
        // after one cannot parse.
        assert!(parse("public class T { [Foo] public T(); }").is_err());
    }
}
