// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for the declarative subset.
//!
//! The AST represents the structure of a parsed declaration file. Every node
//! carries a [`Span`] for error reporting. The tree is produced once by
//! [`parse`](crate::parse::parse) and never mutated afterwards; resolution
//! builds its own registry instead of rewriting nodes.
//!
//! # Shape
//!
//! ```ignore
//! // Source: namespace App { public class FooTest : Drt.TestCase { ... } }
//! Namespace {
//!     name: None,                       // synthetic top-level scope
//!     members: vec![Member::Namespace(Namespace {
//!         name: Some("App".into()),
//!         members: vec![Member::Class(Class { name: "FooTest".into(), ... })],
//!         ...
//!     })],
//!     ...
//! }
//! ```

use crate::parse::Span;
use ecow::EcoString;

/// A namespace scope, either declared in source or the synthetic top level.
///
/// The top-level namespace returned by [`parse`](crate::parse::parse) has no
/// name; declared namespaces carry their (possibly dotted) name as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    /// The dotted name as written, or `None` for the top-level scope.
    pub name: Option<EcoString>,
    /// Nested namespaces and classes, in declaration order.
    pub members: Vec<Member>,
    /// Source location spanning the entire declaration.
    pub span: Span,
}

impl Namespace {
    /// Creates a new namespace node.
    #[must_use]
    pub fn new(name: Option<EcoString>, members: Vec<Member>, span: Span) -> Self {
        Self {
            name,
            members,
            span,
        }
    }
}

/// A direct member of a namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// A nested namespace declaration.
    Namespace(Namespace),
    /// A class declaration.
    Class(Class),
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// The simple name as written in source.
    pub name: EcoString,
    /// Declared access, or [`Access::Unspecified`].
    pub access: Access,
    /// Whether the class is declared `abstract`.
    pub is_abstract: bool,
    /// The parent type name as written, if an inheritance clause is present.
    pub parent: Option<EcoString>,
    /// Annotations attached to the declaration.
    pub annotations: Annotations,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Constructors in declaration order.
    pub constructors: Vec<Constructor>,
    /// Source location spanning the entire declaration.
    pub span: Span,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// The method name.
    pub name: EcoString,
    /// Declared access, or [`Access::Unspecified`].
    pub access: Access,
    /// The declared return type, including any `?` suffix.
    pub return_type: EcoString,
    /// Whether the method is declared `abstract`.
    pub is_abstract: bool,
    /// Whether the method is declared `override`.
    pub is_override: bool,
    /// Whether the method is declared `async`.
    pub is_async: bool,
    /// Exception types from the throws clause, in declared order.
    pub throws: Vec<EcoString>,
    /// Annotations attached to the declaration.
    pub annotations: Annotations,
    /// Number of declared parameters.
    pub arity: usize,
    /// Source location spanning the entire declaration.
    pub span: Span,
}

/// A constructor declaration.
///
/// The name is the dotted form written at the declaration site (possibly a
/// named-constructor form such as `Foo.with_bar`); it plays no role in
/// discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    /// The dotted constructor name as written.
    pub name: EcoString,
    /// Declared access, or [`Access::Unspecified`].
    pub access: Access,
    /// Exception types from the throws clause, in declared order.
    pub throws: Vec<EcoString>,
    /// Number of declared parameters.
    pub arity: usize,
    /// Source location spanning the entire declaration.
    pub span: Span,
}

/// A member field declaration.
///
/// Fields are recognized so that class bodies parse, but discovery ignores
/// them; the parser drops them when partitioning a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name.
    pub name: EcoString,
    /// Declared access, or [`Access::Unspecified`].
    pub access: Access,
    /// The declared type, including any `?` suffix.
    pub field_type: EcoString,
    /// Source location spanning the entire declaration.
    pub span: Span,
}

/// A single member of a class body.
///
/// Class bodies interleave the three member forms freely; the parser
/// produces one of these per member and the class node partitions them.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// A method declaration.
    Method(Method),
    /// A constructor declaration.
    Constructor(Constructor),
    /// A field declaration.
    Field(Field),
}

/// A declared access level.
///
/// Absent access keywords yield [`Access::Unspecified`], which is distinct
/// from every explicit level; in particular it does not count as public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// No access keyword was written.
    #[default]
    Unspecified,
}

impl Access {
    /// Returns `true` only for explicitly declared `public`.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    /// Returns the keyword text, or `""` when unspecified.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Unspecified => "",
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value inside an annotation parameter or parameter default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` keyword.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// An integer literal.
    Int(i64),
    /// A real or scientific-notation literal, or an integer too wide for
    /// [`Value::Int`].
    Real(f64),
    /// A double-quoted string literal, unescaped.
    Str(EcoString),
}

/// An ordered annotation set.
///
/// Annotations keep first-seen order; re-declaring a name overwrites its
/// value in place without moving it. Each annotation maps to the value of
/// its first parameter, if it had any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotations {
    entries: Vec<(EcoString, Option<Value>)>,
}

impl Annotations {
    /// Creates an empty annotation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an annotation, overwriting the value of an existing name in
    /// place (its position in iteration order is preserved).
    pub fn insert(&mut self, name: EcoString, value: Option<Value>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns `true` if an annotation with the given name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Returns the value of the named annotation, if present and non-empty.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Iterates annotations in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&EcoString, Option<&Value>)> {
        self.entries.iter().map(|(n, v)| (n, v.as_ref()))
    }

    /// Returns the number of distinct annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no annotations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
