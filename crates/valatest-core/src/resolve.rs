// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Namespace resolution and the class registry.
//!
//! Resolution runs in two phases over the immutable AST. The first phase
//! walks the namespace tree depth-first, assigns every class its
//! fully-qualified name, and records classes with a declared parent. The
//! second phase resolves each recorded parent reference with
//! innermost-scope-first lookup: the full enclosing namespace path is tried
//! as a prefix first, then progressively shorter prefixes down to the empty
//! one. The first registry hit wins; a reference no prefix can satisfy stays
//! as written.
//!
//! The registry preserves class insertion order, which downstream discovery
//! relies on for deterministic output.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::collections::HashMap;

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::ast::{Class, Member, Namespace};
use crate::parse::Span;

/// What to do when two classes resolve to the same fully-qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the earlier entry in place, keeping its iteration position.
    #[default]
    Overwrite,
    /// Fail resolution with a [`DuplicateClassError`].
    Error,
}

/// Two classes resolved to the same fully-qualified name under the
/// [`DuplicatePolicy::Error`] policy.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("duplicate class '{name}'")]
#[diagnostic()]
pub struct DuplicateClassError {
    /// The contested fully-qualified name.
    pub name: EcoString,
    /// The declaration that registered the name first.
    #[label("first declared here")]
    pub first: Span,
    /// The declaration that collided with it.
    #[label("declared again here")]
    pub second: Span,
}

/// A class's parent reference after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentRef {
    /// No inheritance clause was declared.
    None,
    /// The declared parent matched a registry entry; holds its
    /// fully-qualified name.
    Resolved(EcoString),
    /// No prefix lookup matched; holds the parent name as written.
    ///
    /// This is the normal state for parents that live outside the parsed
    /// source, such as library base classes.
    Unresolved(EcoString),
}

impl ParentRef {
    /// Returns the parent name, resolved or as written.
    #[must_use]
    pub fn name(&self) -> Option<&EcoString> {
        match self {
            Self::None => None,
            Self::Resolved(name) | Self::Unresolved(name) => Some(name),
        }
    }

    /// Returns `true` if a parent was declared but matched no registry entry.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved(_))
    }
}

/// A class with its fully-qualified name and resolved parent reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedClass {
    /// The fully-qualified name, composed from enclosing namespaces.
    pub fqn: EcoString,
    /// The parent reference after prefix lookup.
    pub parent: ParentRef,
    /// The parsed declaration.
    pub class: Class,
}

/// An insertion-ordered mapping from fully-qualified name to resolved class.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    entries: Vec<ResolvedClass>,
    index: HashMap<EcoString, usize>,
}

impl ClassRegistry {
    /// Looks up a class by fully-qualified name.
    #[must_use]
    pub fn get(&self, fqn: &str) -> Option<&ResolvedClass> {
        self.index.get(fqn).map(|&i| &self.entries[i])
    }

    /// Returns `true` if the name is registered.
    #[must_use]
    pub fn contains(&self, fqn: &str) -> bool {
        self.index.contains_key(fqn)
    }

    /// Iterates classes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedClass> {
        self.entries.iter()
    }

    /// Returns the number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no classes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, fqn: &str) -> Option<&mut ResolvedClass> {
        self.index.get(fqn).map(|&i| &mut self.entries[i])
    }
}

impl<'a> IntoIterator for &'a ClassRegistry {
    type Item = &'a ResolvedClass;
    type IntoIter = std::slice::Iter<'a, ResolvedClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A parent reference awaiting the second resolution phase.
struct PendingParent {
    /// Dotted namespace path enclosing the class, possibly empty.
    path: EcoString,
    /// Fully-qualified name of the class whose parent needs resolving.
    fqn: EcoString,
}

/// Builds the class registry for a parsed top-level namespace.
///
/// # Errors
///
/// Fails only under [`DuplicatePolicy::Error`], when two classes share a
/// fully-qualified name.
///
/// # Examples
///
/// ```
/// use valatest_core::parse::parse;
/// use valatest_core::resolve::{DuplicatePolicy, resolve};
///
/// let root = parse("namespace A { namespace B { public class Foo { } } }")?;
/// let registry = resolve(&root, DuplicatePolicy::Overwrite)?;
/// assert!(registry.contains("A.B.Foo"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve(
    root: &Namespace,
    policy: DuplicatePolicy,
) -> Result<ClassRegistry, DuplicateClassError> {
    let mut registry = ClassRegistry::default();
    let mut pending = Vec::new();
    let mut path = Vec::new();

    walk(root, &mut path, &mut registry, &mut pending, policy)?;
    resolve_parents(&mut registry, &pending);

    Ok(registry)
}

/// Phase one: register every class under its fully-qualified name.
fn walk(
    namespace: &Namespace,
    path: &mut Vec<EcoString>,
    registry: &mut ClassRegistry,
    pending: &mut Vec<PendingParent>,
    policy: DuplicatePolicy,
) -> Result<(), DuplicateClassError> {
    for member in &namespace.members {
        match member {
            Member::Namespace(nested) => {
                if let Some(name) = &nested.name {
                    path.push(name.clone());
                    walk(nested, path, registry, pending, policy)?;
                    path.pop();
                } else {
                    walk(nested, path, registry, pending, policy)?;
                }
            }
            Member::Class(class) => {
                register(class, path, registry, pending, policy)?;
            }
        }
    }
    Ok(())
}

/// Registers one class, applying the duplicate policy.
fn register(
    class: &Class,
    path: &[EcoString],
    registry: &mut ClassRegistry,
    pending: &mut Vec<PendingParent>,
    policy: DuplicatePolicy,
) -> Result<(), DuplicateClassError> {
    let joined = path
        .iter()
        .map(EcoString::as_str)
        .collect::<Vec<_>>()
        .join(".");
    let fqn = if joined.is_empty() {
        class.name.clone()
    } else {
        EcoString::from(format!("{joined}.{}", class.name))
    };

    let parent = match &class.parent {
        Some(name) => ParentRef::Unresolved(name.clone()),
        None => ParentRef::None,
    };
    let resolved = ResolvedClass {
        fqn: fqn.clone(),
        parent,
        class: class.clone(),
    };

    if let Some(existing) = registry.entry_mut(&fqn) {
        if policy == DuplicatePolicy::Error {
            return Err(DuplicateClassError {
                name: fqn,
                first: existing.class.span,
                second: class.span,
            });
        }
        // Replace in place, keeping the original iteration position. The
        // displaced entry's pending parent record must not leak onto the
        // replacement, which may declare a different parent or none at all.
        *existing = resolved;
        pending.retain(|p| p.fqn != fqn);
    } else {
        let i = registry.entries.len();
        registry.entries.push(resolved);
        registry.index.insert(fqn.clone(), i);
    }

    if class.parent.is_some() {
        pending.push(PendingParent {
            path: EcoString::from(joined),
            fqn,
        });
    }
    Ok(())
}

/// Phase two: innermost-scope-first lookup for every declared parent.
fn resolve_parents(registry: &mut ClassRegistry, pending: &[PendingParent]) {
    for entry in pending {
        let Some(declared) = registry
            .get(&entry.fqn)
            .and_then(|c| c.parent.name())
            .cloned()
        else {
            continue;
        };

        let mut segments: Vec<&str> = if entry.path.is_empty() {
            Vec::new()
        } else {
            entry.path.split('.').collect()
        };

        let resolved = loop {
            let candidate = if segments.is_empty() {
                declared.clone()
            } else {
                EcoString::from(format!("{}.{declared}", segments.join(".")))
            };
            if registry.contains(&candidate) {
                break Some(candidate);
            }
            if segments.pop().is_none() {
                break None;
            }
        };

        if let Some(fqn) = resolved {
            if let Some(class) = registry.entry_mut(&entry.fqn) {
                class.parent = ParentRef::Resolved(fqn);
            }
        }
    }
}
