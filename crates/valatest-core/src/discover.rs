// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Test discovery over the resolved class registry.
//!
//! Discovery classifies registered classes as test fixtures and enumerates
//! their runnable test methods, walking each fixture's inheritance chain
//! derived-to-base so overridden methods shadow inherited ones by name.
//! Every rejected class or method produces an informational [`Diagnostic`];
//! nothing here is fatal.
//!
//! The naming rules are configurable through [`Conventions`]; the defaults
//! match the GLib-style fixture layout this tool was built for.

use std::collections::HashSet;

use ecow::EcoString;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::resolve::{ClassRegistry, ParentRef, ResolvedClass};

/// Naming conventions that drive discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    /// Suffix a fully-qualified class name must carry to be a fixture.
    pub class_suffix: EcoString,
    /// Base class that must appear in a fixture's inheritance chain.
    pub marker_base: EcoString,
    /// Prefix a method name must carry to be a test.
    pub method_prefix: EcoString,
    /// Lifecycle hook invoked before each test.
    pub setup_method: EcoString,
    /// Lifecycle hook invoked after each test.
    pub teardown_method: EcoString,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            class_suffix: "Test".into(),
            marker_base: "Drt.TestCase".into(),
            method_prefix: "test_".into(),
            setup_method: "set_up".into(),
            teardown_method: "tear_down".into(),
        }
    }
}

/// One discovered test method.
///
/// The `path` is the slash-delimited identifier the harness registers the
/// test under: `/` + fully-qualified class name with dots replaced by
/// slashes + `/` + method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestEntry {
    /// Hierarchical test path, e.g. `/App/SampleTest/test_add`.
    pub path: EcoString,
    /// Fully-qualified name of the concrete fixture class.
    pub class_name: EcoString,
    /// The test method's simple name.
    pub method_name: EcoString,
    /// Whether the method is declared `async`.
    pub is_async: bool,
    /// Declared exception types, in declaration order.
    pub throws: Vec<EcoString>,
}

/// Enumerates test entries and skip diagnostics for a resolved registry.
///
/// Entries come out in registry insertion order; within one fixture, derived
/// methods precede inherited ones, each partition in declaration order.
///
/// # Examples
///
/// ```
/// use valatest_core::discover::{Conventions, find_tests};
/// use valatest_core::parse::parse;
/// use valatest_core::resolve::{DuplicatePolicy, resolve};
///
/// let root = parse(
///     "namespace App { public class FooTest : Drt.TestCase { public void test_x(); } }",
/// )?;
/// let registry = resolve(&root, DuplicatePolicy::Overwrite)?;
/// let (tests, _diagnostics) = find_tests(&registry, &Conventions::default());
/// assert_eq!(tests[0].path, "/App/FooTest/test_x");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn find_tests(
    registry: &ClassRegistry,
    conventions: &Conventions,
) -> (Vec<TestEntry>, Vec<Diagnostic>) {
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    // Parents that resolved to nothing in the parsed source deserve a note,
    // except the marker base, which normally lives in an external library.
    for class in registry {
        if let ParentRef::Unresolved(parent) = &class.parent {
            if parent != &conventions.marker_base {
                diagnostics.push(Diagnostic::warning(
                    format!(
                        "The parent class {parent} of {} could not be resolved.",
                        class.fqn
                    ),
                    class.class.span,
                ));
            }
        }
    }

    for class in registry {
        let fqn = &class.fqn;
        if !fqn.ends_with(conventions.class_suffix.as_str()) {
            diagnostics.push(Diagnostic::info(
                format!(
                    "The class {fqn} has been ignored because it lacks the '{}' suffix.",
                    conventions.class_suffix
                ),
                class.class.span,
            ));
        } else if class.class.is_abstract {
            diagnostics.push(Diagnostic::info(
                format!("The class {fqn} has been ignored because it is abstract."),
                class.class.span,
            ));
        } else if !class.class.access.is_public() {
            diagnostics.push(Diagnostic::info(
                format!("The class {fqn} has been ignored because it is not public."),
                class.class.span,
            ));
        } else if !inherits_marker(registry, class, &conventions.marker_base) {
            diagnostics.push(Diagnostic::info(
                format!(
                    "The class {fqn} has been ignored because it is not a {} subclass.",
                    conventions.marker_base
                ),
                class.class.span,
            ));
        } else {
            collect_tests(registry, class, conventions, &mut entries, &mut diagnostics);
        }
    }

    (entries, diagnostics)
}

/// Checks whether the marker base appears anywhere in the inheritance chain.
///
/// The comparison is against the parent name itself before any registry
/// lookup, so the marker matches even when it is not a registered class. A
/// visited set stops parent cycles.
fn inherits_marker(registry: &ClassRegistry, class: &ResolvedClass, marker: &str) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = class;
    loop {
        if !visited.insert(current.fqn.as_str()) {
            return false;
        }
        let Some(parent) = current.parent.name() else {
            return false;
        };
        if parent == marker {
            return true;
        }
        match registry.get(parent) {
            Some(next) => current = next,
            None => return false,
        }
    }
}

/// Walks the fixture's chain derived-to-base, yielding eligible methods.
///
/// Only yielded names enter the seen-set, so an ineligible derived method
/// does not shadow an eligible inherited one of the same name.
fn collect_tests(
    registry: &ClassRegistry,
    fixture: &ResolvedClass,
    conventions: &Conventions,
    entries: &mut Vec<TestEntry>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let base_path = format!("/{}/", fixture.fqn.replace(".", "/"));
    let mut seen: HashSet<EcoString> = HashSet::new();
    let mut chain_visited: HashSet<&str> = HashSet::new();
    let mut current = Some(fixture);

    while let Some(link) = current {
        if !chain_visited.insert(link.fqn.as_str()) {
            break;
        }
        for method in &link.class.methods {
            let name = &method.name;
            if seen.contains(name) {
                continue;
            }
            if !name.starts_with(conventions.method_prefix.as_str()) {
                if name != &conventions.setup_method && name != &conventions.teardown_method {
                    diagnostics.push(Diagnostic::info(
                        format!(
                            "The method {name} has been ignored because it lacks the '{}' prefix.",
                            conventions.method_prefix
                        ),
                        method.span,
                    ));
                }
                continue;
            }
            if method.is_abstract {
                diagnostics.push(Diagnostic::info(
                    format!("The method {name} has been ignored because it is abstract."),
                    method.span,
                ));
                continue;
            }
            if !method.access.is_public() {
                diagnostics.push(Diagnostic::info(
                    format!("The method {name} has been ignored because it is not public."),
                    method.span,
                ));
                continue;
            }
            if method.return_type != "void" {
                diagnostics.push(Diagnostic::info(
                    format!("The method {name} has been ignored because it returns a value."),
                    method.span,
                ));
                continue;
            }
            seen.insert(name.clone());
            entries.push(TestEntry {
                path: EcoString::from(format!("{base_path}{name}")),
                class_name: fixture.fqn.clone(),
                method_name: name.clone(),
                is_async: method.is_async,
                throws: method.throws.clone(),
            });
        }
        current = link.parent.name().and_then(|parent| registry.get(parent));
    }
}
