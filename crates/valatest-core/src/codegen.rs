// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Emission of the GLib test-harness boilerplate.
//!
//! [`render`] turns an ordered [`TestEntry`] sequence into Vala source text:
//! one wrapper function per entry plus a `main` that registers every wrapper
//! with `GLib.Test` under its test path. Async tests suspend on a
//! `GLib.MainLoop` that the completion callback quits, so teardown and the
//! summary only run after the async call finishes.
//!
//! The output is plain text assembled in order; nothing here parses or
//! validates Vala.

use ecow::EcoString;

use crate::discover::TestEntry;

/// Leading comment block of every generated file.
const HEADER: &str =
    "/* Generated by Valatest */\n/* Included code blocks are in public domain */\n\n";

/// Options controlling the emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for generated wrapper names. A non-empty prefix is normalized
    /// to end with `_`.
    pub prefix: EcoString,
    /// Setup hook invoked on the fixture before the test method.
    pub setup_method: EcoString,
    /// Teardown hook invoked on the fixture after the test method.
    pub teardown_method: EcoString,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: "valatest_".into(),
            setup_method: "set_up".into(),
            teardown_method: "tear_down".into(),
        }
    }
}

/// Renders the full generated test-runner source for the given entries.
///
/// # Examples
///
/// ```
/// use valatest_core::codegen::{RenderOptions, render};
///
/// let source = render(&[], &RenderOptions::default());
/// assert!(source.contains("int main(string[] argv)"));
/// ```
#[must_use]
pub fn render(tests: &[TestEntry], options: &RenderOptions) -> String {
    let prefix = normalized_prefix(&options.prefix);
    let mut out = String::from(HEADER);

    let mut run_funcs = Vec::with_capacity(tests.len());
    for entry in tests {
        let run_func = format!("{prefix}run{}", entry.path.replace("/", "_"));
        render_wrapper(&mut out, entry, &run_func, options);
        run_funcs.push(run_func);
    }

    render_main(&mut out, tests, &run_funcs);
    out
}

/// Normalizes a wrapper-name prefix: empty stays empty, anything else gets a
/// trailing `_` if it lacks one.
fn normalized_prefix(prefix: &str) -> EcoString {
    if prefix.is_empty() || prefix.ends_with('_') {
        EcoString::from(prefix)
    } else {
        EcoString::from(format!("{prefix}_"))
    }
}

/// Emits one `void <run_func>() { ... }` wrapper.
fn render_wrapper(out: &mut String, entry: &TestEntry, run_func: &str, options: &RenderOptions) {
    out.push_str(&format!("void {run_func}()\n{{\n"));
    out.push_str(&format!("\tvar test = new {}();\n", entry.class_name));
    out.push_str(&format!("\ttest.{}();\n", options.setup_method));

    if entry.is_async {
        render_async_invocation(out, entry);
    } else {
        render_sync_invocation(out, entry);
    }

    out.push_str(&format!("\ttest.{}();\n", options.teardown_method));
    out.push_str("\ttest.summary();\n");
    out.push_str("}\n\n");
}

/// Emits a plain call, wrapped in try/catch when the method throws.
fn render_sync_invocation(out: &mut String, entry: &TestEntry) {
    let method = &entry.method_name;
    if entry.throws.is_empty() {
        out.push_str(&format!("\ttest.{method}();\n"));
        return;
    }
    out.push_str(&format!("\ttry\n\t{{\n\t\ttest.{method}();\n\t}}\n"));
    for (i, error) in entry.throws.iter().enumerate() {
        out.push_str(&format!(
            "\tcatch ({error} e{i})\n\t{{\n\t\ttest.exception(e{i});\n\t}}\n"
        ));
    }
}

/// Emits an async `begin`/`end` pair completing a main loop.
///
/// The callback quits the loop once the call (and any catch clauses) is
/// done, and the wrapper blocks on `loop.run()` so teardown cannot start
/// before the async method finishes.
fn render_async_invocation(out: &mut String, entry: &TestEntry) {
    let method = &entry.method_name;
    out.push_str("\tvar loop = new MainLoop();\n");
    out.push_str(&format!("\ttest.{method}.begin((o, res) =>\n\t{{\n"));
    if entry.throws.is_empty() {
        out.push_str(&format!("\t\ttest.{method}.end(res);\n"));
    } else {
        out.push_str(&format!(
            "\t\ttry\n\t\t{{\n\t\t\ttest.{method}.end(res);\n\t\t}}\n"
        ));
        for (i, error) in entry.throws.iter().enumerate() {
            out.push_str(&format!(
                "\t\tcatch ({error} e{i})\n\t\t{{\n\t\t\ttest.exception(e{i});\n\t\t}}\n"
            ));
        }
    }
    out.push_str("\t\tloop.quit();\n");
    out.push_str("\t});\n");
    out.push_str("\tloop.run();\n");
}

/// Emits the `main` entry point registering every wrapper.
fn render_main(out: &mut String, tests: &[TestEntry], run_funcs: &[String]) {
    out.push_str("int main(string[] argv)\n{\n");
    out.push_str("\tGLib.Test.init(ref argv);\n");
    out.push_str("\tTest.set_nonfatal_assertions();\n");
    for (entry, run_func) in tests.iter().zip(run_funcs) {
        out.push_str(&format!(
            "\tGLib.Test.add_func(\"{}\", {run_func});\n",
            entry.path
        ));
    }
    out.push_str("\treturn Test.run();\n}\n");
}
