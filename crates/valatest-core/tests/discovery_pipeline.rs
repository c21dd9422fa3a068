// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the discovery pipeline.
//!
//! Each test feeds Vala source text through parse → resolve → discover
//! (and for the rendering tests, through [`render`]) and checks the
//! externally observable results: test entries, skip notes, and the
//! generated harness source.

use pretty_assertions::assert_eq;
use valatest_core::codegen::{RenderOptions, render};
use valatest_core::diagnostics::Severity;
use valatest_core::discover::Conventions;
use valatest_core::resolve::{DuplicatePolicy, resolve};
use valatest_core::{Discovery, Error, discover_tests};

fn discover(source: &str) -> Discovery {
    discover_tests(source, &Conventions::default(), DuplicatePolicy::default())
        .expect("source should make it through the pipeline")
}

#[test]
fn sample_fixture_yields_sync_and_async_entries() {
    let discovery = discover(
        "namespace App { class SampleTest : Drt.TestCase { public void test_add() { } public void test_async_op() async throws GLib.Error { } } }",
    );

    // SampleTest itself is skipped: it has no access modifier
    assert!(discovery.tests.is_empty());

    let discovery = discover(
        "namespace App { public class SampleTest : Drt.TestCase { public void test_add() { } public void test_async_op() async throws GLib.Error { } } }",
    );
    assert_eq!(discovery.tests.len(), 2);

    let add = &discovery.tests[0];
    assert_eq!(add.path, "/App/SampleTest/test_add");
    assert_eq!(add.class_name, "App.SampleTest");
    assert_eq!(add.method_name, "test_add");
    assert!(!add.is_async);
    assert!(add.throws.is_empty());

    let async_op = &discovery.tests[1];
    assert_eq!(async_op.path, "/App/SampleTest/test_async_op");
    assert_eq!(async_op.class_name, "App.SampleTest");
    assert_eq!(async_op.method_name, "test_async_op");
    assert!(async_op.is_async);
    assert_eq!(async_op.throws, vec!["GLib.Error"]);
}

#[test]
fn implementation_bodies_are_consumed_without_interpretation() {
    // Real fixture files carry method bodies full of expression code the
    // declarative subset knows nothing about; discovery must see past them.
    let discovery = discover(
        "namespace App
{
    public class SampleTest : Drt.TestCase
    {
        public void test_add()
        {
            assert(1 + 1 == 2);
        }

        public void test_async_op() async throws GLib.Error
        {
            yield do_something();
        }
    }
}",
    );
    let paths: Vec<_> = discovery.tests.iter().map(|t| t.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/App/SampleTest/test_add", "/App/SampleTest/test_async_op"]
    );
    assert!(discovery.diagnostics.is_empty());
}

#[test]
fn nested_namespaces_compose_slash_paths() {
    let discovery = discover(
        "namespace A {
            namespace B {
                public class DeepTest : Drt.TestCase {
                    public void test_deep() { }
                }
            }
        }",
    );
    assert_eq!(discovery.tests.len(), 1);
    assert_eq!(discovery.tests[0].path, "/A/B/DeepTest/test_deep");
    assert_eq!(discovery.tests[0].class_name, "A.B.DeepTest");
}

#[test]
fn dotted_namespace_names_match_nested_ones() {
    let nested = discover(
        "namespace A { namespace B { public class XTest : Drt.TestCase { public void test_x(); } } }",
    );
    let dotted = discover(
        "namespace A.B { public class XTest : Drt.TestCase { public void test_x(); } }",
    );
    assert_eq!(nested.tests, dotted.tests);
}

#[test]
fn partially_qualified_parent_resolves_innermost_first() {
    // Inner.Base shadows the toplevel Base; Inner.ChildTest must inherit
    // from the inner one and pick up its marker ancestry.
    let discovery = discover(
        "public class Base { }
         namespace Inner {
             public class Base : Drt.TestCase { public void test_inherited(); }
             public class ChildTest : Base { public void test_own(); }
         }",
    );
    let child: Vec<_> = discovery
        .tests
        .iter()
        .filter(|t| t.class_name == "Inner.ChildTest")
        .map(|t| t.method_name.as_str())
        .collect();
    assert_eq!(child, vec!["test_own", "test_inherited"]);
}

#[test]
fn override_shadows_inherited_test_once() {
    let discovery = discover(
        "public class BaseTest : Drt.TestCase {
            public void test_shared() { }
        }
        public class ChildTest : BaseTest {
            public override void test_shared() { }
        }",
    );
    let child: Vec<_> = discovery
        .tests
        .iter()
        .filter(|t| t.class_name == "ChildTest")
        .collect();
    assert_eq!(child.len(), 1);
    assert_eq!(child[0].path, "/ChildTest/test_shared");
}

#[test]
fn abstract_base_contributes_methods_but_no_fixture() {
    let discovery = discover(
        "public abstract class CommonTest : Drt.TestCase {
            public void test_common() { }
        }
        public class ConcreteTest : CommonTest {
            public void test_specific() { }
        }",
    );

    // Only the concrete fixture instantiates; it runs both methods.
    let classes: Vec<_> = discovery
        .tests
        .iter()
        .map(|t| t.class_name.as_str())
        .collect();
    assert_eq!(classes, vec!["ConcreteTest", "ConcreteTest"]);
    let paths: Vec<_> = discovery.tests.iter().map(|t| t.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/ConcreteTest/test_specific", "/ConcreteTest/test_common"]
    );
    assert!(discovery
        .diagnostics
        .iter()
        .any(|d| d.message == "The class CommonTest has been ignored because it is abstract."));
}

#[test]
fn duplicate_class_last_declaration_wins() {
    let discovery = discover(
        "public class DupTest : Drt.TestCase { public void test_old(); }
         public class DupTest : Drt.TestCase { public void test_new(); }",
    );
    let methods: Vec<_> = discovery
        .tests
        .iter()
        .map(|t| t.method_name.as_str())
        .collect();
    assert_eq!(methods, vec!["test_new"]);
}

#[test]
fn duplicate_class_is_fatal_under_strict_policy() {
    let result = discover_tests(
        "public class DupTest : Drt.TestCase { }
         public class DupTest : Drt.TestCase { }",
        &Conventions::default(),
        DuplicatePolicy::Error,
    );
    match result {
        Err(Error::DuplicateClass(err)) => assert_eq!(err.name, "DupTest"),
        other => panic!("expected a duplicate-class error, got {other:?}"),
    }
}

#[test]
fn parse_failure_propagates_as_error() {
    let result = discover_tests(
        "namespace App { public class",
        &Conventions::default(),
        DuplicatePolicy::default(),
    );
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn empty_input_is_a_parse_error() {
    let result = discover_tests("", &Conventions::default(), DuplicatePolicy::default());
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn skip_notes_cover_every_rejection_rule() {
    let discovery = discover(
        "public class Helper : Drt.TestCase { }
         public abstract class AbsTest : Drt.TestCase { }
         private class HiddenTest : Drt.TestCase { }
         public class LoneTest { }
         public class FullTest : Drt.TestCase {
             public void prepare();
             public abstract void test_abs();
             internal void test_int();
             public string test_name();
             public void test_ok();
         }",
    );

    assert_eq!(discovery.tests.len(), 1);
    assert_eq!(discovery.tests[0].path, "/FullTest/test_ok");

    let infos: Vec<_> = discovery
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        infos,
        vec![
            "The class Helper has been ignored because it lacks the 'Test' suffix.",
            "The class AbsTest has been ignored because it is abstract.",
            "The class HiddenTest has been ignored because it is not public.",
            "The class LoneTest has been ignored because it is not a Drt.TestCase subclass.",
            "The method prepare has been ignored because it lacks the 'test_' prefix.",
            "The method test_abs has been ignored because it is abstract.",
            "The method test_int has been ignored because it is not public.",
            "The method test_name has been ignored because it returns a value.",
        ]
    );
}

#[test]
fn unresolved_non_marker_parent_is_flagged() {
    let discovery = discover(
        "public class PanelTest : Gtk.Widget { public void test_x(); }
         public class OkTest : Drt.TestCase { public void test_y(); }",
    );
    let warnings: Vec<_> = discovery
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message.as_str())
        .collect();
    // Only the foreign parent warns; the external marker base never does.
    assert_eq!(
        warnings,
        vec!["The parent class Gtk.Widget of PanelTest could not be resolved."]
    );
}

#[test]
fn registry_survives_annotations_and_constructors() {
    let discovery = discover(
        "namespace App {
            [CCode (cname = \"app_widget\")]
            public class WidgetTest : Drt.TestCase {
                private int count;
                public WidgetTest() { }
                public WidgetTest.with_count(int count) { }
                public void test_widget() { }
            }
        }",
    );
    assert_eq!(discovery.tests.len(), 1);
    assert_eq!(discovery.tests[0].path, "/App/WidgetTest/test_widget");
}

#[test]
fn resolve_exposes_every_derivable_name() {
    let root = valatest_core::parse::parse(
        "namespace A {
            public class OuterTest : Drt.TestCase { }
            namespace B { public class InnerTest : Drt.TestCase { } }
        }
        public class TopTest : Drt.TestCase { }",
    )
    .expect("source should parse");
    let registry = resolve(&root, DuplicatePolicy::Overwrite).expect("no duplicates");

    let mut names: Vec<_> = registry.iter().map(|c| c.fqn.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A.B.InnerTest", "A.OuterTest", "TopTest"]);
}

#[test]
fn full_pipeline_renders_runnable_source() {
    let discovery = discover(
        "namespace App { public class SampleTest : Drt.TestCase {
            public void test_add() { }
            public void test_async_op() async throws GLib.Error { }
        } }",
    );
    let source = render(&discovery.tests, &RenderOptions::default());

    assert!(source.starts_with("/* Generated by Valatest */\n"));

    // Sync wrapper, verbatim
    let sync_wrapper = "void valatest_run_App_SampleTest_test_add()\n\
                        {\n\
                        \tvar test = new App.SampleTest();\n\
                        \ttest.set_up();\n\
                        \ttest.test_add();\n\
                        \ttest.tear_down();\n\
                        \ttest.summary();\n\
                        }\n\n";
    assert!(source.contains(sync_wrapper), "missing sync wrapper in:\n{source}");

    // Async wrapper completes its loop before teardown
    assert!(source.contains("void valatest_run_App_SampleTest_test_async_op()"));
    assert!(source.contains("\tvar loop = new MainLoop();\n"));
    assert!(source.contains("\ttest.test_async_op.begin((o, res) =>\n\t{\n"));
    assert!(source.contains("\t\tcatch (GLib.Error e0)\n\t\t{\n\t\t\ttest.exception(e0);\n\t\t}\n"));
    assert!(source.contains("\t\tloop.quit();\n"));
    assert!(source.contains("\tloop.run();\n"));

    // Both wrappers registered under their paths, in order
    assert!(source.contains(
        "\tGLib.Test.add_func(\"/App/SampleTest/test_add\", valatest_run_App_SampleTest_test_add);\n"
    ));
    assert!(source.contains(
        "\tGLib.Test.add_func(\"/App/SampleTest/test_async_op\", valatest_run_App_SampleTest_test_async_op);\n"
    ));
    let first = source.find("add_func(\"/App/SampleTest/test_add\"").expect("sync registration");
    let second = source
        .find("add_func(\"/App/SampleTest/test_async_op\"")
        .expect("async registration");
    assert!(first < second);

    assert!(source.ends_with("\treturn Test.run();\n}\n"));
}

#[test]
fn comments_are_ignored_throughout() {
    let discovery = discover(
        "// leading note
         namespace App { /* block */ public class CTest : Drt.TestCase {
             // a test
             public void test_c(); /* trailing */
         } }",
    );
    assert_eq!(discovery.tests.len(), 1);
    assert_eq!(discovery.tests[0].path, "/App/CTest/test_c");
}
