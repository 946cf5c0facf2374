//! Extraction integration tests.
//!
//! Runs the scanner and the declaration parser over JavaScript source and
//! checks the emitted declaration records and anomalies.

use jsdecl_core::text::TextSpan;
use jsdecl_diagnostics::DiagnosticCategory;
use jsdecl_parser::{extract, extract_source, parse, ExtractError, Extraction};
use jsdecl_scanner::tokenize;
use jsdecl_syntax::{FunctionDeclaration, ModifierFlags};
use proptest::prelude::*;

/// Helper: extract from source text, failing the test on a fatal error.
fn extract_ok(source: &str) -> Extraction {
    match extract_source(source) {
        Ok(extraction) => extraction,
        Err(err) => panic!("unexpected failure for {:?}: {}", source, err),
    }
}

/// Helper: extract from source text, failing the test if it succeeds.
fn extract_err(source: &str) -> ExtractError {
    match extract_source(source) {
        Ok(extraction) => panic!("expected failure for {:?}, got {:?}", source, extraction),
        Err(err) => err,
    }
}

/// Helper: `(name, depth, parent)` triples of the declarations in `source`.
fn shape(source: &str) -> Vec<(String, u32, Option<String>)> {
    extract_ok(source)
        .declarations
        .into_iter()
        .map(|d| (d.name, d.depth, d.parent_name))
        .collect()
}

fn names(source: &str) -> Vec<String> {
    shape(source).into_iter().map(|(name, ..)| name).collect()
}

fn modifiers_of(source: &str) -> Vec<ModifierFlags> {
    extract_ok(source)
        .declarations
        .iter()
        .map(|d| d.modifiers)
        .collect()
}

fn anomaly_codes(source: &str) -> Vec<u32> {
    extract_ok(source).anomalies.iter().map(|d| d.code).collect()
}

fn record(name: &str, modifiers: ModifierFlags, depth: u32, parent: Option<&str>, span: (u32, u32)) -> FunctionDeclaration {
    FunctionDeclaration {
        name: name.to_string(),
        modifiers,
        depth,
        parent_name: parent.map(str::to_string),
        span: TextSpan::from_bounds(span.0, span.1),
    }
}

const FIXTURE: &str = "function regular() { return 1; }
async function asyncFunc() { return 2; }
function outer() { function inner() { return 42; } return inner(); }
";

// ============================================================================
// Fixture
// ============================================================================

#[test]
fn test_fixture_declarations() {
    let extraction = extract_ok(FIXTURE);
    assert_eq!(
        extraction.declarations,
        vec![
            record("regular", ModifierFlags::NONE, 0, None, (0, 32)),
            record("asyncFunc", ModifierFlags::ASYNC, 0, None, (33, 73)),
            record("outer", ModifierFlags::NONE, 0, None, (74, 142)),
            record("inner", ModifierFlags::NONE, 1, Some("outer"), (93, 124)),
        ]
    );
    assert!(extraction.anomalies.is_empty());
}

#[test]
fn test_fixture_is_idempotent() {
    let (tokens, _) = tokenize(FIXTURE);
    let first = extract(&tokens).unwrap();
    let second = extract(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fixture_scope_tree() {
    let (tokens, _) = tokenize(FIXTURE);
    let output = parse(&tokens).unwrap();
    assert_eq!(output.root.declarations.len(), 3);
    assert_eq!(output.root.children.len(), 3);
    assert_eq!(output.root.children[2].declarations[0].name, "inner");
    assert_eq!(output.root.declaration_count(), 4);
}

// ============================================================================
// Modifiers
// ============================================================================

#[test]
fn test_generator_declaration() {
    assert_eq!(modifiers_of("function* gen() { yield 1; }"), vec![ModifierFlags::GENERATOR]);
    assert_eq!(modifiers_of("function *spaced() {}"), vec![ModifierFlags::GENERATOR]);
}

#[test]
fn test_async_generator_declaration() {
    assert_eq!(
        modifiers_of("async function* stream() { yield await next(); }"),
        vec![ModifierFlags::ASYNC_GENERATOR]
    );
}

#[test]
fn test_modifiers_do_not_leak_between_declarations() {
    assert_eq!(
        modifiers_of("async function a() {}\nfunction b() {}\nfunction* c() {}"),
        vec![ModifierFlags::ASYNC, ModifierFlags::NONE, ModifierFlags::GENERATOR]
    );
}

#[test]
fn test_async_separated_by_line_break() {
    let extraction = extract_ok("async\nfunction f() {}");
    assert_eq!(extraction.declarations[0].modifiers, ModifierFlags::NONE);
    assert_eq!(extraction.declarations[0].span.start, 6);
    let anomaly = &extraction.anomalies.diagnostics()[0];
    assert_eq!(anomaly.code, 9003);
    assert_eq!(anomaly.category, DiagnosticCategory::Message);
    assert_eq!(anomaly.span, Some(TextSpan::from_bounds(0, 5)));
}

#[test]
fn test_async_arrow_is_not_a_declaration() {
    assert!(names("const f = async () => {};\nasync(x);").is_empty());
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_deep_nesting() {
    assert_eq!(
        shape("function a() { function b() { function c() {} } function d() {} }"),
        vec![
            ("a".to_string(), 0, None),
            ("b".to_string(), 1, Some("a".to_string())),
            ("d".to_string(), 1, Some("a".to_string())),
            ("c".to_string(), 2, Some("b".to_string())),
        ]
    );
}

#[test]
fn test_parent_declarations_precede_children() {
    assert_eq!(
        names("function a() { function a1() {} } function b() { function b1() {} }"),
        vec!["a", "b", "a1", "b1"]
    );
}

#[test]
fn test_blocks_do_not_add_depth() {
    let source = "function f(x) {\n  if (x) { function g() {} } else { while (x) { function h() {} } }\n}";
    assert_eq!(
        shape(source),
        vec![
            ("f".to_string(), 0, None),
            ("g".to_string(), 1, Some("f".to_string())),
            ("h".to_string(), 1, Some("f".to_string())),
        ]
    );
}

#[test]
fn test_function_expressions_are_not_reported() {
    assert!(names("const a = function named() {};\n(function iife() {})();\ncall(function cb() {});").is_empty());
}

#[test]
fn test_declarations_inside_expression_bodies() {
    let source = "function outer() {\n  const run = () => { function viaArrow() {} };\n  list.map(function (x) { function viaCallback() {} });\n}";
    assert_eq!(
        shape(source),
        vec![
            ("outer".to_string(), 0, None),
            ("viaArrow".to_string(), 1, Some("outer".to_string())),
            ("viaCallback".to_string(), 1, Some("outer".to_string())),
        ]
    );
}

#[test]
fn test_default_parameter_body_belongs_to_enclosing_scope() {
    assert_eq!(
        shape("function f(cb = () => { function g() {} }) { function h() {} }"),
        vec![
            ("f".to_string(), 0, None),
            ("g".to_string(), 0, None),
            ("h".to_string(), 1, Some("f".to_string())),
        ]
    );
}

#[test]
fn test_class_and_object_members() {
    let source = "class A extends B {\n  static function() {}\n  method() { function helper() {} }\n}\nconst o = { function: 1, m() { function local() {} }, k: function notMe() {} };";
    assert_eq!(
        shape(source),
        vec![("helper".to_string(), 0, None), ("local".to_string(), 0, None)]
    );
}

#[test]
fn test_statement_positions() {
    let source = "label: function a() {}\nswitch (k) { case 1: function b() {} default: function c() {} }\nif (x) function d() {}\nx = y\nfunction e() {}";
    assert_eq!(names(source), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_exported_declarations() {
    assert_eq!(
        names("export function a() {}\nexport default function b() {}\nexport async function c() {}"),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_braces_after_statement_prefixes_open_blocks() {
    let source = "{ { function a() {} } }\n\
        x; { function b() {} }\n\
        {} { function c() {} }\n\
        if (x) { function d() {} } else { function e() {} }\n\
        do { function f() {} } while (0);\n\
        try { function g() {} } catch (err) { function h() {} } finally { function i() {} }\n\
        try {} catch { function j() {} }\n\
        outer: { function k() {} }\n\
        switch (v) { case 1: { function l() {} } }";
    assert_eq!(names(source), vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"]);
}

#[test]
fn test_braces_after_keyword_prefixes_open_objects() {
    assert!(names("export default { handler: function named() {}, other: 1 }").is_empty());
    assert!(names("export default {\n  name: 'x',\n  data: function data() { return {} }\n}").is_empty());
    assert_eq!(names("export { a, b as default };\nfunction after() {}"), vec!["after"]);
    assert_eq!(
        shape("function r() {\n  return { m: function notReported() {} };\n}\nthrow { n: function alsoNot() {} };"),
        vec![("r".to_string(), 0, None)]
    );
}

#[test]
fn test_return_before_line_break_ends_the_statement() {
    assert_eq!(
        shape("function r() {\n  return\n  { function unreachable() {} }\n}"),
        vec![
            ("r".to_string(), 0, None),
            ("unreachable".to_string(), 1, Some("r".to_string())),
        ]
    );
}

#[test]
fn test_label_and_case_colons_differ_from_object_keys() {
    let source = "loop: for (;;) { break loop; }\n\
        const o = { key: function value() {} };\n\
        switch (k) { case 'a': function viaCase() {} }\n\
        cond ? x : function viaConditional() {};";
    assert_eq!(names(source), vec!["viaCase"]);
}

// ============================================================================
// Literals and comments
// ============================================================================

#[test]
fn test_braces_inside_literals_are_ignored() {
    let source = "function f() {\n  const s = '}';\n  const r = /}{/g;\n  const t = `${ `${ '}' }` } }`;\n  // function commented() {\n  /* } */\n}";
    assert_eq!(names(source), vec!["f"]);
}

#[test]
fn test_function_keyword_in_string_is_not_reported() {
    assert!(names("const s = 'function fake() {}'; const t = `function also() {}`;").is_empty());
}

#[test]
fn test_regex_after_control_header() {
    assert_eq!(names("if (x) /}/.test(s);\nfunction f() {}"), vec!["f"]);
    assert_eq!(names("while (more()) /{/.exec(s);\nfunction g() {}"), vec!["g"]);
}

#[test]
fn test_division_is_not_a_regex() {
    assert_eq!(names("function f(a, b, c) { return a / b / c; }"), vec!["f"]);
}

// ============================================================================
// Anomalies
// ============================================================================

#[test]
fn test_anonymous_default_export_is_an_anomaly() {
    let extraction = extract_ok("export default function () { function inner() {} }");
    assert_eq!(extraction.declarations.len(), 1);
    assert_eq!(extraction.declarations[0].name, "inner");
    assert_eq!(extraction.declarations[0].depth, 0);
    assert_eq!(extraction.anomalies.diagnostics()[0].code, 9001);
    assert_eq!(anomaly_codes("export default async function () {}"), vec![9001]);
}

#[test]
fn test_unrecognized_token_is_skipped() {
    let extraction = extract_ok("function f() { ¤ }");
    assert_eq!(extraction.declarations.len(), 1);
    let anomaly = &extraction.anomalies.diagnostics()[0];
    assert_eq!(anomaly.code, 9002);
    assert_eq!(anomaly.span, Some(TextSpan::from_bounds(15, 17)));
    assert_eq!(anomaly.message_text, "Unrecognized token '¤' was skipped.");
}

#[test]
fn test_scanner_warnings_are_merged_in_order() {
    assert_eq!(anomaly_codes("¤ function f() { let s = 'abc\n}"), vec![9002, 1002]);
}

#[test]
fn test_anomalies_have_no_errors() {
    let extraction = extract_ok("¤ export default function () {}\nasync\nfunction g() {}");
    assert_eq!(extraction.anomalies.len(), 3);
    assert!(!extraction.anomalies.has_errors());
}

// ============================================================================
// Malformed source
// ============================================================================

#[test]
fn test_unmatched_open_brace() {
    let err = extract_err("function f() {\n  function g() {}\n");
    assert_eq!(err.offset(), 13);
    assert_eq!(err.code(), 1107);
}

#[test]
fn test_unmatched_open_brace_reports_outermost() {
    assert_eq!(extract_err("function f() { if (x) {").offset(), 13);
}

#[test]
fn test_stray_close_brace() {
    let err = extract_err("function f() {}\n}");
    assert_eq!(err.offset(), 16);
    assert_eq!(err.code(), 1112);
}

#[test]
fn test_mismatched_closer() {
    assert_eq!(extract_err("function f() { g(1, [2 }").offset(), 20);
}

#[test]
fn test_missing_name() {
    let err = extract_err("function () {}");
    assert_eq!(err.offset(), 9);
    assert_eq!(err.code(), 1103);
    assert_eq!(extract_err("function").offset(), 8);
}

#[test]
fn test_missing_parameter_list() {
    let err = extract_err("function f {}");
    assert_eq!(err.offset(), 11);
    assert_eq!(err.message(), "'(' expected.");
}

#[test]
fn test_missing_body() {
    let err = extract_err("function f()");
    assert_eq!(err.offset(), 12);
    assert_eq!(err.code(), 1144);
    assert_eq!(extract_err("function f() return;").offset(), 13);
}

#[test]
fn test_unterminated_template() {
    let err = extract_err("function f() { return `abc }");
    assert_eq!(err.offset(), 22);
    assert_eq!(err.code(), 1060);
}

#[test]
fn test_unterminated_comment() {
    let err = extract_err("function f() {} /* trailing");
    assert_eq!(err.offset(), 27);
    assert_eq!(err.code(), 1010);
}

#[test]
fn test_failure_after_valid_declarations() {
    let err = extract_err("function ok() {}\nfunction broken( {}");
    assert!(matches!(err, ExtractError::MalformedSource { .. }));
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
struct Shape {
    is_async: bool,
    is_generator: bool,
    body: Vec<Shape>,
}

fn program() -> impl Strategy<Value = Vec<Shape>> {
    let leaf = (any::<bool>(), any::<bool>()).prop_map(|(is_async, is_generator)| Shape {
        is_async,
        is_generator,
        body: Vec::new(),
    });
    let shape = leaf.prop_recursive(4, 32, 4, |inner| {
        (any::<bool>(), any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(
            |(is_async, is_generator, body)| Shape {
                is_async,
                is_generator,
                body,
            },
        )
    });
    prop::collection::vec(shape, 0..5)
}

/// A declaration with its assigned name, in source order.
struct Named {
    name: String,
    modifiers: ModifierFlags,
    body: Vec<Named>,
}

fn assign_names(shapes: &[Shape], counter: &mut usize) -> Vec<Named> {
    shapes
        .iter()
        .map(|shape| {
            let name = format!("f{}", counter);
            *counter += 1;
            let mut modifiers = ModifierFlags::NONE;
            modifiers.set(ModifierFlags::ASYNC, shape.is_async);
            modifiers.set(ModifierFlags::GENERATOR, shape.is_generator);
            Named {
                name,
                modifiers,
                body: assign_names(&shape.body, counter),
            }
        })
        .collect()
}

fn render(decls: &[Named], indent: usize, out: &mut String) {
    for decl in decls {
        out.push_str(&"  ".repeat(indent));
        if decl.modifiers.contains(ModifierFlags::ASYNC) {
            out.push_str("async ");
        }
        out.push_str("function");
        if decl.modifiers.contains(ModifierFlags::GENERATOR) {
            out.push('*');
        }
        out.push_str(&format!(" {}(a, b = {{ k: [1] }}) {{\n", decl.name));
        render(&decl.body, indent + 1, out);
        out.push_str(&"  ".repeat(indent + 1));
        out.push_str("return `${a}`;\n");
        out.push_str(&"  ".repeat(indent));
        out.push_str("}\n");
    }
}

/// Expected records: a scope's own declarations, then each child body in order.
fn expected(decls: &[Named], depth: u32, parent: Option<&str>, out: &mut Vec<(String, ModifierFlags, u32, Option<String>)>) {
    for decl in decls {
        out.push((decl.name.clone(), decl.modifiers, depth, parent.map(str::to_string)));
    }
    for decl in decls {
        expected(&decl.body, depth + 1, Some(&decl.name), out);
    }
}

proptest! {
    #[test]
    fn prop_nesting_matches_source_tree(shapes in program()) {
        let named = assign_names(&shapes, &mut 0);
        let mut source = String::new();
        render(&named, 0, &mut source);
        let mut want = Vec::new();
        expected(&named, 0, None, &mut want);

        let extraction = extract_source(&source).unwrap();
        let got: Vec<_> = extraction
            .declarations
            .iter()
            .map(|d| (d.name.clone(), d.modifiers, d.depth, d.parent_name.clone()))
            .collect();
        prop_assert_eq!(got, want);
        prop_assert!(extraction.anomalies.is_empty());
    }

    #[test]
    fn prop_extraction_is_idempotent(shapes in program()) {
        let named = assign_names(&shapes, &mut 0);
        let mut source = String::new();
        render(&named, 0, &mut source);
        let (tokens, _) = tokenize(&source);
        prop_assert_eq!(extract(&tokens), extract(&tokens));
    }

    #[test]
    fn prop_unclosed_body_fails_without_records(shapes in program()) {
        let named = assign_names(&shapes, &mut 0);
        let mut source = String::new();
        render(&named, 0, &mut source);
        source.push_str("function tail() {\n");
        prop_assert!(extract_source(&source).is_err());
    }
}
