// tests/rewrite_safety.rs
//! The rewrite guarantees, exercised through the public API: trivia
//! survives, overlapping fixes are refused, cancellation is honored.

use arborist::parse::parse;
use arborist::semantics::NoSemantics;
use arborist::{Engine, EngineError};

fn engine() -> Engine {
    Engine::with_default_rules().unwrap()
}

// --- Trivia preservation ---

#[test]
fn comments_around_the_pattern_survive_every_fix() {
    let cases = [
        (
            "// setup\nx = y == true; // check\n",
            "// setup\nx = y; // check\n",
        ),
        (
            "/* head */ do { Spin(); } while (true); /* tail */\n",
            "/* head */ for (;;) { Spin(); } /* tail */\n",
        ),
        (
            "// outer\nif (a) { if (b) { Work(); } }\n",
            "// outer\nif (a && b) { Work(); }\n",
        ),
    ];
    let engine = engine();
    for (src, want) in cases {
        let root = parse(src);
        let report = engine.analyze(&root, &NoSemantics).unwrap();
        assert_eq!(report.diagnostics.len(), 1, "on {src:?}");
        let fixed = engine.fix_all(&root, &report.diagnostics).unwrap();
        assert_eq!(fixed.to_source(), want);
    }
}

#[test]
fn indentation_is_kept_byte_for_byte() {
    let src = "\t\tx = y == true;\r\n\t\tkeep();\r\n";
    let engine = engine();
    let root = parse(src);
    let report = engine.analyze(&root, &NoSemantics).unwrap();
    let fixed = engine.fix_all(&root, &report.diagnostics).unwrap();
    assert_eq!(fixed.to_source(), "\t\tx = y;\r\n\t\tkeep();\r\n");
}

// --- Overlap handling ---

#[test]
fn overlapping_fixes_fail_the_whole_batch() {
    let engine = engine();
    let root = parse("{ { { Foo(); } } }");
    let report = engine.analyze(&root, &NoSemantics).unwrap();
    assert!(report.diagnostics.len() >= 2);

    let err = engine.fix_all(&root, &report.diagnostics).unwrap_err();
    assert!(matches!(err, EngineError::OverlappingFixes { .. }));
}

#[test]
fn overlap_resolves_by_fixing_one_and_rerunning() {
    let engine = engine();
    let mut root = parse("{ { { Foo(); } } }");
    // Applying the findings one pass at a time converges.
    for _ in 0..3 {
        let report = engine.analyze(&root, &NoSemantics).unwrap();
        let Some(first) = report.diagnostics.first() else {
            break;
        };
        root = engine.fix(&root, first).unwrap();
    }
    assert_eq!(root.to_source(), "{ Foo(); }");
}

// --- Cancellation ---

#[test]
fn cancellation_aborts_with_no_partial_results() {
    let engine = engine();
    let root = parse("x = y == true;\nz = w == true;\n");
    let cancel = || true;
    let err = engine
        .analyze_with_cancel(&root, &NoSemantics, &cancel)
        .unwrap_err();
    assert!(matches!(err, EngineError::Cancelled));
}

#[test]
fn uncancelled_probe_is_harmless() {
    let engine = engine();
    let root = parse("x = y == true;\n");
    let cancel = || false;
    let report = engine
        .analyze_with_cancel(&root, &NoSemantics, &cancel)
        .unwrap();
    assert_eq!(report.diagnostics.len(), 1);
}
