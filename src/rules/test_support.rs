// src/rules/test_support.rs
//! Shared helpers for rule tests: parse a snippet, run the suite, apply
//! fixes, hand back text.

use crate::diagnostic::Diagnostic;
use crate::parse::parse;
use crate::registry::RuleRegistry;
use crate::rewrite::RewriteEngine;
use crate::rules::default_rules;
use crate::semantics::{NoSemantics, SemanticContext};
use crate::walker::Walker;

pub(crate) fn suite() -> RuleRegistry {
    RuleRegistry::build(default_rules()).expect("default suite builds")
}

/// Diagnostics the given rule reports for a snippet.
pub(crate) fn diagnostics_for(rule_id: &str, src: &str) -> Vec<Diagnostic> {
    diagnostics_with(rule_id, src, &NoSemantics)
}

pub(crate) fn diagnostics_with(
    rule_id: &str,
    src: &str,
    semantics: &dyn SemanticContext,
) -> Vec<Diagnostic> {
    let registry = suite();
    let root = parse(src);
    Walker::new(&registry, semantics)
        .walk(&root)
        .expect("analysis is not cancelled")
        .into_iter()
        .filter(|d| d.rule_id == rule_id)
        .collect()
}

/// Applies the rule's first diagnostic and renders the fixed tree.
pub(crate) fn fix_first(rule_id: &str, src: &str) -> String {
    let registry = suite();
    let root = parse(src);
    let diagnostics = Walker::new(&registry, &NoSemantics)
        .walk(&root)
        .expect("analysis is not cancelled");
    let diagnostic = diagnostics
        .iter()
        .find(|d| d.rule_id == rule_id)
        .unwrap_or_else(|| panic!("rule {rule_id} did not fire on {src:?}"));
    let fixed = RewriteEngine::new(&registry)
        .apply(&root, diagnostic)
        .expect("fix applies");
    fixed.to_source()
}

/// Asserts the rule stays quiet on a snippet. Used for the "already
/// fixed" corpus and for idempotence checks.
pub(crate) fn assert_no_match(rule_id: &str, src: &str) {
    let diagnostics = diagnostics_for(rule_id, src);
    assert!(
        diagnostics.is_empty(),
        "{rule_id} unexpectedly fired on {src:?}: {diagnostics:?}"
    );
}

/// Applies the fix, then asserts the same rule does not fire on its own
/// output and that the output re-parses without errors.
pub(crate) fn assert_fix(rule_id: &str, src: &str, expected: &str) {
    let fixed = fix_first(rule_id, src);
    assert_eq!(fixed, expected, "fix output for {src:?}");
    let reparsed = parse(&fixed);
    assert!(
        !reparsed.contains_errors(),
        "fix output does not re-parse cleanly: {fixed:?}"
    );
    assert_no_match(rule_id, &fixed);
}
