// src/rules/boolean_literal_test.rs

use crate::rules::test_support::{
    assert_fix, assert_no_match, diagnostics_for, diagnostics_with,
};
use crate::semantics::{ExprType, StaticSemantics};
use pretty_assertions::assert_eq;

const RULE: &str = "redundant-boolean-literal";

#[test]
fn equals_true_keeps_the_operand() {
    assert_fix(RULE, "x = y == true;", "x = y;");
}

#[test]
fn not_equals_false_keeps_the_operand() {
    assert_fix(RULE, "x = y != false;", "x = y;");
}

#[test]
fn equals_false_negates() {
    assert_fix(RULE, "x = y == false;", "x = !y;");
}

#[test]
fn not_equals_true_negates() {
    assert_fix(RULE, "x = y != true;", "x = !y;");
}

#[test]
fn literal_on_the_left() {
    assert_fix(RULE, "x = true == y;", "x = y;");
    assert_fix(RULE, "x = false == y;", "x = !y;");
}

#[test]
fn and_true_or_false() {
    assert_fix(RULE, "x = y && true;", "x = y;");
    assert_fix(RULE, "x = false || y;", "x = y;");
}

#[test]
fn negated_binary_operand_gets_parenthesized() {
    assert_fix(RULE, "x = a || b == false;", "x = a || !b;");
    // Here the dropped literal compares the whole disjunction.
    assert_fix(RULE, "x = (a || b) == false;", "x = !(a || b);");
}

#[test]
fn constant_folding_cases_are_left_alone() {
    assert_no_match(RULE, "x = y && false;");
    assert_no_match(RULE, "x = y || true;");
}

#[test]
fn already_fixed_corpus_is_quiet() {
    assert_no_match(RULE, "x = y;");
    assert_no_match(RULE, "x = !y;");
    assert_no_match(RULE, "if (a && b) { Foo(); }");
    assert_no_match(RULE, "x = y == z;");
}

#[test]
fn malformed_input_is_ignored() {
    assert_no_match(RULE, "x = == true;");
    assert_no_match(RULE, "x = y == ;");
}

#[test]
fn comment_between_operands_blocks_the_match() {
    assert_no_match(RULE, "x = y == /* deliberate */ true;");
}

#[test]
fn directive_inside_the_expression_blocks_the_match() {
    assert_no_match(RULE, "x = y ==\n#if DEBUG\ntrue;\n#endif\n");
}

#[test]
fn typed_host_suppresses_non_bool_operands() {
    let sem = StaticSemantics::new()
        .with_type("n", ExprType::Number)
        .with_type("flag", ExprType::Bool);
    assert!(diagnostics_with(RULE, "x = n == true;", &sem).is_empty());
    assert_eq!(diagnostics_with(RULE, "x = flag == true;", &sem).len(), 1);
}

#[test]
fn anchor_covers_operator_and_literal_only() {
    let diags = diagnostics_for(RULE, "x = y == true;");
    assert_eq!(diags.len(), 1);
    let src = "x = y == true;";
    let span = diags[0].primary_span;
    assert_eq!(&src[span.start..span.end()], "== true");
}
