// src/rules/merge_nested_if.rs
//! `if (a) { if (b) { ... } }` merges into `if (a && b) { ... }`.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::rules;
use crate::syntax::{factory, SyntaxKind, SyntaxNode};

#[cfg(test)]
#[path = "merge_nested_if_test.rs"]
mod tests;

pub struct MergeNestedIf;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "merge-nested-if",
    title: "Merge nested if statements",
    severity: Severity::Info,
    category: RuleCategory::Simplification,
};

impl Rule for MergeNestedIf {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::IfStatement]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        let inner = nested_if(node)?;
        if !predicates::is_analyzable(node) {
            return None;
        }
        // Any comment outside the inner body would be orphaned: the
        // braces and conditions around it are all rebuilt.
        let inner_body = inner.children().get(4)?;
        if rules::orphans_a_comment(node, inner_body) {
            return None;
        }

        let outer_kw = node.children().first()?;
        let inner_kw = inner.children().first()?;
        Some(
            DESCRIPTOR
                .diagnostic(outer_kw.span(), "nested if can be merged with `&&`")
                .with_additional_span(inner_kw.span()),
        )
    }

    fn fix(&self, node: &SyntaxNode, _diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        let inner = nested_if(node)?;
        let outer_condition = node.children().get(2)?;
        let inner_condition = inner.children().get(2)?;
        let body = inner.children().get(4)?;

        let merged = factory::binary(
            guard_against_or(strip_edges(outer_condition)),
            SyntaxKind::AmpAmpToken,
            guard_against_or(strip_edges(inner_condition)),
        );
        Some(factory::if_statement(merged, body.clone()))
    }
}

/// The single nested if, if the outer statement is exactly
/// `if (cond) { if (cond2) ... }` (or the unbraced embedded form) with no
/// else branch on either level.
fn nested_if(node: &SyntaxNode) -> Option<&SyntaxNode> {
    if node.children().len() != 5 {
        return None; // else clause present
    }
    let body = node.children().get(4)?;
    let inner = match body.kind() {
        SyntaxKind::IfStatement => body,
        SyntaxKind::Block => {
            let statements = predicates::block_statements(body);
            let [single] = statements.as_slice() else {
                return None;
            };
            if single.kind() != SyntaxKind::IfStatement {
                return None;
            }
            *single
        }
        _ => return None,
    };
    if inner.children().len() != 5 {
        return None;
    }
    Some(inner)
}

/// Parenthesizes an `||` chain so it keeps its meaning under the new `&&`.
fn guard_against_or(condition: SyntaxNode) -> SyntaxNode {
    let is_or = condition.kind() == SyntaxKind::BinaryExpression
        && condition
            .children()
            .get(1)
            .is_some_and(|op| op.kind() == SyntaxKind::BarBarToken);
    if is_or {
        factory::parenthesized(condition)
    } else {
        condition
    }
}

fn strip_edges(node: &SyntaxNode) -> SyntaxNode {
    node.with_leading_trivia(Vec::new())
        .with_trailing_trivia(Vec::new())
}
