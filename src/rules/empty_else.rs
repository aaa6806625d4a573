// src/rules/empty_else.rs
//! `else { }` does nothing and can go.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::syntax::{SyntaxKind, SyntaxNode};

pub struct RemoveEmptyElse;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "remove-empty-else",
    title: "Remove empty else clause",
    severity: Severity::Info,
    category: RuleCategory::Redundancy,
};

impl Rule for RemoveEmptyElse {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::IfStatement]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        let clause = empty_else_clause(node)?;
        if !predicates::is_analyzable(node) {
            return None;
        }
        // The whole clause is dropped except its last token's trailing
        // run, which the rewrite engine transplants onto the statement.
        // A comment anywhere else in the clause would vanish.
        if predicates::contains_comment(clause.leading_trivia())
            || !predicates::interior_is_whitespace_only(clause)
        {
            return None;
        }

        let else_kw = clause.children().first()?;
        Some(DESCRIPTOR.diagnostic(else_kw.span(), "empty `else` clause"))
    }

    fn fix(&self, node: &SyntaxNode, _diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        if empty_else_clause(node).is_none() {
            return None;
        }
        Some(SyntaxNode::node(
            SyntaxKind::IfStatement,
            node.children()[..5].to_vec(),
        ))
    }
}

/// The trailing else clause, if present and holding nothing but `{ }`.
fn empty_else_clause(node: &SyntaxNode) -> Option<&SyntaxNode> {
    if node.children().len() != 6 {
        return None;
    }
    let clause = node.children().last()?;
    if clause.kind() != SyntaxKind::ElseClause {
        return None;
    }
    let body = clause.children().get(1)?;
    if !predicates::is_empty_block(body) {
        return None;
    }
    Some(clause)
}
