// src/rules/loop_forever.rs
//! `do { ... } while (true);` spends a trailing condition saying what
//! `for (;;)` says up front.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::rules;
use crate::syntax::{factory, SyntaxKind, SyntaxNode};

#[cfg(test)]
#[path = "loop_forever_test.rs"]
mod tests;

pub struct LoopForever;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "loop-forever",
    title: "Use for (;;) for an unconditional loop",
    severity: Severity::Info,
    category: RuleCategory::Style,
};

impl Rule for LoopForever {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::DoStatement]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        let body = loop_body(node)?;
        if !predicates::is_analyzable(node) {
            return None;
        }
        // Everything outside the body is rebuilt as `for (;;)`; comments
        // living there have nowhere to go.
        if rules::orphans_a_comment(node, body) {
            return None;
        }

        let condition = node.children().get(4)?;
        Some(DESCRIPTOR.diagnostic(
            condition.span(),
            "`while (true)` never terminates the loop; write `for (;;)`",
        ))
    }

    fn fix(&self, node: &SyntaxNode, _diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        let body = loop_body(node)?;
        Some(factory::for_forever(body.clone()))
    }
}

/// The body of a `do body while (true);` statement, or None when the
/// condition is anything but the `true` literal.
fn loop_body(node: &SyntaxNode) -> Option<&SyntaxNode> {
    if node.children().len() != 7 {
        return None;
    }
    let condition = node.children().get(4)?;
    if condition.kind() != SyntaxKind::TrueLiteralExpression {
        return None;
    }
    node.children().get(1)
}
