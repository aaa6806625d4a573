// src/rules/redundant_braces.rs
//! A block whose only statement is another block has one brace pair too
//! many.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::syntax::{SyntaxKind, SyntaxNode};

#[cfg(test)]
#[path = "redundant_braces_test.rs"]
mod tests;

pub struct RedundantBraces;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "redundant-braces",
    title: "Remove redundant braces",
    severity: Severity::Info,
    category: RuleCategory::Redundancy,
};

impl Rule for RedundantBraces {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::Block]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        let inner = inner_block(node)?;
        if !predicates::is_analyzable(node) {
            return None;
        }
        // The inner brace pair and the whitespace around it disappear;
        // any comment riding on them would disappear too.
        if has_comments_outside(node, inner) {
            return None;
        }

        let open = inner.children().first()?;
        let close = inner.children().last()?;
        Some(
            DESCRIPTOR
                .diagnostic(node.span(), "these braces add nothing")
                .with_additional_span(open.span())
                .with_additional_span(close.span()),
        )
    }

    fn fix(&self, node: &SyntaxNode, _diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        let inner = inner_block(node)?;
        let open = node.children().first()?;
        let close = node.children().last()?;

        let mut children = Vec::with_capacity(inner.children().len());
        children.push(open.clone());
        for child in &inner.children()[1..inner.children().len() - 1] {
            children.push(child.clone());
        }
        children.push(close.clone());
        Some(SyntaxNode::node(SyntaxKind::Block, children))
    }
}

/// The sole inner block, if the node is exactly `{ { ... } }`. A
/// host-built block without its brace tokens is not an error, just not
/// this shape.
fn inner_block(node: &SyntaxNode) -> Option<&SyntaxNode> {
    let statements = predicates::block_statements(node);
    let [single] = statements.as_slice() else {
        return None;
    };
    if single.kind() != SyntaxKind::Block || single.children().len() < 2 {
        return None;
    }
    Some(*single)
}

/// True if a comment inside the outer block would not survive the
/// rewrite. What survives is the statements between the inner braces
/// plus the outer brace tokens with their own attached trivia; both
/// inner brace tokens vanish along with anything riding on them.
fn has_comments_outside(outer: &SyntaxNode, inner: &SyntaxNode) -> bool {
    let mut preserved: Vec<&str> = inner.children()[1..inner.children().len() - 1]
        .iter()
        .flat_map(SyntaxNode::descendant_trivia)
        .filter(|t| t.is_comment())
        .map(|t| t.text.as_str())
        .collect();
    let outer_open_trailing = outer
        .children()
        .first()
        .map(SyntaxNode::trailing_trivia)
        .unwrap_or_default();
    let outer_close_leading = outer
        .children()
        .last()
        .map(SyntaxNode::leading_trivia)
        .unwrap_or_default();
    preserved.extend(
        outer_open_trailing
            .iter()
            .chain(outer_close_leading.iter())
            .filter(|t| t.is_comment())
            .map(|t| t.text.as_str()),
    );
    for comment in predicates::interior_trivia(outer).filter(|t| t.is_comment()) {
        match preserved.iter().position(|p| *p == comment.text) {
            Some(i) => {
                preserved.remove(i);
            }
            None => return true,
        }
    }
    false
}
