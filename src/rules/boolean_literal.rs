// src/rules/boolean_literal.rs
//! `x == true`, `x != false`, `x && true`, `x || false` say `x` the long
//! way; `x == false` and `x != true` say `!x`.

use crate::diagnostic::{Diagnostic, Severity};
use crate::predicates;
use crate::rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
use crate::semantics::ExprType;
use crate::syntax::{factory, SyntaxKind, SyntaxNode, TextSpan};

#[cfg(test)]
#[path = "boolean_literal_test.rs"]
mod tests;

const KEEP: &str = "keep";
const NEGATE: &str = "negate";

pub struct RedundantBooleanLiteral;

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    id: "redundant-boolean-literal",
    title: "Remove redundant boolean literal",
    severity: Severity::Info,
    category: RuleCategory::Redundancy,
};

impl Rule for RedundantBooleanLiteral {
    fn descriptor(&self) -> &RuleDescriptor {
        &DESCRIPTOR
    }

    fn applies_to(&self) -> &[SyntaxKind] {
        &[SyntaxKind::BinaryExpression]
    }

    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic> {
        let node = ctx.node;
        let [left, op, right] = node.children() else {
            return None;
        };
        let (keep, kept, literal) = if literal_value(right).is_some() {
            ("left", left, right)
        } else if literal_value(left).is_some() {
            ("right", right, left)
        } else {
            return None;
        };
        let negate = match (op.kind(), literal_value(literal)?) {
            (SyntaxKind::EqualsEqualsToken, true) => false,
            (SyntaxKind::EqualsEqualsToken, false) => true,
            (SyntaxKind::BangEqualsToken, false) => false,
            (SyntaxKind::BangEqualsToken, true) => true,
            (SyntaxKind::AmpAmpToken, true) => false,
            (SyntaxKind::BarBarToken, false) => false,
            // `x && false` / `x || true` collapse to a constant, which is
            // a different (suspicious-code) problem; leave them alone.
            _ => return None,
        };

        if !predicates::is_analyzable(node) {
            return None;
        }
        // A comment between the operands would be orphaned by the rewrite.
        if !predicates::interior_is_whitespace_only(node) {
            return None;
        }

        // Only rewrite comparisons the host can confirm (or cannot deny)
        // to be boolean.
        if let Some(ty) = ctx.semantics.expression_type(kept) {
            if ty != ExprType::Bool {
                return None;
            }
        }

        let anchor = TextSpan::from_bounds(
            op.span().start.min(literal.span().start),
            op.span().end().max(literal.span().end()),
        );
        Some(
            DESCRIPTOR
                .diagnostic(
                    anchor,
                    format!("`{}` is redundant here", literal.to_source().trim()),
                )
                .with_additional_span(node.span())
                .with_property(KEEP, keep)
                .with_property(NEGATE, if negate { "true" } else { "false" }),
        )
    }

    fn fix(&self, node: &SyntaxNode, diagnostic: &Diagnostic) -> Option<SyntaxNode> {
        let [left, _op, right] = node.children() else {
            return None;
        };
        let kept = match diagnostic.property(KEEP)? {
            "left" => left,
            _ => right,
        };
        let kept = kept
            .with_leading_trivia(Vec::new())
            .with_trailing_trivia(Vec::new());
        if diagnostic.property(NEGATE)? == "true" {
            Some(factory::logical_not(factory::parenthesize_if_binary(kept)))
        } else {
            Some(kept)
        }
    }
}

fn literal_value(node: &SyntaxNode) -> Option<bool> {
    match node.kind() {
        SyntaxKind::TrueLiteralExpression => Some(true),
        SyntaxKind::FalseLiteralExpression => Some(false),
        _ => None,
    }
}
