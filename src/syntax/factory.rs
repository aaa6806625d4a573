// src/syntax/factory.rs
//! Construction helpers for synthesized nodes.
//!
//! Fixes build replacements from these plus pieces of the original tree.
//! Synthesized tokens carry minimal trivia (a single space where the
//! surface syntax conventionally has one); the rewrite engine transplants
//! the replaced node's outer trivia afterwards.

use crate::syntax::{SyntaxKind, SyntaxNode, TextSpan, Trivia};

/// A synthesized token with explicit text and no trivia.
#[must_use]
pub fn token(kind: SyntaxKind, text: &str) -> SyntaxNode {
    SyntaxNode::token(kind, text, Vec::new(), Vec::new(), TextSpan::SYNTHESIZED)
}

/// A punctuation or keyword token, text taken from the kind.
///
/// # Panics
/// Panics if `kind` has no fixed surface text. Factory misuse is a
/// programming error, not a runtime condition.
#[must_use]
pub fn punct(kind: SyntaxKind) -> SyntaxNode {
    let text = kind
        .fixed_text()
        .unwrap_or_else(|| panic!("kind {kind:?} has no fixed text"));
    token(kind, text)
}

/// Like [`punct`] but with a single trailing space.
#[must_use]
pub fn spaced(kind: SyntaxKind) -> SyntaxNode {
    punct(kind).with_trailing_trivia(vec![Trivia::whitespace(" ")])
}

#[must_use]
pub fn ident(name: &str) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::IdentifierName,
        vec![token(SyntaxKind::IdentifierToken, name)],
    )
}

#[must_use]
pub fn number(text: &str) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::NumericLiteralExpression,
        vec![token(SyntaxKind::NumberToken, text)],
    )
}

#[must_use]
pub fn true_literal() -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::TrueLiteralExpression,
        vec![punct(SyntaxKind::TrueKeyword)],
    )
}

#[must_use]
pub fn false_literal() -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::FalseLiteralExpression,
        vec![punct(SyntaxKind::FalseKeyword)],
    )
}

/// `left op right` with single spaces around the operator.
#[must_use]
pub fn binary(left: SyntaxNode, op: SyntaxKind, right: SyntaxNode) -> SyntaxNode {
    let op = punct(op)
        .with_leading_trivia(vec![Trivia::whitespace(" ")])
        .with_trailing_trivia(vec![Trivia::whitespace(" ")]);
    SyntaxNode::node(SyntaxKind::BinaryExpression, vec![left, op, right])
}

/// `!operand`.
#[must_use]
pub fn logical_not(operand: SyntaxNode) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::PrefixUnaryExpression,
        vec![punct(SyntaxKind::BangToken), operand],
    )
}

/// `(inner)`.
#[must_use]
pub fn parenthesized(inner: SyntaxNode) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::ParenthesizedExpression,
        vec![
            punct(SyntaxKind::OpenParenToken),
            inner,
            punct(SyntaxKind::CloseParenToken),
        ],
    )
}

/// Wraps `expr` in parentheses unless it already is parenthesized or a
/// single-token expression. Used when splicing an operand into a context
/// with tighter precedence.
#[must_use]
pub fn parenthesize_if_binary(expr: SyntaxNode) -> SyntaxNode {
    if expr.kind() == SyntaxKind::BinaryExpression {
        // Strip the operand's outer trivia into the parens so spacing
        // stays outside the new brackets.
        let leading = expr.leading_trivia().to_vec();
        let trailing = expr.trailing_trivia().to_vec();
        let bare = expr
            .with_leading_trivia(Vec::new())
            .with_trailing_trivia(Vec::new());
        parenthesized(bare)
            .with_leading_trivia(leading)
            .with_trailing_trivia(trailing)
    } else {
        expr
    }
}

/// `if (condition) body` — body trivia is the caller's problem.
#[must_use]
pub fn if_statement(condition: SyntaxNode, body: SyntaxNode) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::IfStatement,
        vec![
            spaced(SyntaxKind::IfKeyword),
            punct(SyntaxKind::OpenParenToken),
            condition,
            spaced(SyntaxKind::CloseParenToken),
            body,
        ],
    )
}

/// `for (;;) body`, the canonical infinite loop.
#[must_use]
pub fn for_forever(body: SyntaxNode) -> SyntaxNode {
    SyntaxNode::node(
        SyntaxKind::ForStatement,
        vec![
            spaced(SyntaxKind::ForKeyword),
            punct(SyntaxKind::OpenParenToken),
            punct(SyntaxKind::SemicolonToken),
            punct(SyntaxKind::SemicolonToken),
            spaced(SyntaxKind::CloseParenToken),
            body,
        ],
    )
}
