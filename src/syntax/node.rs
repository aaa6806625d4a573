// src/syntax/node.rs
//! Immutable syntax nodes with structural sharing.
//!
//! A `SyntaxNode` is either a token (a leaf carrying text plus leading and
//! trailing trivia) or an interior node owning an ordered list of children.
//! Nodes are `Arc`-shared and never mutated; every edit builds a new node
//! and reuses untouched subtrees. Parent access is not stored on the node;
//! the walker hands rules the ancestor chain instead.

use crate::syntax::{SyntaxKind, TextSpan, Trivia};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct SyntaxNode(Arc<NodeData>);

struct NodeData {
    kind: SyntaxKind,
    /// Token text; empty for interior nodes.
    text: String,
    children: Vec<SyntaxNode>,
    leading: Vec<Trivia>,
    trailing: Vec<Trivia>,
    span: TextSpan,
    has_errors: bool,
}

impl SyntaxNode {
    /// Builds a token node.
    #[must_use]
    pub fn token(
        kind: SyntaxKind,
        text: impl Into<String>,
        leading: Vec<Trivia>,
        trailing: Vec<Trivia>,
        span: TextSpan,
    ) -> Self {
        debug_assert!(kind.is_token());
        let has_errors = kind == SyntaxKind::MissingToken;
        Self(Arc::new(NodeData {
            kind,
            text: text.into(),
            children: Vec::new(),
            leading,
            trailing,
            span,
            has_errors,
        }))
    }

    /// A zero-width stand-in for a token the parser expected but did not
    /// find. Marks the whole ancestor chain as containing errors.
    #[must_use]
    pub fn missing(at: usize) -> Self {
        Self::token(
            SyntaxKind::MissingToken,
            "",
            Vec::new(),
            Vec::new(),
            TextSpan::new(at, 0),
        )
    }

    /// Builds an interior node. The span covers the sourced children;
    /// synthesized children carry no position and are skipped, so a fix
    /// that mixes new tokens with reused subtrees never inverts the
    /// bounds. Error flags propagate up from the children.
    #[must_use]
    pub fn node(kind: SyntaxKind, children: Vec<SyntaxNode>) -> Self {
        debug_assert!(!kind.is_token());
        let has_errors = children.iter().any(SyntaxNode::contains_errors);
        let mut start = usize::MAX;
        let mut end = 0;
        for child in &children {
            let s = child.span();
            if s == TextSpan::SYNTHESIZED {
                continue;
            }
            start = start.min(s.start);
            end = end.max(s.end());
        }
        let span = if start == usize::MAX {
            TextSpan::SYNTHESIZED
        } else {
            TextSpan::from_bounds(start, end)
        };
        Self(Arc::new(NodeData {
            kind,
            text: String::new(),
            children,
            leading: Vec::new(),
            trailing: Vec::new(),
            span,
            has_errors,
        }))
    }

    #[must_use]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    #[must_use]
    pub fn is_token(&self) -> bool {
        self.0.kind.is_token()
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.kind == SyntaxKind::MissingToken
    }

    /// True if this node is, or contains, a missing token.
    #[must_use]
    pub fn contains_errors(&self) -> bool {
        self.0.has_errors
    }

    /// Token text; empty for interior nodes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    /// Semantic span: first token start through last token end, trivia
    /// excluded. Synthesized nodes report [`TextSpan::SYNTHESIZED`].
    #[must_use]
    pub fn span(&self) -> TextSpan {
        self.0.span
    }

    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.0.children
    }

    /// First child of the given kind, if any.
    #[must_use]
    pub fn child_of_kind(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.0.children.iter().find(|c| c.kind() == kind)
    }

    /// All children of the given kind, in order.
    pub fn children_of_kind(&self, kind: SyntaxKind) -> impl Iterator<Item = &SyntaxNode> {
        self.0.children.iter().filter(move |c| c.kind() == kind)
    }

    /// First token in this subtree, in source order.
    #[must_use]
    pub fn first_token(&self) -> Option<&SyntaxNode> {
        if self.is_token() {
            return Some(self);
        }
        self.0.children.iter().find_map(SyntaxNode::first_token)
    }

    /// Last token in this subtree, in source order.
    #[must_use]
    pub fn last_token(&self) -> Option<&SyntaxNode> {
        if self.is_token() {
            return Some(self);
        }
        self.0.children.iter().rev().find_map(SyntaxNode::last_token)
    }

    /// Leading trivia of the node's first token.
    #[must_use]
    pub fn leading_trivia(&self) -> &[Trivia] {
        if self.is_token() {
            return &self.0.leading;
        }
        self.first_token().map_or(&[], |t| &t.0.leading)
    }

    /// Trailing trivia of the node's last token.
    #[must_use]
    pub fn trailing_trivia(&self) -> &[Trivia] {
        if self.is_token() {
            return &self.0.trailing;
        }
        self.last_token().map_or(&[], |t| &t.0.trailing)
    }

    /// Pre-order iterator over this node and every descendant, tokens
    /// included. Finite and restartable; creating it costs nothing.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All trivia in this subtree, in source order.
    pub fn descendant_trivia(&self) -> impl Iterator<Item = &Trivia> {
        self.descendants()
            .filter(|n| n.is_token())
            .flat_map(|t| t.0.leading.iter().chain(t.0.trailing.iter()))
    }

    /// True if any trivia in the subtree is a preprocessor directive.
    /// Rules use this to refuse rewrites that could drop a directive.
    #[must_use]
    pub fn contains_directives(&self) -> bool {
        self.descendant_trivia().any(Trivia::is_directive)
    }

    /// Structural equivalence: same kinds and token text, trivia and
    /// spans ignored.
    #[must_use]
    pub fn is_equivalent_to(&self, other: &SyntaxNode) -> bool {
        if self.kind() != other.kind() || self.text() != other.text() {
            return false;
        }
        if self.children().len() != other.children().len() {
            return false;
        }
        self.children()
            .iter()
            .zip(other.children())
            .all(|(a, b)| a.is_equivalent_to(b))
    }

    /// Returns a copy of this node with the given children.
    #[must_use]
    pub fn with_children(&self, children: Vec<SyntaxNode>) -> SyntaxNode {
        debug_assert!(!self.is_token());
        SyntaxNode::node(self.kind(), children)
    }

    /// Returns a copy with child `index` replaced. The rest of the tree
    /// is shared.
    #[must_use]
    pub fn with_child_replaced(&self, index: usize, child: SyntaxNode) -> SyntaxNode {
        let mut children = self.0.children.clone();
        children[index] = child;
        self.with_children(children)
    }

    /// Returns a copy with the first token's leading trivia replaced.
    #[must_use]
    pub fn with_leading_trivia(&self, leading: Vec<Trivia>) -> SyntaxNode {
        if self.is_token() {
            let d = &*self.0;
            return SyntaxNode(Arc::new(NodeData {
                kind: d.kind,
                text: d.text.clone(),
                children: Vec::new(),
                leading,
                trailing: d.trailing.clone(),
                span: d.span,
                has_errors: d.has_errors,
            }));
        }
        let Some(index) = self.0.children.iter().position(|c| c.first_token().is_some()) else {
            return self.clone();
        };
        let child = self.0.children[index].with_leading_trivia(leading);
        self.with_child_replaced(index, child)
    }

    /// Returns a copy with the last token's trailing trivia replaced.
    #[must_use]
    pub fn with_trailing_trivia(&self, trailing: Vec<Trivia>) -> SyntaxNode {
        if self.is_token() {
            let d = &*self.0;
            return SyntaxNode(Arc::new(NodeData {
                kind: d.kind,
                text: d.text.clone(),
                children: Vec::new(),
                leading: d.leading.clone(),
                trailing,
                span: d.span,
                has_errors: d.has_errors,
            }));
        }
        let Some(index) = self
            .0
            .children
            .iter()
            .rposition(|c| c.last_token().is_some())
        else {
            return self.clone();
        };
        let child = self.0.children[index].with_trailing_trivia(trailing);
        self.with_child_replaced(index, child)
    }

    /// Serializes the subtree back to source text, trivia included.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        if self.is_token() {
            for t in &self.0.leading {
                out.push_str(&t.text);
            }
            out.push_str(&self.0.text);
            for t in &self.0.trailing {
                out.push_str(&t.text);
            }
            return;
        }
        for child in &self.0.children {
            child.write_source(out);
        }
    }

    /// Identity comparison: true iff both handles share the same
    /// allocation. Structural sharing makes this the cheap way to ask
    /// "is this that exact node from that exact tree".
    #[must_use]
    pub fn ptr_eq(&self, other: &SyntaxNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_token() {
            write!(f, "{:?}@{} {:?}", self.kind(), self.span(), self.text())
        } else {
            write!(f, "{:?}@{} ({} children)", self.kind(), self.span(), self.children().len())
        }
    }
}

/// Pre-order traversal over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::factory;

    #[test]
    fn interior_span_covers_tokens() {
        let a = SyntaxNode::token(
            SyntaxKind::IdentifierToken,
            "a",
            Vec::new(),
            Vec::new(),
            TextSpan::new(4, 1),
        );
        let op = SyntaxNode::token(
            SyntaxKind::PlusToken,
            "+",
            Vec::new(),
            Vec::new(),
            TextSpan::new(6, 1),
        );
        let b = SyntaxNode::token(
            SyntaxKind::IdentifierToken,
            "b",
            Vec::new(),
            Vec::new(),
            TextSpan::new(8, 1),
        );
        let expr = SyntaxNode::node(
            SyntaxKind::BinaryExpression,
            vec![
                SyntaxNode::node(SyntaxKind::IdentifierName, vec![a]),
                op,
                SyntaxNode::node(SyntaxKind::IdentifierName, vec![b]),
            ],
        );
        assert_eq!(expr.span(), TextSpan::new(4, 5));
    }

    #[test]
    fn synthesized_children_do_not_skew_the_span() {
        // A fix wrapping a sourced subtree in synthesized parentheses:
        // the parens sit at position zero-nothing, the operand does not.
        let sourced = SyntaxNode::node(
            SyntaxKind::IdentifierName,
            vec![SyntaxNode::token(
                SyntaxKind::IdentifierToken,
                "x",
                Vec::new(),
                Vec::new(),
                TextSpan::new(14, 1),
            )],
        );
        let wrapped = factory::parenthesized(sourced);
        assert_eq!(wrapped.span(), TextSpan::new(14, 1));

        // Fully synthesized trees stay synthesized.
        let detached = factory::parenthesized(factory::ident("y"));
        assert_eq!(detached.span(), TextSpan::SYNTHESIZED);
    }

    #[test]
    fn missing_token_propagates_error_flag() {
        let stmt = SyntaxNode::node(
            SyntaxKind::ExpressionStatement,
            vec![factory::ident("x"), SyntaxNode::missing(1)],
        );
        assert!(stmt.contains_errors());
        let unit = SyntaxNode::node(SyntaxKind::CompilationUnit, vec![stmt]);
        assert!(unit.contains_errors());
    }

    #[test]
    fn equivalence_ignores_trivia() {
        let plain = factory::ident("x");
        let spaced = plain.with_leading_trivia(vec![Trivia::whitespace("   ")]);
        assert!(plain.is_equivalent_to(&spaced));
        assert!(!plain.is_equivalent_to(&factory::ident("y")));
    }

    #[test]
    fn render_preserves_trivia_order() {
        let x = factory::ident("x").with_trailing_trivia(vec![Trivia::whitespace(" ")]);
        let eq = factory::punct(SyntaxKind::EqualsEqualsToken)
            .with_trailing_trivia(vec![Trivia::whitespace(" ")]);
        let t = factory::true_literal();
        let expr = SyntaxNode::node(SyntaxKind::BinaryExpression, vec![x, eq, t]);
        assert_eq!(expr.to_source(), "x == true");
    }

    #[test]
    fn with_trivia_rebuilds_through_interior_nodes() {
        let expr = factory::parenthesized(factory::ident("x"));
        let led = expr.with_leading_trivia(vec![Trivia::whitespace("  ")]);
        assert_eq!(led.to_source(), "  (x)");
        // Original untouched.
        assert_eq!(expr.to_source(), "(x)");
    }
}
