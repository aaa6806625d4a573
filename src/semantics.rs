// src/semantics.rs
//! The semantic capability boundary.
//!
//! The engine owns no symbol tables or type information; a host that has
//! them implements [`SemanticContext`] and rules consult it through the
//! narrow queries below. Hosts without semantics pass [`NoSemantics`] and
//! rules fall back to purely syntactic judgement.

use crate::syntax::SyntaxNode;
use std::collections::HashMap;

/// Coarse expression types, enough for rules to refuse unsafe rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Bool,
    Number,
    Unknown,
}

/// Host-supplied semantic queries. All methods may answer `None`, meaning
/// "I don't know"; rules must then decide conservatively.
pub trait SemanticContext: Sync {
    /// The type of an expression node, if the host can resolve it.
    fn expression_type(&self, node: &SyntaxNode) -> Option<ExprType>;

    /// Whether the expression is free of side effects, if known. Rules
    /// that duplicate or reorder an expression check this first.
    fn is_pure(&self, node: &SyntaxNode) -> Option<bool> {
        let _ = node;
        None
    }
}

/// A host with no semantic model at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSemantics;

impl SemanticContext for NoSemantics {
    fn expression_type(&self, _node: &SyntaxNode) -> Option<ExprType> {
        None
    }
}

/// A fixed name→type table. Enough semantic model for tests and for
/// simple hosts that know their variables up front.
#[derive(Debug, Default, Clone)]
pub struct StaticSemantics {
    types: HashMap<String, ExprType>,
}

impl StaticSemantics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, name: &str, ty: ExprType) -> Self {
        self.types.insert(name.to_string(), ty);
        self
    }
}

impl SemanticContext for StaticSemantics {
    fn expression_type(&self, node: &SyntaxNode) -> Option<ExprType> {
        use crate::syntax::SyntaxKind::*;
        match node.kind() {
            TrueLiteralExpression | FalseLiteralExpression => Some(ExprType::Bool),
            NumericLiteralExpression => Some(ExprType::Number),
            IdentifierName => {
                let token = node.first_token()?;
                self.types.get(token.text()).copied()
            }
            ParenthesizedExpression => {
                let inner = node.children().get(1)?;
                self.expression_type(inner)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::syntax::SyntaxKind;

    fn first_expr(src: &str) -> SyntaxNode {
        let unit = parse(src);
        unit.children()[0].children()[0].clone()
    }

    #[test]
    fn static_semantics_resolves_names_and_literals() {
        let sem = StaticSemantics::new()
            .with_type("flag", ExprType::Bool)
            .with_type("count", ExprType::Number);

        let flag = first_expr("flag;");
        assert_eq!(sem.expression_type(&flag), Some(ExprType::Bool));

        let count = first_expr("(count);");
        assert_eq!(count.kind(), SyntaxKind::ParenthesizedExpression);
        assert_eq!(sem.expression_type(&count), Some(ExprType::Number));

        let unknown = first_expr("other;");
        assert_eq!(sem.expression_type(&unknown), None);
    }

    #[test]
    fn no_semantics_answers_nothing() {
        let lit = first_expr("true;");
        assert_eq!(NoSemantics.expression_type(&lit), None);
    }
}
