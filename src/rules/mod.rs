// src/rules/mod.rs
//! The built-in rule suite.
//!
//! One file per rule. Every rule follows the same contract: bail out on
//! malformed nodes, bail out when a preprocessor directive sits inside
//! the affected span, and never match unless the fix is guaranteed to
//! succeed on the same node.

pub mod boolean_literal;
pub mod double_negation;
pub mod empty_else;
pub mod loop_forever;
pub mod merge_nested_if;
pub mod redundant_braces;

#[cfg(test)]
pub(crate) mod test_support;

use crate::predicates;
use crate::rule::Rule;
use crate::syntax::SyntaxNode;
use std::sync::Arc;

/// True if a comment strictly inside `node` sits outside the one subtree
/// (`kept`) that the fix carries over verbatim. The kept subtree's
/// last-token trailing run does not count as surviving: the rewrite
/// engine overwrites it with the replaced node's own trailing trivia.
///
/// Matching is by text, as a multiset, which is exact enough: a comment
/// that has a twin inside the kept subtree renders identically either way.
pub(crate) fn orphans_a_comment(node: &SyntaxNode, kept: &SyntaxNode) -> bool {
    let mut preserved: Vec<&str> = predicates::interior_trivia(kept)
        .chain(kept.leading_trivia().iter())
        .filter(|t| t.is_comment())
        .map(|t| t.text.as_str())
        .collect();
    for comment in predicates::interior_trivia(node).filter(|t| t.is_comment()) {
        match preserved.iter().position(|p| *p == comment.text) {
            Some(i) => {
                preserved.remove(i);
            }
            None => return true,
        }
    }
    false
}

/// The full built-in suite, ready for [`crate::registry::RuleRegistry::build`].
#[must_use]
pub fn default_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(boolean_literal::RedundantBooleanLiteral),
        Arc::new(merge_nested_if::MergeNestedIf),
        Arc::new(redundant_braces::RedundantBraces),
        Arc::new(loop_forever::LoopForever),
        Arc::new(empty_else::RemoveEmptyElse),
        Arc::new(double_negation::DoubleNegation),
    ]
}
