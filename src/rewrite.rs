// src/rewrite.rs
//! Fix application: tree surgery with trivia preservation.
//!
//! Given a diagnostic, the engine finds the matched node, asks the
//! originating rule for a replacement, transplants the node's outer
//! trivia onto it, validates that no comment or directive is lost, and
//! splices it into a copy of the tree that shares every untouched
//! subtree. Batch application resolves all targets against the original
//! tree first, so earlier edits can never invalidate later ones.

use crate::diagnostic::Diagnostic;
use crate::error::{EngineError, Result};
use crate::registry::RuleRegistry;
use crate::rule::Rule;
use crate::syntax::{SyntaxNode, TextSpan, Trivia};
use log::debug;

pub struct RewriteEngine<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> RewriteEngine<'a> {
    #[must_use]
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Applies a single fix and returns the new tree root.
    pub fn apply(&self, root: &SyntaxNode, diagnostic: &Diagnostic) -> Result<SyntaxNode> {
        self.apply_all(root, std::slice::from_ref(diagnostic))
    }

    /// Applies a batch of fixes in one pass.
    ///
    /// Diagnostics are processed in descending span-start order (a stable,
    /// deterministic order). Fixes whose target spans overlap are mutually
    /// exclusive: the call fails and the host must pick one and re-run
    /// analysis.
    pub fn apply_all(&self, root: &SyntaxNode, diagnostics: &[Diagnostic]) -> Result<SyntaxNode> {
        let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
        ordered.sort_by(|a, b| b.primary_span.start.cmp(&a.primary_span.start));

        // Resolve every target against the original tree before touching
        // anything.
        let mut edits: Vec<(&SyntaxNode, SyntaxNode)> = Vec::new();
        for diagnostic in ordered {
            let rule = self
                .registry
                .rule_by_id(&diagnostic.rule_id)
                .ok_or_else(|| EngineError::UnknownRule {
                    id: diagnostic.rule_id.clone(),
                })?;
            let target = find_target(root, diagnostic.primary_span, rule.as_ref()).ok_or(
                EngineError::NodeNotFound {
                    span: diagnostic.primary_span,
                },
            )?;
            for (prior, _) in &edits {
                if prior.span().overlaps(target.span()) {
                    return Err(EngineError::OverlappingFixes {
                        first: prior.span(),
                        second: target.span(),
                    });
                }
            }
            let replacement = self.build_replacement(rule.as_ref(), target, diagnostic)?;
            edits.push((target, replacement));
        }

        Ok(replace_nodes(root, &edits))
    }

    /// Invokes the rule's fix, transplants outer trivia and validates the
    /// result before it is allowed anywhere near the tree.
    fn build_replacement(
        &self,
        rule: &dyn Rule,
        target: &SyntaxNode,
        diagnostic: &Diagnostic,
    ) -> Result<SyntaxNode> {
        // A directive inside the span means detect should never have
        // matched; refuse rather than corrupt a preprocessor region.
        if target.contains_directives() {
            return Err(EngineError::DirectiveLoss {
                rule: rule.id().to_string(),
            });
        }

        let replacement =
            rule.fix(target, diagnostic)
                .ok_or_else(|| EngineError::FixUnavailable {
                    rule: rule.id().to_string(),
                })?;

        // The node's outer trivia belongs to the surrounding text, not to
        // the pattern; carry it over verbatim.
        let replacement = replacement
            .with_leading_trivia(target.leading_trivia().to_vec())
            .with_trailing_trivia(target.trailing_trivia().to_vec());

        if replacement.contains_directives() {
            return Err(EngineError::DirectiveLoss {
                rule: rule.id().to_string(),
            });
        }

        // Every comment in the original span must survive verbatim.
        let rendered = replacement.to_source();
        for comment in target.descendant_trivia().filter(|t| Trivia::is_comment(t)) {
            if !rendered.contains(&comment.text) {
                return Err(EngineError::CommentLoss {
                    rule: rule.id().to_string(),
                });
            }
        }

        debug!(
            "fix {} at {}: {} bytes replaced",
            rule.id(),
            target.span(),
            target.span().len
        );
        Ok(replacement)
    }
}

/// Finds the innermost node containing `span` whose kind the rule
/// registered for. Mirrors the usual find-node-then-ascend idiom hosts
/// use to map a diagnostic back to its syntax.
fn find_target<'n>(root: &'n SyntaxNode, span: TextSpan, rule: &dyn Rule) -> Option<&'n SyntaxNode> {
    if !root.span().contains(span) {
        return None;
    }
    for child in root.children() {
        if let Some(hit) = find_target(child, span, rule) {
            return Some(hit);
        }
    }
    if rule.applies_to().contains(&root.kind()) {
        Some(root)
    } else {
        None
    }
}

/// Rebuilds the spine above each edited node, sharing everything else.
/// Targets are identified by node identity, so spans never need to stay
/// valid while the tree changes.
fn replace_nodes(node: &SyntaxNode, edits: &[(&SyntaxNode, SyntaxNode)]) -> SyntaxNode {
    for (target, replacement) in edits {
        if node.ptr_eq(target) {
            return replacement.clone();
        }
    }
    if node.is_token() {
        return node.clone();
    }
    let mut changed = false;
    let children: Vec<SyntaxNode> = node
        .children()
        .iter()
        .map(|child| {
            let rebuilt = replace_nodes(child, edits);
            if !rebuilt.ptr_eq(child) {
                changed = true;
            }
            rebuilt
        })
        .collect();
    if changed {
        node.with_children(children)
    } else {
        node.clone()
    }
}
