// src/walker.rs
//! Single-pass dispatch traversal.
//!
//! Depth-first pre-order, parent before children, every node visited
//! exactly once. Rules are fetched per node kind from the registry; each
//! match pushes one diagnostic. Malformed nodes are traversed like any
//! other — individual rules are responsible for bailing out on them.

use crate::diagnostic::Diagnostic;
use crate::error::{EngineError, Result};
use crate::registry::RuleRegistry;
use crate::rule::RuleContext;
use crate::semantics::SemanticContext;
use crate::syntax::{SyntaxKind, SyntaxNode};
use log::trace;

/// Caller-supplied cooperative cancellation probe. Polled between
/// top-level statements so an abandoned analysis stops promptly without
/// the walker checking on every node.
pub type CancelCheck<'a> = &'a (dyn Fn() -> bool + Sync);

pub struct Walker<'a> {
    registry: &'a RuleRegistry,
    semantics: &'a dyn SemanticContext,
    cancel: Option<CancelCheck<'a>>,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub fn new(registry: &'a RuleRegistry, semantics: &'a dyn SemanticContext) -> Self {
        Self {
            registry,
            semantics,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_cancel_check(mut self, cancel: CancelCheck<'a>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Walks the tree and collects every diagnostic any registered rule
    /// reports. Returns `Err(Cancelled)` if the host's cancellation probe
    /// fires; no partial results are surfaced.
    pub fn walk(&self, root: &SyntaxNode) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        let mut ancestors: Vec<&SyntaxNode> = Vec::new();

        if root.kind() == SyntaxKind::CompilationUnit {
            self.visit_one(root, &ancestors, &mut diagnostics);
            ancestors.push(root);
            for child in root.children() {
                if self.is_cancelled() {
                    return Err(EngineError::Cancelled);
                }
                self.visit(child, &mut ancestors, &mut diagnostics);
            }
        } else {
            self.visit(root, &mut ancestors, &mut diagnostics);
        }

        Ok(diagnostics)
    }

    fn visit<'n>(
        &self,
        node: &'n SyntaxNode,
        ancestors: &mut Vec<&'n SyntaxNode>,
        out: &mut Vec<Diagnostic>,
    ) {
        self.visit_one(node, ancestors, out);
        ancestors.push(node);
        for child in node.children() {
            self.visit(child, ancestors, out);
        }
        ancestors.pop();
    }

    fn visit_one(&self, node: &SyntaxNode, ancestors: &[&SyntaxNode], out: &mut Vec<Diagnostic>) {
        let rules = self.registry.rules_for(node.kind());
        if rules.is_empty() {
            return;
        }
        let ctx = RuleContext {
            node,
            ancestors,
            semantics: self.semantics,
        };
        for rule in rules {
            if let Some(diagnostic) = rule.detect(&ctx) {
                trace!(
                    "rule {} matched at {}",
                    diagnostic.rule_id,
                    diagnostic.primary_span
                );
                out.push(diagnostic);
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|probe| probe())
    }
}
