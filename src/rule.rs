// src/rule.rs
//! The `Rule` trait: one detector/fixer pair per pattern.

use crate::diagnostic::{Diagnostic, Severity};
use crate::semantics::SemanticContext;
use crate::syntax::{SyntaxKind, SyntaxNode, TextSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule category for grouping related rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Code that is definitely wrong or useless
    Correctness,
    /// Code that says the same thing twice
    Redundancy,
    /// Code that can be expressed more directly
    Simplification,
    /// Idiomatic and consistent style rules
    #[default]
    Style,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::Correctness => write!(f, "correctness"),
            RuleCategory::Redundancy => write!(f, "redundancy"),
            RuleCategory::Simplification => write!(f, "simplification"),
            RuleCategory::Style => write!(f, "style"),
        }
    }
}

/// The four fields a rule exposes to any host: stable id, human title,
/// default severity and category. This is the whole public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub category: RuleCategory,
}

impl RuleDescriptor {
    /// A diagnostic pre-filled from this descriptor.
    #[must_use]
    pub fn diagnostic(&self, span: TextSpan, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(self.id, self.severity, span, message)
    }
}

/// Everything a detector may look at: the node under inspection, its
/// ancestor chain (root first, parent last) and the host's semantic model.
pub struct RuleContext<'a> {
    pub node: &'a SyntaxNode,
    pub ancestors: &'a [&'a SyntaxNode],
    pub semantics: &'a dyn SemanticContext,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn parent(&self) -> Option<&'a SyntaxNode> {
        self.ancestors.last().copied()
    }
}

/// One pattern: a detector that reports a diagnostic and a fixer that
/// builds the replacement subtree.
///
/// Rules are stateless and shared across threads; `detect` must be pure.
/// Detection and fixability are co-designed: when `detect` reports a
/// diagnostic, `fix` on the same node must succeed. A rule refuses to
/// match (returns `None`) when the node is malformed, when the affected
/// span contains preprocessor directives, or when it cannot guarantee a
/// unique safe replacement.
pub trait Rule: Send + Sync {
    fn descriptor(&self) -> &RuleDescriptor;

    /// The node kinds this rule wants to see. Registered once at startup.
    fn applies_to(&self) -> &[SyntaxKind];

    /// Runs the predicate chain; cheapest checks first, early return.
    fn detect(&self, ctx: &RuleContext<'_>) -> Option<Diagnostic>;

    /// Builds the replacement for a node `detect` matched. The diagnostic
    /// is the one `detect` produced (its property bag carries any
    /// fix-time parameters).
    fn fix(&self, node: &SyntaxNode, diagnostic: &Diagnostic) -> Option<SyntaxNode>;

    fn id(&self) -> &'static str {
        self.descriptor().id
    }
}
