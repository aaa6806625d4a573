// src/engine.rs
//! The one-stop entry point: a rule suite plus the traversal and rewrite
//! machinery behind a single struct.
//!
//! Hosts that want fine-grained control can use [`crate::walker::Walker`]
//! and [`crate::rewrite::RewriteEngine`] directly; everything here is a
//! convenience composition of those two.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use log::debug;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::registry::RuleRegistry;
use crate::rewrite::RewriteEngine;
use crate::rule::Rule;
use crate::semantics::SemanticContext;
use crate::syntax::SyntaxNode;
use crate::walker::{CancelCheck, Walker};

/// Everything one analysis pass produced.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub diagnostics: Vec<Diagnostic>,
    pub duration_ms: u128,
}

impl AnalysisReport {
    /// Diagnostic counts keyed by rule id, for summaries.
    #[must_use]
    pub fn counts_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.rule_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Stable machine-readable rendering for host tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct Engine {
    registry: RuleRegistry,
}

impl Engine {
    /// Builds an engine over an explicit rule set. Fails if two rules
    /// share an id.
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Result<Self> {
        Ok(Self {
            registry: RuleRegistry::build(rules)?,
        })
    }

    /// The built-in suite.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(crate::rules::default_rules())
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Runs every registered rule over the tree.
    pub fn analyze(
        &self,
        root: &SyntaxNode,
        semantics: &dyn SemanticContext,
    ) -> Result<AnalysisReport> {
        let start = Instant::now();
        let diagnostics = Walker::new(&self.registry, semantics).walk(root)?;
        let duration_ms = start.elapsed().as_millis();
        debug!(
            "analysis: {} diagnostics in {duration_ms}ms",
            diagnostics.len()
        );
        Ok(AnalysisReport {
            diagnostics,
            duration_ms,
        })
    }

    /// Like [`Engine::analyze`], polling the host's cancellation probe
    /// between top-level statements.
    pub fn analyze_with_cancel(
        &self,
        root: &SyntaxNode,
        semantics: &dyn SemanticContext,
        cancel: CancelCheck<'_>,
    ) -> Result<AnalysisReport> {
        let start = Instant::now();
        let diagnostics = Walker::new(&self.registry, semantics)
            .with_cancel_check(cancel)
            .walk(root)?;
        Ok(AnalysisReport {
            diagnostics,
            duration_ms: start.elapsed().as_millis(),
        })
    }

    /// Analyzes many trees in parallel, one report per tree in input
    /// order. Trees are immutable and rules are `Sync`, so this is a
    /// plain data-parallel map.
    pub fn analyze_batch(
        &self,
        roots: &[SyntaxNode],
        semantics: &dyn SemanticContext,
    ) -> Result<Vec<AnalysisReport>> {
        roots
            .par_iter()
            .map(|root| self.analyze(root, semantics))
            .collect()
    }

    /// Applies one diagnostic's fix and returns the rewritten tree.
    pub fn fix(&self, root: &SyntaxNode, diagnostic: &Diagnostic) -> Result<SyntaxNode> {
        RewriteEngine::new(&self.registry).apply(root, diagnostic)
    }

    /// Applies a whole batch of fixes in one pass over the tree.
    pub fn fix_all(&self, root: &SyntaxNode, diagnostics: &[Diagnostic]) -> Result<SyntaxNode> {
        RewriteEngine::new(&self.registry).apply_all(root, diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::semantics::NoSemantics;
    use pretty_assertions::assert_eq;

    fn engine() -> Engine {
        Engine::with_default_rules().unwrap()
    }

    #[test]
    fn analyze_then_fix_all() {
        let engine = engine();
        let root = parse("a = b == true;\ndo { Poll(); } while (true);\n");
        let report = engine.analyze(&root, &NoSemantics).unwrap();
        assert_eq!(report.diagnostics.len(), 2);

        let fixed = engine.fix_all(&root, &report.diagnostics).unwrap();
        assert_eq!(fixed.to_source(), "a = b;\nfor (;;) { Poll(); }\n");
    }

    #[test]
    fn counts_group_by_rule() {
        let engine = engine();
        let root = parse("a = b == true;\nc = d == false;\nx = !!y;\n");
        let report = engine.analyze(&root, &NoSemantics).unwrap();
        let counts = report.counts_by_rule();
        assert_eq!(counts["redundant-boolean-literal"], 2);
        assert_eq!(counts["double-negation"], 1);
    }

    #[test]
    fn batch_reports_come_back_in_input_order() {
        let engine = engine();
        let roots = vec![parse("x = y == true;"), parse("Foo();"), parse("x = !!y;")];
        let reports = engine.analyze_batch(&roots, &NoSemantics).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].diagnostics.len(), 1);
        assert_eq!(reports[1].diagnostics.len(), 0);
        assert_eq!(reports[2].diagnostics.len(), 1);
    }

    #[test]
    fn report_serializes() {
        let engine = engine();
        let root = parse("x = y == true;");
        let report = engine.analyze(&root, &NoSemantics).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"redundant-boolean-literal\""));
    }
}
