// src/registry.rs
//! The rule registry: kind → interested rules, built once at startup.

use crate::error::{EngineError, Result};
use crate::rule::Rule;
use crate::syntax::SyntaxKind;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable after construction. A rule is registered under every kind it
/// declares in `applies_to`; lookup during traversal is one hash probe.
pub struct RuleRegistry {
    by_kind: HashMap<SyntaxKind, Vec<Arc<dyn Rule>>>,
    by_id: HashMap<&'static str, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Builds the registry. A duplicate rule id is a configuration error
    /// and fails the build; nothing is registered lazily afterwards.
    pub fn build(rules: Vec<Arc<dyn Rule>>) -> Result<Self> {
        let mut by_kind: HashMap<SyntaxKind, Vec<Arc<dyn Rule>>> = HashMap::new();
        let mut by_id: HashMap<&'static str, Arc<dyn Rule>> = HashMap::new();

        for rule in rules {
            let id = rule.id();
            if by_id.contains_key(id) {
                return Err(EngineError::DuplicateRule { id: id.to_string() });
            }
            for &kind in rule.applies_to() {
                by_kind.entry(kind).or_default().push(Arc::clone(&rule));
            }
            by_id.insert(id, rule);
        }

        Ok(Self { by_kind, by_id })
    }

    /// Rules interested in the given node kind.
    #[must_use]
    pub fn rules_for(&self, kind: SyntaxKind) -> &[Arc<dyn Rule>] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn rule_by_id(&self, id: &str) -> Option<&Arc<dyn Rule>> {
        self.by_id.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All registered rules, in arbitrary order.
    pub fn rules(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.by_id.values()
    }
}
