// src/diagnostic.rs
//! Diagnostics: what a rule reports when it matches.

use crate::syntax::TextSpan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Severity tiers, ordered least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Not surfaced to the user; still drives fixes.
    Hidden,
    /// Informational message
    Info,
    /// Warning - potential issue
    #[default]
    Warning,
    /// Error - definite problem
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hidden => write!(f, "hidden"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One finding, anchored at the narrowest span that identifies the
/// pattern. Immutable once created; the property bag carries whatever the
/// rule's fix needs to rebuild its decision later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub severity: Severity,
    pub primary_span: TextSpan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_spans: Vec<TextSpan>,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(
        rule_id: &str,
        severity: Severity,
        primary_span: TextSpan,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            primary_span,
            additional_spans: Vec::new(),
            message: message.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Adds a secondary span (e.g. the other half of a merged construct).
    #[must_use]
    pub fn with_additional_span(mut self, span: TextSpan) -> Self {
        self.additional_spans.push(span);
        self
    }

    /// Records a fix-time parameter.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<String>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Hidden < Severity::Info);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn property_bag_round_trip() {
        let diag = Diagnostic::new("merge-nested-if", Severity::Info, TextSpan::new(3, 2), "m")
            .with_property("inner_start", "17")
            .with_additional_span(TextSpan::new(17, 2));
        assert_eq!(diag.property("inner_start"), Some("17"));
        assert_eq!(diag.property("absent"), None);
        assert_eq!(diag.additional_spans.len(), 1);
    }

    #[test]
    fn serializes_to_stable_json() {
        let diag = Diagnostic::new("double-negation", Severity::Warning, TextSpan::new(0, 3), "m");
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"rule_id\":\"double-negation\""));
        assert!(json.contains("\"severity\":\"warning\""));
        // Empty collections stay out of the payload.
        assert!(!json.contains("additional_spans"));
    }
}
