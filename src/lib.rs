// src/lib.rs
//! A pattern rule engine for tree-based source rewriting.
//!
//! The pipeline: a host hands over an immutable syntax tree, the
//! [`walker::Walker`] runs every registered [`rule::Rule`] over it and
//! collects [`diagnostic::Diagnostic`]s, and the [`rewrite::RewriteEngine`]
//! turns accepted diagnostics back into rewritten trees without losing a
//! single comment, directive or byte of untouched text. [`engine::Engine`]
//! wraps the whole pipeline for hosts that want one entry point.
//!
//! The crate carries its own lossless reference parser in [`parse`] so the
//! engine can be exercised end to end; real hosts supply their own trees.

pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod parse;
pub mod predicates;
pub mod registry;
pub mod rewrite;
pub mod rule;
pub mod rules;
pub mod semantics;
pub mod syntax;
pub mod walker;

pub use diagnostic::{Diagnostic, Severity};
pub use engine::{AnalysisReport, Engine};
pub use error::{EngineError, Result};
pub use registry::RuleRegistry;
pub use rewrite::RewriteEngine;
pub use rule::{Rule, RuleCategory, RuleContext, RuleDescriptor};
pub use semantics::{ExprType, NoSemantics, SemanticContext, StaticSemantics};
pub use syntax::{SyntaxKind, SyntaxNode, TextSpan, Trivia, TriviaKind};
pub use walker::Walker;
