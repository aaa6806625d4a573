// src/syntax/mod.rs
//! The immutable syntax tree: kinds, spans, trivia, nodes and the
//! construction factory.

pub mod factory;
mod kind;
mod node;
mod span;
mod trivia;

pub use kind::SyntaxKind;
pub use node::{Descendants, SyntaxNode};
pub use span::TextSpan;
pub use trivia::{DirectiveKind, Trivia, TriviaKind};
