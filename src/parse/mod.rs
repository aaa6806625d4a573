// src/parse/mod.rs
//! The reference host: a lossless lexer and error-tolerant parser for the
//! C-like fragment the rule suite is exercised against.
//!
//! The engine itself never depends on this module; it consumes whatever
//! tree the host hands it. The parser exists so the crate's tests have a
//! host to run against.

mod lexer;
mod parser;

pub use parser::parse;
