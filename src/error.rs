// src/error.rs
use crate::syntax::TextSpan;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("duplicate rule id `{id}` registered")]
    DuplicateRule { id: String },

    #[error("no rule registered with id `{id}`")]
    UnknownRule { id: String },

    #[error("no node found at span {span} matching the diagnostic anchor")]
    NodeNotFound { span: TextSpan },

    #[error("rule `{rule}` matched but produced no fix")]
    FixUnavailable { rule: String },

    #[error("fix for rule `{rule}` would drop a comment present in the original span")]
    CommentLoss { rule: String },

    #[error("fix for rule `{rule}` would drop or duplicate a preprocessor directive")]
    DirectiveLoss { rule: String },

    #[error("fixes at {first} and {second} overlap; apply one and re-run analysis")]
    OverlappingFixes { first: TextSpan, second: TextSpan },

    #[error("analysis cancelled by the host")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, EngineError>;
