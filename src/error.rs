//! Errors raised by bag building and hashing.
//!
//! Nothing here is retried: extraction is pure, so a failure is reported as is to the caller.
//! Failures coming from a [GraphAlgorithms](crate::graph::GraphAlgorithms) implementation
//! are wrapped without modification in [SigError::Collaborator].


use thiserror::Error;


#[derive(Debug, Error)]
pub enum SigError {
    /// a mode identifier outside the registry
    #[error("invalid bag mode : {0}")]
    InvalidMode(i64),
    /// negative, missing or out of range parameter
    #[error("invalid parameter {name} : {reason}")]
    InvalidParameter { name : &'static str, reason : String },
    /// a label that cannot be turned into utf-8 bytes
    #[error("label encoding error : {0}")]
    Encoding(String),
    /// failure of the graph algorithms collaborator
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
} // end of SigError


impl SigError {
    pub(crate) fn parameter(name : &'static str, reason : impl Into<String>) -> Self {
        SigError::InvalidParameter { name, reason : reason.into() }
    }
}


pub type SigResult<T> = std::result::Result<T, SigError>;
