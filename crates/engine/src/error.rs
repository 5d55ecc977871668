//! Errors the engine can return.
//!
//! The taxonomy mirrors how callers must react: [`Parse`] is user-correctable
//! command text, [`InvalidAmount`] a domain-invariant violation, [`NotFound`]
//! a missing or foreign-owned row, [`Database`] a storage failure to surface
//! as a generic try-again reply. Nothing is retried here.
//!
//! [`Parse`]: EngineError::Parse
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`NotFound`]: EngineError::NotFound
//! [`Database`]: EngineError::Database

use sea_orm::DbErr;
use thiserror::Error;

use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("\"{0}\" not found")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Parse(a), Self::Parse(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
