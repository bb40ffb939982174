//! Error types for the campaign rules core

use std::path::PathBuf;
use thiserror::Error;

use crate::contract::Clause;

/// Main error type for the campaign rules core
#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Unexpected skill: {0}")]
    UnknownSkill(String),

    #[error("Academy set not found: {0}")]
    AcademySetNotFound(String),

    #[error("Academy not found: {set}/{name}")]
    AcademyNotFound { set: String, name: String },

    #[error("Course {index} not offered by {academy}")]
    CourseNotFound { academy: String, index: usize },

    #[error("Invalid academy {academy}: {reason}")]
    InvalidAcademy { academy: String, reason: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Academy directory not initialized")]
    NotInitialized,

    #[error("Re-rolls are not allowed for {0} on this contract")]
    RerollsNotAllowed(Clause),

    #[error("No re-rolls remaining for {0}")]
    NoRerollsRemaining(Clause),
}

/// Result type alias for the campaign rules core
pub type Result<T> = std::result::Result<T, CampaignError>;
