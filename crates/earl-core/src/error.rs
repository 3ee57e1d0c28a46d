//! Error types for EARL operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for EARL operations.
pub type Result<T> = std::result::Result<T, EarlError>;

/// Errors that can occur during EARL operations.
#[derive(Debug, Clone)]
pub enum EarlError {
    /// Agent-related errors.
    Agent(AgentError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for EarlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EarlError::Agent(e) => write!(f, "Agent error: {}", e),
            EarlError::Io(msg) => write!(f, "I/O error: {}", msg),
            EarlError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for EarlError {}

impl From<AgentError> for EarlError {
    fn from(e: AgentError) -> Self {
        EarlError::Agent(e)
    }
}

impl From<std::io::Error> for EarlError {
    fn from(e: std::io::Error) -> Self {
        EarlError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for EarlError {
    fn from(e: serde_json::Error) -> Self {
        EarlError::Serialization(e.to_string())
    }
}

/// Agent-related errors.
#[derive(Debug, Clone)]
pub enum AgentError {
    /// The action space is empty — the agent has nothing to learn over.
    EmptyActionSpace,
    /// Mutation interval band is invalid (min must be >= 1 and <= max).
    InvalidMutationBand { min: u64, max: u64 },
    /// A snapshot was restored against an action space of the wrong size.
    ActionSpaceMismatch { expected: usize, found: usize },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::EmptyActionSpace => write!(f, "Action space is empty"),
            AgentError::InvalidMutationBand { min, max } => {
                write!(f, "Invalid mutation band: [{}, {}] (min must be >= 1 and <= max)", min, max)
            }
            AgentError::ActionSpaceMismatch { expected, found } => {
                write!(
                    f,
                    "Action space mismatch: snapshot expects {} actions, found {}",
                    expected, found
                )
            }
        }
    }
}

impl Error for AgentError {}
