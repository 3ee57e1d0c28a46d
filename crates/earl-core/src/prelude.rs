//! EARL Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use earl_core::prelude::*;
//! ```

// Re-export the agent and its collaborator traits
pub use crate::agent::{Action, EarlAgent, Fitness};

// Re-export commonly used types
pub use crate::types::{AgentConfig, AgentId, Tick};

// Re-export the snapshot type
pub use crate::snapshot::AgentSnapshot;

// Re-export error types
pub use crate::error::{AgentError, EarlError, Result};
