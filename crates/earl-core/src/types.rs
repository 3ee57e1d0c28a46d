//! Shared types for the EARL agent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id derived from a seed (for testing).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current tick of the learning loop.
pub type Tick = u64;

/// Tuning scalars for an [`EarlAgent`](crate::agent::EarlAgent).
///
/// All fields are fixed at construction. The defaults are the
/// reference parameters; they work reasonably for action spaces of a
/// handful of actions and fitness deltas on the order of 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Weight variance below which the agent mutates more often.
    pub weight_variance_threshold: f64,
    /// Half-width of the uniform perturbation applied to each weight
    /// during a mutation pass.
    pub mutation_strength: f64,
    /// Fastest mutation interval, in ticks. Must be >= 1.
    pub min_mutation_step: u64,
    /// Slowest mutation interval, in ticks.
    pub max_mutation_step: u64,
    /// How strongly an action's success streak amplifies its updates.
    pub history_bias_strength: f64,
    /// Per-update decay applied to success streaks. 1.0 never forgets,
    /// 0.0 forgets everything each tick.
    pub history_decay_factor: f64,
    /// Learning-rate scale applied to every weight update.
    pub alpha: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            weight_variance_threshold: 0.5,
            mutation_strength: 0.1,
            min_mutation_step: 3,
            max_mutation_step: 10,
            history_bias_strength: 0.1,
            history_decay_factor: 0.9,
            alpha: 1.0,
        }
    }
}
