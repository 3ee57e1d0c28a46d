//! Agent state snapshots for persistence.
//!
//! A snapshot captures everything the agent owns — weight map,
//! history, mutation cadence, fitness baseline, tick counter, and
//! tuning scalars — but never behavior. Actions and the fitness probe
//! are closures the caller's environment must reconstruct at load
//! time; the snapshot only records the action count as a structural
//! placeholder so a restore against the wrong action space is caught.
//! Generator state is likewise not captured: a restored agent
//! continues with whatever random source the caller injects.

use crate::agent::{Action, EarlAgent, Fitness};
use crate::error::{AgentError, Result};
use crate::types::{AgentConfig, AgentId, Tick};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Serializable state of an [`EarlAgent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    /// Size of the action space the saved agent was built over.
    pub action_count: usize,
    pub weights: Vec<f64>,
    pub history: Vec<f64>,
    pub mutation_step: u64,
    pub last_fitness: f64,
    pub ticks: Tick,
    pub config: AgentConfig,
}

impl EarlAgent {
    /// Export the agent's full internal state.
    pub fn export_state(&self) -> AgentSnapshot {
        AgentSnapshot {
            id: self.id,
            action_count: self.actions.len(),
            weights: self.weights.clone(),
            history: self.history.clone(),
            mutation_step: self.mutation_step,
            last_fitness: self.last_fitness,
            ticks: self.ticks,
            config: self.config,
        }
    }

    /// Rebuild a live agent from a snapshot, an entropy-seeded
    /// generator, and caller-supplied actions and fitness probe.
    ///
    /// The fitness probe is not invoked here — the restored baseline
    /// is the snapshot's `last_fitness`.
    pub fn from_state(
        snapshot: AgentSnapshot,
        actions: Vec<Box<dyn Action>>,
        fitness: impl Fitness + 'static,
    ) -> Result<Self> {
        Self::from_state_with_rng(snapshot, actions, fitness, Box::new(StdRng::from_entropy()))
    }

    /// Rebuild a live agent from a snapshot with an injected random
    /// source.
    pub fn from_state_with_rng(
        snapshot: AgentSnapshot,
        actions: Vec<Box<dyn Action>>,
        fitness: impl Fitness + 'static,
        rng: Box<dyn RngCore>,
    ) -> Result<Self> {
        if actions.len() != snapshot.action_count {
            return Err(AgentError::ActionSpaceMismatch {
                expected: snapshot.action_count,
                found: actions.len(),
            }
            .into());
        }
        if snapshot.weights.len() != snapshot.action_count
            || snapshot.history.len() != snapshot.action_count
        {
            return Err(AgentError::ActionSpaceMismatch {
                expected: snapshot.action_count,
                found: snapshot.weights.len().min(snapshot.history.len()),
            }
            .into());
        }

        Ok(Self {
            id: snapshot.id,
            actions,
            fitness: Box::new(fitness),
            weights: snapshot.weights,
            history: snapshot.history,
            config: snapshot.config,
            mutation_step: snapshot.mutation_step,
            last_fitness: snapshot.last_fitness,
            ticks: snapshot.ticks,
            rng,
        })
    }
}
