//! # EARL Core
//!
//! The learning loop of EARL (Evolutionary Adaptive Reinforcement
//! Learner): an agent that owns a probability distribution over a
//! fixed set of discrete actions and reshapes it, tick by tick, toward
//! whatever maximizes an external fitness signal.
//!
//! Each tick the agent:
//!
//! 1. Retunes its mutation cadence from the variance of its weights
//! 2. Possibly mutates every weight by a small random amount
//! 3. Samples its actions — each fires with probability equal to its weight
//! 4. Probes the fitness function and computes the change since last tick
//! 5. Shifts the weights of the actions that fired, amplified by each
//!    action's recent success streak, and renormalizes
//!
//! ## Quick Start
//!
//! ```rust
//! use earl_core::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let score = Rc::new(Cell::new(0.0));
//!
//! let s = Rc::clone(&score);
//! let actions: Vec<Box<dyn Action>> = vec![
//!     Box::new(move || s.set(s.get() + 1.0)), // improves fitness
//!     Box::new(|| {}),                        // does nothing
//! ];
//!
//! let probe = Rc::clone(&score);
//! let mut agent = EarlAgent::new(actions, move || probe.get()).unwrap();
//!
//! for _ in 0..100 {
//!     agent.tick();
//! }
//! ```
//!
//! The agent is single-threaded and synchronous: `tick()` runs to
//! completion, invoking actions and the fitness probe strictly in
//! order. Callers that share an agent across threads must serialize
//! access themselves.

pub mod agent;
pub mod error;
pub mod prelude;
pub mod snapshot;
pub mod types;
pub mod weights;

pub use agent::{Action, EarlAgent, Fitness};
pub use error::{AgentError, EarlError, Result};
pub use snapshot::AgentSnapshot;
pub use types::{AgentConfig, AgentId, Tick};
