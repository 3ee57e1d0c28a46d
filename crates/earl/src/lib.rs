//! # EARL
//!
//! EARL (Evolutionary Adaptive Reinforcement Learner) is a minimal
//! adaptive agent for small sequential decision problems where a full
//! reinforcement-learning stack is unwarranted. The agent owns a
//! probability distribution over a fixed set of zero-argument actions;
//! each tick it fires a random subset of them, probes an external
//! fitness signal, and nudges the distribution toward whatever
//! produced improvement.
//!
//! ## Quick Start
//!
//! ```rust
//! use earl::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let score = Rc::new(Cell::new(0.0));
//!
//! // Two actions: one improves the score, one does nothing.
//! let s = Rc::clone(&score);
//! let actions: Vec<Box<dyn Action>> = vec![
//!     Box::new(move || s.set(s.get() + 1.0)),
//!     Box::new(|| {}),
//! ];
//!
//! let probe = Rc::clone(&score);
//! let mut agent = EarlAgent::new(actions, move || probe.get()).unwrap();
//!
//! for _ in 0..1000 {
//!     agent.tick();
//! }
//!
//! // The rewarding action's weight trends upward.
//! println!("weights: {:?}", agent.weights());
//! ```
//!
//! ## How Learning Works
//!
//! - **Mutation scheduling** — the interval between weight mutations
//!   self-tunes from the variance of the weight map: undifferentiated
//!   weights trigger more frequent mutation, differentiated weights
//!   less.
//! - **Credit assignment** — each tick's fitness delta is split evenly
//!   across the actions that fired, scaled by `alpha`, and amplified
//!   per action by its recent success streak.
//! - **History bias** — consecutive improving ticks build a decaying
//!   per-action streak; streaky actions receive larger updates in
//!   both directions.
//!
//! ## Persistence
//!
//! Agent state (never behavior) saves to any byte sink and restores
//! against caller-rebuilt actions:
//!
//! ```rust,ignore
//! use earl::prelude::*;
//!
//! let mut buf = Vec::new();
//! save_agent(&agent, &mut buf).unwrap();
//! let restored = load_agent(buf.as_slice(), actions, fitness).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`earl_core`] - the agent and its full learning loop
//! - [`earl_store`] - JSON persistence of agent snapshots

// Re-export all subcrates
pub use earl_core as core;
pub use earl_store as store;

/// Convenient imports for common usage.
pub mod prelude {
    pub use earl_core::prelude::*;
    pub use earl_store::{load_agent, load_agent_from_path, save_agent, save_agent_to_path};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
