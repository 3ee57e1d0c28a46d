//! # EARL Store
//!
//! Persistence collaborator for [`earl_core`] agents: serializes an
//! agent's full internal state (weight map, history, mutation cadence,
//! fitness baseline, tick counter, tuning scalars) to a byte sink as
//! JSON, and restores an equivalent live agent from a byte source.
//!
//! Behavior is never persisted. Actions and the fitness probe are
//! closures only the caller's environment can rebuild, so `load_agent`
//! takes them as arguments and the stored state carries just the
//! action count for validation. Generator state is likewise not
//! stored; a restored agent continues with a fresh random source.
//!
//! ```rust,no_run
//! use earl_core::prelude::*;
//! use earl_store::{load_agent_from_path, save_agent_to_path};
//!
//! # fn run() -> Result<()> {
//! let actions: Vec<Box<dyn Action>> = vec![Box::new(|| {})];
//! let agent = EarlAgent::new(actions, || 0.0)?;
//!
//! save_agent_to_path(&agent, "agent.json".as_ref())?;
//!
//! let actions: Vec<Box<dyn Action>> = vec![Box::new(|| {})];
//! let restored = load_agent_from_path("agent.json".as_ref(), actions, || 0.0)?;
//! # Ok(())
//! # }
//! ```

use earl_core::agent::{Action, EarlAgent, Fitness};
use earl_core::error::Result;
use earl_core::snapshot::AgentSnapshot;
use std::io::{Read, Write};
use std::path::Path;

/// Serialize the agent's state to a byte sink as pretty JSON.
pub fn save_agent<W: Write>(agent: &EarlAgent, mut sink: W) -> Result<()> {
    let snapshot = agent.export_state();
    let json = serde_json::to_string_pretty(&snapshot)?;
    sink.write_all(json.as_bytes())?;
    Ok(())
}

/// Deserialize an agent from a byte source, rebinding the
/// caller-supplied actions and fitness probe.
///
/// Fails with `ActionSpaceMismatch` when `actions` does not have the
/// same length as the action space the agent was saved with.
pub fn load_agent<R: Read>(
    mut source: R,
    actions: Vec<Box<dyn Action>>,
    fitness: impl Fitness + 'static,
) -> Result<EarlAgent> {
    let mut json = String::new();
    source.read_to_string(&mut json)?;
    let snapshot: AgentSnapshot = serde_json::from_str(&json)?;
    EarlAgent::from_state(snapshot, actions, fitness)
}

/// Save an agent to a JSON file, creating parent directories as
/// needed.
pub fn save_agent_to_path(agent: &EarlAgent, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    save_agent(agent, file)
}

/// Load an agent from a JSON file.
pub fn load_agent_from_path(
    path: &Path,
    actions: Vec<Box<dyn Action>>,
    fitness: impl Fitness + 'static,
) -> Result<EarlAgent> {
    let file = std::fs::File::open(path)?;
    load_agent(file, actions, fitness)
}
