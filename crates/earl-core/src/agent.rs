//! The EARL agent — weight map, mutation schedule, and the tick loop.
//!
//! The agent owns a probability distribution over its actions (the
//! weight map), a per-action success streak (the history), and a
//! self-tuning mutation cadence. `tick()` drives one full cycle:
//! adjust cadence, possibly mutate, sample actions, probe fitness,
//! shift weights, record streaks.

use crate::error::{AgentError, Result};
use crate::types::{AgentConfig, AgentId, Tick};
use crate::weights;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A zero-argument operation the agent can trigger.
///
/// Implemented for any `FnMut()` closure, so plain closures can be
/// boxed straight into an action space.
pub trait Action {
    /// Fire the action. Any effect happens through captured state.
    fn trigger(&mut self);
}

impl<F: FnMut()> Action for F {
    fn trigger(&mut self) {
        self()
    }
}

/// External probe returning a scalar quality signal for the current
/// environment state.
///
/// Implemented for any `FnMut() -> f64` closure. The agent calls it
/// exactly once per tick (plus once at construction to seed the
/// baseline), and assumes that without intervening actions the value
/// is stable.
pub trait Fitness {
    fn measure(&mut self) -> f64;
}

impl<F: FnMut() -> f64> Fitness for F {
    fn measure(&mut self) -> f64 {
        self()
    }
}

/// An adaptive agent that evolves a probability distribution over a
/// fixed action space to maximize a fitness signal.
///
/// Single-threaded by design: there is no internal locking, and
/// `tick()` invokes actions and the fitness probe strictly
/// sequentially. `tick()` is not transactional — if an action or the
/// fitness probe panics, state already mutated this tick (cadence
/// change, weight mutation, fired actions) stays applied.
pub struct EarlAgent {
    pub(crate) id: AgentId,
    pub(crate) actions: Vec<Box<dyn Action>>,
    pub(crate) fitness: Box<dyn Fitness>,
    pub(crate) weights: Vec<f64>,
    pub(crate) history: Vec<f64>,
    pub(crate) config: AgentConfig,
    pub(crate) mutation_step: u64,
    pub(crate) last_fitness: f64,
    pub(crate) ticks: Tick,
    pub(crate) rng: Box<dyn RngCore>,
}

impl EarlAgent {
    /// Create an agent with default tuning and an entropy-seeded
    /// generator.
    ///
    /// The weight map starts as a normalized random distribution, the
    /// history all-zero, and the fitness baseline is seeded by one
    /// probe of `fitness`.
    pub fn new(actions: Vec<Box<dyn Action>>, fitness: impl Fitness + 'static) -> Result<Self> {
        Self::with_rng(
            actions,
            fitness,
            AgentConfig::default(),
            Box::new(StdRng::from_entropy()),
        )
    }

    /// Create an agent with explicit tuning scalars.
    pub fn with_config(
        actions: Vec<Box<dyn Action>>,
        fitness: impl Fitness + 'static,
        config: AgentConfig,
    ) -> Result<Self> {
        Self::with_rng(actions, fitness, config, Box::new(StdRng::from_entropy()))
    }

    /// Create an agent with a deterministic generator derived from a
    /// seed. Two agents built with the same seed, actions, config, and
    /// fitness behavior produce identical weight trajectories.
    pub fn seeded(
        actions: Vec<Box<dyn Action>>,
        fitness: impl Fitness + 'static,
        config: AgentConfig,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(actions, fitness, config, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Create an agent with a fully injected random source.
    ///
    /// The agent holds no seed of its own: the generator is the only
    /// source of randomness, and its state is never serialized.
    pub fn with_rng(
        actions: Vec<Box<dyn Action>>,
        fitness: impl Fitness + 'static,
        config: AgentConfig,
        mut rng: Box<dyn RngCore>,
    ) -> Result<Self> {
        if actions.is_empty() {
            return Err(AgentError::EmptyActionSpace.into());
        }
        if config.min_mutation_step == 0 || config.min_mutation_step > config.max_mutation_step {
            return Err(AgentError::InvalidMutationBand {
                min: config.min_mutation_step,
                max: config.max_mutation_step,
            }
            .into());
        }

        let weights = weights::random_distribution(actions.len(), &mut *rng);
        let mut fitness: Box<dyn Fitness> = Box::new(fitness);
        let last_fitness = fitness.measure();

        Ok(Self {
            id: AgentId::new(),
            history: vec![0.0; actions.len()],
            mutation_step: config.min_mutation_step,
            ticks: 0,
            actions,
            fitness,
            weights,
            config,
            last_fitness,
            rng,
        })
    }

    /// Run one full cycle of the learning loop.
    ///
    /// Order is fixed: cadence adjustment (on the pre-mutation weight
    /// map), conditional mutation, action sampling, one fitness probe,
    /// weight adjustment for the fired actions, history update, tick
    /// increment. Panics from caller-supplied actions or the fitness
    /// probe propagate unrolled-back.
    pub fn tick(&mut self) {
        self.adjust_mutation_step();

        if self.ticks % self.mutation_step == 0 {
            self.mutate_weight_map();
        }

        let mut fired = Vec::new();
        for i in 0..self.actions.len() {
            if self.rng.gen::<f64>() < self.weights[i] {
                fired.push(i);
                self.actions[i].trigger();
            }
        }

        let fitness = self.fitness.measure();
        let delta_fitness = fitness - self.last_fitness;

        self.adjust_weight_map(delta_fitness, &fired);

        self.last_fitness = fitness;

        if delta_fitness > 0.0 {
            for &i in &fired {
                self.history[i] += 1.0;
            }
        } else {
            // A flat or worse outcome erases the streak of everything
            // that participated.
            for &i in &fired {
                self.history[i] = 0.0;
            }
        }

        self.ticks += 1;
    }

    /// Retune the mutation interval from weight diversity.
    ///
    /// Low variance means the weights have barely differentiated, so
    /// mutate more often to escape the flat region; high variance
    /// means structure has formed, so mutate less and let it persist.
    fn adjust_mutation_step(&mut self) {
        if weights::variance(&self.weights) < self.config.weight_variance_threshold {
            self.mutation_step =
                self.mutation_step.saturating_sub(1).max(self.config.min_mutation_step);
        } else {
            self.mutation_step = (self.mutation_step + 1).min(self.config.max_mutation_step);
        }
    }

    /// Perturb every weight by a uniform draw within
    /// ±`mutation_strength`, clipped to [0, 1]. No renormalization
    /// here — that happens only after a fired-weight adjustment.
    fn mutate_weight_map(&mut self) {
        let strength = self.config.mutation_strength;
        for w in &mut self.weights {
            *w = weights::clip(*w + self.rng.gen_range(-strength..=strength));
        }
    }

    /// Shift the weights of the actions that fired this tick.
    ///
    /// The fitness delta is split evenly across the fired set, each
    /// share amplified by that action's decayed success streak, then
    /// the whole map is renormalized. No-op when nothing fired.
    fn adjust_weight_map(&mut self, delta_fitness: f64, fired: &[usize]) {
        if fired.is_empty() {
            return;
        }

        let weight_modifier = delta_fitness / fired.len() as f64;

        for &i in fired {
            self.history[i] *= self.config.history_decay_factor;
            let history_bias = 1.0 + self.history[i] * self.config.history_bias_strength;
            self.weights[i] = weights::clip(
                self.weights[i] + weight_modifier * self.config.alpha * history_bias,
            );
        }

        self.weights = weights::normalize(&self.weights);
    }

    /// The agent's unique identity.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current probability distribution over the action space.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Per-action decaying success streaks.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Current mutation interval in ticks.
    pub fn mutation_step(&self) -> u64 {
        self.mutation_step
    }

    /// The most recently observed fitness score.
    pub fn last_fitness(&self) -> f64 {
        self.last_fitness
    }

    /// How many ticks this agent has executed.
    pub fn ticks(&self) -> Tick {
        self.ticks
    }

    /// The tuning scalars this agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Number of actions in the action space.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

impl std::fmt::Debug for EarlAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EarlAgent")
            .field("id", &self.id)
            .field("actions", &self.actions.len())
            .field("weights", &self.weights)
            .field("history", &self.history)
            .field("mutation_step", &self.mutation_step)
            .field("last_fitness", &self.last_fitness)
            .field("ticks", &self.ticks)
            .finish()
    }
}
