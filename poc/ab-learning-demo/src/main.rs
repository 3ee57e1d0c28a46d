//! A/B Learning Demo: EARL Discovers the Rewarding Action
//!
//! Proves that the agent's weight map converges toward an action that
//! reliably improves fitness, away from one that does nothing.
//!
//! Protocol:
//! 1. Action A adds 1.0 to the score every time it fires; action B is a no-op
//! 2. Fitness is the raw score, probed once per tick
//! 3. Run 1000 ticks, checkpointing the weight map every 100
//! 4. Save the agent at tick 500, restore it, and confirm the restored
//!    agent finishes the run with the same preference

use earl_core::prelude::*;
use earl_store::{load_agent, save_agent};
use std::cell::Cell;
use std::rc::Rc;

const TOTAL_TICKS: u64 = 1000;
const CHECKPOINT_EVERY: u64 = 100;
const SAVE_AT: u64 = 500;

fn build_actions(score: &Rc<Cell<f64>>) -> Vec<Box<dyn Action>> {
    let s = Rc::clone(score);
    vec![
        Box::new(move || s.set(s.get() + 1.0)), // A: improves fitness
        Box::new(|| {}),                        // B: does nothing
    ]
}

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  EARL A/B Learning: Weight Convergence Toward the   ║");
    println!("║  Rewarding Action                                   ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let score = Rc::new(Cell::new(0.0));
    let probe = Rc::clone(&score);

    let mut agent = EarlAgent::seeded(
        build_actions(&score),
        move || probe.get(),
        AgentConfig::default(),
        2024,
    )
    .expect("two actions and a probe make a valid agent");

    println!("  {:>5} │ {:>8} {:>8} │ {:>5} │ {:>9}", "Tick", "w(A)", "w(B)", "Step", "Fitness");
    println!("  {:─>5}─┼─{:─>8}─{:─>8}─┼─{:─>5}─┼─{:─>9}", "", "", "", "", "");

    let mut saved: Option<Vec<u8>> = None;

    for tick in 1..=TOTAL_TICKS {
        agent.tick();

        if tick % CHECKPOINT_EVERY == 0 {
            println!(
                "  {:>5} │ {:>8.4} {:>8.4} │ {:>5} │ {:>9.1}",
                tick,
                agent.weights()[0],
                agent.weights()[1],
                agent.mutation_step(),
                agent.last_fitness()
            );
        }

        if tick == SAVE_AT {
            let mut buf = Vec::new();
            save_agent(&agent, &mut buf).expect("in-memory save cannot fail on I/O");
            saved = Some(buf);
        }
    }

    println!();
    println!("── Verdict ───────────────────────────────────────────");
    let (w_a, w_b) = (agent.weights()[0], agent.weights()[1]);
    if w_a > w_b {
        println!("  ✓ A dominates: w(A)={:.4} > w(B)={:.4}", w_a, w_b);
    } else {
        println!("  ✗ A does not dominate: w(A)={:.4} w(B)={:.4}", w_a, w_b);
    }

    // --- Restore the mid-run snapshot and finish the second half ---
    println!();
    println!("── Restore From Tick {} ─────────────────────────────", SAVE_AT);

    let buf = saved.expect("snapshot was taken at the halfway mark");
    let score = Rc::new(Cell::new(0.0));
    let probe = Rc::clone(&score);
    let mut restored = load_agent(buf.as_slice(), build_actions(&score), move || probe.get())
        .expect("snapshot restores against an equal-sized action space");

    // Resume the environment where the saved run left off, so the
    // first restored tick doesn't see a spurious fitness drop.
    score.set(restored.last_fitness());

    println!("  resumed at tick {} with w(A)={:.4} w(B)={:.4}",
        restored.ticks(), restored.weights()[0], restored.weights()[1]);

    for _ in 0..(TOTAL_TICKS - SAVE_AT) {
        restored.tick();
    }

    let (w_a, w_b) = (restored.weights()[0], restored.weights()[1]);
    println!("  finished at tick {} with w(A)={:.4} w(B)={:.4}", restored.ticks(), w_a, w_b);
    if w_a > w_b {
        println!("  ✓ restored agent keeps the learned preference");
    } else {
        println!("  ✗ restored agent lost the learned preference");
    }
}
