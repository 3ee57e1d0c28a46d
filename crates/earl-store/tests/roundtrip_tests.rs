//! Save/load round-trip tests.

use earl_core::prelude::*;
use earl_store::{load_agent, load_agent_from_path, save_agent, save_agent_to_path};
use std::cell::Cell;
use std::rc::Rc;

fn counting_actions(n: usize, fires: &Rc<Cell<u64>>) -> Vec<Box<dyn Action>> {
    (0..n)
        .map(|_| {
            let f = Rc::clone(fires);
            Box::new(move || f.set(f.get() + 1)) as Box<dyn Action>
        })
        .collect()
}

#[test]
fn roundtrip_preserves_all_state() {
    let fires = Rc::new(Cell::new(0u64));
    let probe = Rc::clone(&fires);
    let mut agent = EarlAgent::seeded(
        counting_actions(3, &fires),
        move || probe.get() as f64,
        AgentConfig::default(),
        123,
    )
    .unwrap();

    for _ in 0..50 {
        agent.tick();
    }

    let mut buf = Vec::new();
    save_agent(&agent, &mut buf).unwrap();

    let probe = Rc::clone(&fires);
    let restored = load_agent(
        buf.as_slice(),
        counting_actions(3, &fires),
        move || probe.get() as f64,
    )
    .unwrap();

    assert_eq!(restored.weights(), agent.weights());
    assert_eq!(restored.history(), agent.history());
    assert_eq!(restored.mutation_step(), agent.mutation_step());
    assert_eq!(restored.last_fitness(), agent.last_fitness());
    assert_eq!(restored.ticks(), agent.ticks());
    assert_eq!(restored.config(), agent.config());
    assert_eq!(restored.id(), agent.id());
}

#[test]
fn restored_agent_keeps_learning() {
    let fires = Rc::new(Cell::new(0u64));
    let probe = Rc::clone(&fires);
    let mut agent = EarlAgent::seeded(
        counting_actions(2, &fires),
        move || probe.get() as f64,
        AgentConfig::default(),
        7,
    )
    .unwrap();

    for _ in 0..20 {
        agent.tick();
    }

    let mut buf = Vec::new();
    save_agent(&agent, &mut buf).unwrap();

    let probe = Rc::clone(&fires);
    let mut restored = load_agent(
        buf.as_slice(),
        counting_actions(2, &fires),
        move || probe.get() as f64,
    )
    .unwrap();

    let resumed_at = restored.ticks();
    for _ in 0..20 {
        restored.tick();
    }

    assert_eq!(restored.ticks(), resumed_at + 20);
    assert!(restored.weights().iter().all(|w| (0.0..=1.0).contains(w)));
}

#[test]
fn path_roundtrip_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("earl-store-test-{}", std::process::id()));
    let path = dir.join("nested").join("agent.json");

    let agent = EarlAgent::seeded(
        (0..2).map(|_| Box::new(|| {}) as Box<dyn Action>).collect(),
        || 0.0,
        AgentConfig::default(),
        42,
    )
    .unwrap();

    save_agent_to_path(&agent, &path).unwrap();

    let restored = load_agent_from_path(
        &path,
        (0..2).map(|_| Box::new(|| {}) as Box<dyn Action>).collect(),
        || 0.0,
    )
    .unwrap();

    assert_eq!(restored.weights(), agent.weights());
    assert_eq!(restored.ticks(), agent.ticks());

    let _ = std::fs::remove_dir_all(&dir);
}
