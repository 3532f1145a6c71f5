//! Glider quickstart: a complete, minimal Life simulation from scratch.
//!
//! Demonstrates:
//!   1. Building a `WorldConfig` and `World`
//!   2. Seeding a pattern and ticking by hand
//!   3. Reading frames, metrics, and the generation counter
//!   4. Spawning a `Runner` and streaming frames to a sink
//!   5. Play / pause / step run control and graceful shutdown
//!
//! Run with:
//!   cargo run -p glider-engine --example quickstart

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use glider_core::{Command, Density, EdgePolicy};
use glider_engine::{Runner, World, WorldConfig};
use glider_grid::Frame;

// ─── Grid parameters ────────────────────────────────────────────

const COLS: u32 = 12;
const ROWS: u32 = 10;

/// Southeast-bound glider, as (col, row) offsets from its origin.
const GLIDER: [(u32, u32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

// ─── Rendering ──────────────────────────────────────────────────

fn render(frame: &Frame) {
    for row in 0..frame.dims().rows() as i32 {
        let line: String = (0..frame.dims().cols() as i32)
            .map(|col| if frame.alive(col, row) { '#' } else { '.' })
            .collect();
        println!("  {line}");
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Glider Quickstart ===\n");

    // 1. Configure a 12x10 torus that ticks every 50ms while playing.
    let config = WorldConfig {
        edge: EdgePolicy::Wrap,
        interval: Duration::from_millis(50),
        seed: 42,
        ..WorldConfig::new(COLS, ROWS)
    };

    // 2. Create a world and seed a glider by hand.
    let mut world = World::new(&config)?;
    for (col, row) in GLIDER {
        world.set(col + 1, row + 1, true)?;
    }
    println!("Initial board ({COLS}x{ROWS}, wrap):");
    render(&world.frame());

    // 3. Tick by hand. A glider translates one cell diagonally every
    //    four generations.
    for _ in 0..8 {
        let m = world.tick();
        if m.generation.0 % 4 == 0 {
            println!(
                "  gen {:>2}: {:>3} alive, {} births, {} deaths, {}us",
                m.generation, m.live_cells, m.births, m.deaths, m.total_us
            );
        }
    }
    println!("\nAfter 8 generations:");
    render(&world.frame());

    // 4. Spawn a runner: a fresh world moves onto a dedicated tick
    //    thread, and the sink sees a frame after every change.
    let published = Arc::new(AtomicUsize::new(0));
    let sink_count = Arc::clone(&published);
    let mut runner = Runner::spawn(&config, move |frame: &Frame| {
        sink_count.fetch_add(1, Ordering::Relaxed);
        if frame.generation().0 % 5 == 0 {
            println!(
                "  frame: gen {:>2}, {:>3} alive",
                frame.generation(),
                frame.live_cells()
            );
        }
    })?;

    // 5. Reseed at 30% density, then play. The first tick fires
    //    immediately; the rest follow on the interval.
    let receipt = runner.submit(Command::Populate(Density::new(0.3)?))?;
    println!("\nPopulated at density 0.30 (accepted: {})", receipt.accepted);

    runner.play(Duration::from_millis(50))?;
    thread::sleep(Duration::from_millis(300));
    runner.pause()?;
    println!(
        "Frames published while playing: {}",
        published.load(Ordering::Relaxed)
    );

    // 6. Single-step while stopped: exactly one generation per call.
    let receipt = runner.step()?;
    if let Some(generation) = receipt.generation {
        println!("Stepped to gen {generation}");
    }

    // 7. Shut down and take the final world back.
    let world = runner.shutdown().expect("tick thread hands the world back");
    println!("\nFinal board (gen {}):", world.generation());
    render(&world.frame());

    println!("\nDone.");
    Ok(())
}
