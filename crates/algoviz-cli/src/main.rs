//! AlgoViz terminal demo
//!
//! Select an algorithm from the standard catalog, generate an input, and
//! replay the recorded trace step by step at the requested speed. This is
//! a thin consumer of the trace model; it reads the step under the cursor
//! and never mutates it.

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;

use algoviz_catalog::Registry;
use algoviz_input::ArrayShape;
use algoviz_playback::{Playback, SpeedLevel, Tick};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let registry = Registry::standard();
    let args: Vec<String> = env::args().collect();

    let Some(id) = args.get(1).and_then(|s| s.parse::<u32>().ok()) else {
        print_catalog(&registry);
        return Ok(());
    };

    let size: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
    let shape: ArrayShape = match args.get(3) {
        Some(raw) => raw.parse()?,
        None => ArrayShape::Random,
    };
    let speed = SpeedLevel::new(args.get(4).and_then(|s| s.parse().ok()).unwrap_or(3));
    let mut rng = match args.get(5).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let algorithm = registry.get(id)?;

    println!("AlgoViz");
    println!("=======");
    println!();
    println!("{} ({})", algorithm.name, algorithm.category);
    println!(
        "  time {}  space {}",
        algorithm.time_complexity, algorithm.space_complexity
    );
    println!();

    tracing::info!(algorithm = algorithm.name, size, shape = %shape, "generating input");
    let input = algorithm.generate_input(&mut rng, size, shape)?;
    let trace = algorithm.execute(&input)?;
    println!(
        "Recorded {} steps for {} of size {}.",
        trace.len(),
        algorithm.name,
        size
    );
    println!();

    let mut playback = Playback::with_trace(trace);
    playback.set_speed(speed);

    print_current(&playback);
    if let Some(notice) = playback.play() {
        println!("Cannot play: {:?}", notice);
        return Ok(());
    }

    // The single-timer scheduling loop: one sleep, one tick, repeat.
    loop {
        tokio::time::sleep(playback.speed().delay()).await;
        match playback.tick() {
            Tick::Advanced(_) => print_current(&playback),
            Tick::Completed => {
                println!();
                println!("Playback complete.");
                break;
            }
            Tick::Idle => break,
        }
    }

    Ok(())
}

fn print_catalog(registry: &Registry) {
    println!("AlgoViz");
    println!("=======");
    println!();
    println!("Usage: algoviz <algorithm-id> [size] [shape] [speed 1-5] [seed]");
    println!("Shapes: random, nearly-sorted, reversed, few-unique");
    println!();
    for algorithm in registry.all() {
        println!(
            "  {:>2}  {:<22} {:<12} {}",
            algorithm.id,
            algorithm.name,
            algorithm.category.name(),
            algorithm.time_complexity
        );
    }
}

fn print_current(playback: &Playback) {
    if let Some(step) = playback.current_step() {
        println!(
            "[{:>4}] {} (comparisons {}, swaps {}, accesses {})",
            playback.current_index(),
            step.description,
            step.stats.comparisons,
            step.stats.swaps,
            step.stats.array_accesses,
        );
    }
}
