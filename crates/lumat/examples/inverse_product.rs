//! Sanity check: invert a random matrix and multiply it back.
//!
//! Backs an 8x8 matrix with a 4096-byte bump arena, fills it from a seeded
//! generator, and prints `inverse(x) * x`, which should be the identity up
//! to rounding. Any failure (arena exhaustion, singular matrix) is reported
//! on stderr and ends the process with a failure status.
//!
//! Run with:
//!   cargo run --example inverse_product
//!   RUST_LOG=debug cargo run --example inverse_product

use std::process::ExitCode;

use lumat::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ─── Demo parameters ────────────────────────────────────────────

/// Settings for one demo run.
#[derive(Clone, Debug)]
struct DemoConfig {
    /// Rows and columns of the square input.
    dimension: usize,
    /// Arena size in bytes.
    arena_capacity: usize,
    /// Seed for the fill generator.
    seed: u64,
    /// Range fill values are drawn from.
    range: FillRange,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dimension: 8,
            arena_capacity: ArenaConfig::DEFAULT_CAPACITY,
            seed: 0x5eed,
            range: FillRange::default(),
        }
    }
}

// ─── Run ────────────────────────────────────────────────────────

/// Run the demo and return the number of arena bytes it consumed.
fn run(config: &DemoConfig) -> Result<usize, Box<dyn std::error::Error>> {
    let arena = LinearArena::new(ArenaConfig::new(config.arena_capacity))?;

    let mut x = Matrix::new(config.dimension, config.dimension, &arena)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    fill_randomly(&mut x, &mut rng, config.range);
    let det = determinant(&x)?;
    log::debug!("det(x) = {det}");

    let product = multiply(&inverse(&x)?, &x)?;
    println!("{product}");

    log::info!(
        "arena: {} of {} bytes used",
        arena.used(),
        arena.capacity()
    );
    Ok(arena.used())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(&DemoConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}.");
            ExitCode::FAILURE
        }
    }
}
