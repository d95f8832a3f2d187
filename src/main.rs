//! Stack Tower headless host
//!
//! Runs the engine at a fixed timestep with the reference mover and an
//! autoplayer that taps at seeded random moments until the tower falls.
//!
//! Settings come from the first argument or `STACK_TOWER_SETTINGS`;
//! `STACK_TOWER_SEED` picks the autoplayer seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use stack_tower::Settings;
use stack_tower::consts::*;
use stack_tower::sim::{
    CommitOutcome, LogTermination, LogViewpoint, PingPongMovers, StackEngine,
};

/// Stop the demo after this many platforms even if it never misses
const MAX_LEVELS: usize = 200;

/// Autoplayer reaction window (seconds after a spawn)
const MIN_WAIT: f32 = 0.3;
const MAX_WAIT: f32 = 2.8;

fn main() {
    env_logger::init();
    log::info!("Stack Tower (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("STACK_TOWER_SETTINGS").ok())
        .map(|path| Settings::load(path))
        .unwrap_or_default();

    let seed = std::env::var("STACK_TOWER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed_u64);
    let mut rng = Pcg32::seed_from_u64(seed);

    let movers = PingPongMovers::from_settings(&settings);
    let mut engine = StackEngine::new(settings, movers, LogViewpoint, LogTermination::default());
    engine.initialize();

    let mut wait = rng.random_range(MIN_WAIT..MAX_WAIT);
    let mut elapsed = 0.0_f32;

    while !engine.is_terminated() && engine.count() < MAX_LEVELS {
        engine.tick(SIM_DT);

        if engine.active_transform().is_none() {
            continue;
        }
        elapsed += SIM_DT;
        if elapsed < wait {
            continue;
        }

        match engine.commit() {
            Ok(CommitOutcome::Placed { placed, discarded }) => {
                log::info!(
                    "Level {}: {:.3} x {:.3} (dropped {:.3} x {:.3})",
                    engine.stack().resting_count() - 1,
                    placed.size.width,
                    placed.size.depth,
                    discarded.size.width,
                    discarded.size.depth
                );
            }
            Ok(CommitOutcome::GameOver { .. }) | Ok(CommitOutcome::Ignored) => {}
            Err(err) => {
                log::error!("Engine error: {}", err);
                break;
            }
        }
        engine.take_discarded();

        elapsed = 0.0;
        wait = rng.random_range(MIN_WAIT..MAX_WAIT);
    }

    let height = engine.stack().resting_count();
    if engine.host().game_over {
        println!("Game over with {} platforms stacked (seed {:#x})", height, seed);
    } else {
        println!("Stopped at {} platforms (seed {:#x})", height, seed);
    }
}
