use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

mod log_capture;
mod recorder;

pub use log_capture::capture_logs;
pub use recorder::Recorder;

pub const DEFAULT_TEST_SEED_ENV: &str = "MEDIATOR_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seed bound to `scope` for the whole test run, read from the env var of the same name
/// when it holds a number.
fn seed_for(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    if let Some(&seed) = seeds().read()?.get(scope) {
        return Ok(seed);
    }
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = env::var(scope)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {scope}");
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(scope)?))
}
