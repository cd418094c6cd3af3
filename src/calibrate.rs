use std::time::{Duration, Instant};

use crate::error::Argon2KitError;
use crate::hasher::Argon2Hasher;
use crate::params::HashParams;

const WARMUP_RUNS: u32 = 10;
const WARMUP_PARAMS: HashParams = HashParams::new(1, 8, 1);

/// Find the highest iteration count whose hash stays within `max_duration`.
///
/// Advisory tuning only - wall-clock measurement on the calling machine, run
/// offline to size parameters, never on the hot path and with no correctness
/// guarantee. Returns 0 when even a single iteration exceeds the ceiling.
pub fn find_iterations(
    hasher: &Argon2Hasher,
    max_duration: Duration,
    memory_kib: u32,
    parallelism: u32,
) -> Result<u32, Argon2KitError> {
    find_iterations_with_observer(hasher, max_duration, memory_kib, parallelism, |_, _| {})
}

/// [`find_iterations`] with an observer receiving each probe's iteration
/// count and how long its hash took.
pub fn find_iterations_with_observer(
    hasher: &Argon2Hasher,
    max_duration: Duration,
    memory_kib: u32,
    parallelism: u32,
    mut observer: impl FnMut(u32, Duration),
) -> Result<u32, Argon2KitError> {
    let password = "password";

    for _ in 0..WARMUP_RUNS {
        hasher.hash(WARMUP_PARAMS, password)?;
    }

    let mut iterations = 0;
    loop {
        iterations += 1;
        let params = HashParams::new(iterations, memory_kib, parallelism);

        let start = Instant::now();
        hasher.hash(params, password)?;
        let took = start.elapsed();

        observer(iterations, took);
        if took > max_duration {
            return Ok(iterations - 1);
        }
    }
}
