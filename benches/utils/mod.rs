use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use heap_pq::Priority;

//// Utility functions

pub(crate) fn get_random_priorities(n: usize, seed: u64) -> Vec<Priority> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(rng.gen_range(-1_000_000, 1_000_000));
    }

    results
}

/// Some(p) inserts p, None dequeues; roughly two inserts per dequeue.
pub(crate) fn get_random_ops(n: usize, seed: u64) -> Vec<Option<Priority>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        if rng.gen_range(0, 3) == 0 {
            results.push(None);
        } else {
            results.push(Some(rng.gen_range(-1_000_000, 1_000_000)));
        }
    }

    results
}
