// crates/medimock-core/src/random.rs
//
// Injectable randomness for the /verify route. The server holds an
// `Arc<dyn RandomSource>`; production uses the thread-local RNG, a seeded
// source makes a whole server run reproducible, and tests pin exact values.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in [0, 1).
///
/// Implementations must be shareable across request tasks.
pub trait RandomSource: Send + Sync {
    /// Return the next uniform value in [0, 1).
    fn next_unit(&self) -> f64;
}

/// Default source backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Every draw takes the lock briefly, so concurrent requests observe a single
/// shared sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source that replays the same sequence for the same seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        // A poisoned lock only means another request panicked mid-draw;
        // the RNG state itself is still usable.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen::<f64>()
    }
}

/// Replays a fixed cycle of values. Intended for tests.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl FixedRandom {
    /// Create a source cycling through `values`. An empty list always yields 0.0.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}

/// Clamp a draw from an arbitrary source into [0, 1).
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else if value >= 1.0 {
        // Largest f64 strictly below 1.0.
        1.0 - f64::EPSILON / 2.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..1_000 {
            let v = source.next_unit();
            assert!((0.0..1.0).contains(&v), "draw {} out of range", v);
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let seq_a: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let seq_b: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(seq_a, seq_b);

        let c = SeededRandom::new(43);
        let seq_c: Vec<f64> = (0..16).map(|_| c.next_unit()).collect();
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn test_fixed_random_cycles() {
        let source = FixedRandom::new(vec![0.1, 0.2, 0.3]);
        let drawn: Vec<f64> = (0..7).map(|_| source.next_unit()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1]);
    }

    #[test]
    fn test_fixed_random_empty_yields_zero() {
        let source = FixedRandom::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert!(clamp_unit(1.0) < 1.0);
        assert!(clamp_unit(7.0) < 1.0);
    }
}
