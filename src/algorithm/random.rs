//! Injectable randomness for reproducible packing runs

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the uniform draws consumed by packing and colouring
///
/// Object safe, so runs can also be driven through `&mut dyn RandomSource`.
/// Only `uniform` is required. Implementors backed by a real generator
/// should override `index` to avoid floating point bias.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Uniform index in `0..len`, or zero when `len` is zero
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.uniform() * len as f64) as usize).min(len - 1)
    }
}

/// Uniformly choose one element of a slice
///
/// Works for trait objects as well as concrete sources.
pub fn choose<'a, T, R>(random: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(random.index(items.len()))
}

/// Seeded random source for deterministic runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this source was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }
}
