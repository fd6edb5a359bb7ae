use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Mutex;

/// Static helpers for random selection (uses the thread-local RNG).
pub struct Random;

impl Random {
    /// Generate a random integer in the range `[min, max)` (max exclusive).
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn rand_int(min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..max)
    }

    /// Pick a random element from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty.
    pub fn rand_item<T>(list: &[T]) -> &T {
        let idx = rand::thread_rng().gen_range(0..list.len());
        &list[idx]
    }
}

/// A seedable random source for reproducible sequences.
///
/// Uses the xoshiro256** PRNG; two instances built from the same seed
/// produce identical sequences.
///
/// # Examples
///
/// ```
/// use dom_kit_util::random::SeededRandom;
///
/// let rng = SeededRandom::new(Some([7u8; 32]));
/// let n = rng.rand_int(1, 10);
/// assert!((1..10).contains(&n));
/// ```
pub struct SeededRandom {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Mutex<Xoshiro256StarStar>,
}

impl SeededRandom {
    /// Create a source with an optional seed. Without a seed, one is drawn
    /// from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Mutex::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Random integer in `[min, max)` (max exclusive).
    pub fn rand_int(&self, min: i64, max: i64) -> i64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..max)
    }

    /// Pick a random element from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty.
    pub fn rand_item<'a, T>(&self, list: &'a [T]) -> &'a T {
        let mut rng = self.rng.lock().unwrap();
        let idx = rng.gen_range(0..list.len());
        &list[idx]
    }

    /// Random f64 in `[0, 1)`.
    pub fn random(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen::<f64>()
    }
}
