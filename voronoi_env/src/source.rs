//! Core randomness trait consumed by the elimination engine.

/// The central interface for randomness.
///
/// This trait abstracts the random-number generator so that the engine can
/// run both against OS entropy and against a seeded stream.
///
/// # Implementations
///
/// - **Production**: `EntropySource` - `StdRng` seeded from the OS
/// - **Seeded**: `SeededSource` - `ChaCha8Rng` seeded from a `u64`
///
/// # Determinism
///
/// For a seeded implementation, the same seed and the same sequence of calls
/// must yield the same values on every platform.
pub trait RandomSource {
    /// Draws a value uniformly from `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Draws a value from the standard normal distribution N(0, 1).
    fn standard_normal(&mut self) -> f64;

    /// Draws `amount` distinct indices uniformly from `0..length`.
    ///
    /// `amount` is clamped to `length`. The order of the returned indices is
    /// unspecified.
    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;

    /// Returns the source's seed (for logging/debugging).
    ///
    /// Unseeded sources return 0.
    fn seed(&self) -> u64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        (**self).sample_indices(length, amount)
    }

    fn seed(&self) -> u64 {
        (**self).seed()
    }
}
