//! Injected randomness for weighted draws.
//!
//! Any [`rand::Rng`] is a [`UniformSource`]; [`FnSource`] adapts a closure so callers
//! can script rolls or route draws through a host engine's generator.
use rand::{Rng, RngExt};

/// Produces uniformly distributed integers below an exclusive bound.
pub trait UniformSource {
    /// Returns a value in `[0, upper)`. Callers never pass `upper == 0`.
    fn below(&mut self, upper: u64) -> u64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn below(&mut self, upper: u64) -> u64 {
        debug_assert!(upper > 0, "upper must be > 0");
        self.random_range(0..upper)
    }
}

/// A uniform source that forwards to a user-provided closure.
pub struct FnSource<F>
where
    F: FnMut(u64) -> u64,
{
    f: F,
}

impl<F> FnSource<F>
where
    F: FnMut(u64) -> u64,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> UniformSource for FnSource<F>
where
    F: FnMut(u64) -> u64,
{
    #[inline]
    fn below(&mut self, upper: u64) -> u64 {
        (self.f)(upper)
    }
}
