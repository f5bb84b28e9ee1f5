//! Random vector providers used when an element is created without an
//! explicit position or velocity.

use rand::distr::Uniform;
use rand::distr::uniform::Error as UniformError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::physics::vector::Vector;

/// Errors raised when building a random vector provider.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The component range cannot be sampled (NaN bound or non-finite width).
    #[error("cannot sample vector components from [{min}, {max}]: {source}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
        /// Reason reported by the distribution.
        #[source]
        source: UniformError,
    },
}

/// A supplier of vectors, consumed once per omitted constructor argument.
///
/// Each call should yield a vector independent of the previous ones; how
/// independent is up to the implementation.
pub trait VectorSource {
    /// Produces the next vector.
    fn next_vector(&mut self) -> Vector;
}

impl<F> VectorSource for F
where
    F: FnMut() -> Vector,
{
    fn next_vector(&mut self) -> Vector {
        self()
    }
}

/// Draws both components uniformly from `[min, max]`.
#[derive(Debug, Clone)]
pub struct UniformVectors {
    min: f64,
    max: f64,
    distribution: Uniform<f64>,
    rng: StdRng,
}

impl UniformVectors {
    /// Creates a provider seeded from the operating system.
    ///
    /// The bounds may be given in either order.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidRange`] if a bound is NaN or infinite, or if
    /// `max - min` overflows.
    pub fn new(min: f64, max: f64) -> Result<Self, SourceError> {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    /// Creates a reproducible provider from a fixed seed.
    ///
    /// # Errors
    ///
    /// Same as [`UniformVectors::new`].
    pub fn seeded(min: f64, max: f64, seed: u64) -> Result<Self, SourceError> {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: f64, max: f64, rng: StdRng) -> Result<Self, SourceError> {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let distribution = Uniform::new_inclusive(min, max)
            .map_err(|source| SourceError::InvalidRange { min, max, source })?;
        Ok(Self {
            min,
            max,
            distribution,
            rng,
        })
    }

    /// Lower bound of each component.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of each component.
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl VectorSource for UniformVectors {
    fn next_vector(&mut self) -> Vector {
        Vector::new(
            self.rng.sample(&self.distribution),
            self.rng.sample(&self.distribution),
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_swapped_when_reversed() {
        let source = UniformVectors::seeded(3.0, -3.0, 1).expect("finite range");
        assert_eq!(source.min(), -3.0);
        assert_eq!(source.max(), 3.0);
    }

    #[test]
    fn degenerate_range_yields_constant_vector() {
        let mut source = UniformVectors::seeded(2.5, 2.5, 7).expect("finite range");
        for _ in 0..10 {
            assert_eq!(source.next_vector(), Vector::new(2.5, 2.5));
        }
    }

    #[test]
    fn unsampleable_ranges_are_rejected_at_construction() {
        for (min, max) in [
            (f64::NAN, 1.0),
            (0.0, f64::NAN),
            (f64::NEG_INFINITY, 0.0),
            (0.0, f64::INFINITY),
            (-f64::MAX, f64::MAX),
        ] {
            let result = UniformVectors::seeded(min, max, 1);
            assert!(
                matches!(result, Err(SourceError::InvalidRange { .. })),
                "[{min}, {max}] should be rejected"
            );
        }
        assert!(UniformVectors::new(f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn closures_act_as_sources() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Vector::new(f64::from(calls), 0.0)
        };
        assert_eq!(source.next_vector(), Vector::new(1.0, 0.0));
        assert_eq!(source.next_vector(), Vector::new(2.0, 0.0));
    }
}
