//! # Drift - 2D Vector Algebra and Point-Mass Simulation
//!
//! A small 2D vector library and a population of point-masses ("elements")
//! that integrate their position from velocity and acceleration every tick.
//!
//! ## Features
//!
//! - `Vector` value type with operator overloads, normalization, angles,
//!   distance, dot product, lerp and magnitude clamping
//! - Semi-implicit Euler integration with a fixed unit timestep
//! - Injectable random vector providers
//! - Parallel population updates with rayon
//! - JSON parameter files
//!
//! ## Core Modules
//!
//! - [`physics::vector`] - Vector math
//! - [`simulation::element`] - Point-mass integration
//! - [`simulation::population`] - Tick loop over all elements

/// Vector math.
pub mod physics {
    /// 2D vector value type and its errors.
    pub mod vector;
}

/// Elements, their population and the collaborators they need.
pub mod simulation {
    /// Point-mass bodies with force accumulation and per-tick integration.
    pub mod element;
    /// Trait for locatable entities that can be updated.
    ///
    /// The [`locatable::Locatable`] trait is what renderers read: position,
    /// velocity and heading.
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Ordered collection of elements updated once per tick.
    pub mod population;
    /// Random vector providers used at element construction.
    pub mod random;
}

pub use physics::vector::{Vector, VectorError};
