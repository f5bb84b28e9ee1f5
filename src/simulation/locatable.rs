//! Trait for entities that have a position and can be advanced by a tick.
//!
//! Renderers only need this read interface, so they stay independent of the
//! concrete body type.

use super::element::Element;
use crate::physics::vector::Vector;

/// Trait for entities with a position that are updated once per tick.
///
/// Any type that implements this trait:
/// - Has a position and a velocity in 2D space
/// - Faces a direction that renderers can draw
/// - Can be advanced by one fixed tick
pub trait Locatable {
    /// Returns the entity's position.
    ///
    /// # Returns
    ///
    /// A copy of the 2D position vector.
    fn position(&self) -> Vector;

    /// Returns the entity's velocity.
    ///
    /// # Returns
    ///
    /// A copy of the displacement applied on every tick.
    fn velocity(&self) -> Vector;

    /// Returns the direction the entity is facing.
    ///
    /// # Returns
    ///
    /// The angle of [`Locatable::velocity`] from the positive x-axis in
    /// radians, in `(-π, π]`. A resting entity faces along the x-axis.
    fn heading(&self) -> f64 {
        self.velocity().angle()
    }

    /// Advances the entity by one tick.
    ///
    /// There is no time delta: every tick is one unit of simulation time.
    fn update(&mut self);
}

impl Locatable for Element {
    fn position(&self) -> Vector {
        self.position
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn update(&mut self) {
        Element::update(self);
    }
}
