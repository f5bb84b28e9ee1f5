//! Point-mass bodies integrated once per tick.

use super::random::VectorSource;
use crate::physics::vector::Vector;

/// A point-mass with position, velocity and accumulated acceleration.
///
/// Forces only last for one tick: [`Element::update`] clears the
/// acceleration, so callers reapply forces before every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Position in 2D space.
    pub position: Vector,
    /// Displacement applied to the position on every tick.
    pub velocity: Vector,
    /// Sum of the forces applied since the last tick.
    pub acceleration: Vector,
}

impl Element {
    /// Creates an element, drawing any omitted position or velocity from `source`.
    ///
    /// `source` is called exactly once per `None` argument, position first.
    /// Acceleration always starts at zero.
    pub fn new(
        position: Option<Vector>,
        velocity: Option<Vector>,
        source: &mut impl VectorSource,
    ) -> Self {
        let position = position.unwrap_or_else(|| source.next_vector());
        let velocity = velocity.unwrap_or_else(|| source.next_vector());
        Self::at(position, velocity)
    }

    /// Creates an element with explicit position and velocity and no acceleration.
    pub fn at(position: Vector, velocity: Vector) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector::zero(),
        }
    }

    /// Accumulates `force` into the acceleration for the next tick.
    pub fn apply_force(&mut self, force: Vector) {
        self.acceleration += force;
    }

    /// Advances the element by one unit timestep.
    ///
    /// Velocity is updated first and the new velocity moves the position,
    /// then the acceleration is reset to zero.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vector::zero();
    }

    /// Direction of travel in radians, as reported by [`Vector::angle`].
    pub fn heading(&self) -> f64 {
        self.velocity.angle()
    }
}
