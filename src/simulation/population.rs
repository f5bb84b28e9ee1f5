//! Ordered collection of elements driven by the tick loop.

use rayon::prelude::*;
use tracing::{info, trace};

use super::element::Element;
use super::random::VectorSource;
use crate::physics::vector::Vector;

/// A population of independent elements advanced together once per tick.
#[derive(Debug, Clone, Default)]
pub struct Population {
    elements: Vec<Element>,
    ticks: u64,
}

impl Population {
    /// Creates `size` elements with positions and velocities drawn from `source`.
    pub fn new(size: usize, source: &mut impl VectorSource) -> Self {
        let elements: Vec<Element> = (0..size)
            .map(|_| Element::new(None, None, &mut *source))
            .collect();
        info!(size, "created population");
        Self::from_elements(elements)
    }

    /// Wraps existing elements without drawing any random vectors.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements, ticks: 0 }
    }

    /// Advances every element by one tick.
    ///
    /// Elements share no state, so they are updated in parallel.
    pub fn update(&mut self) {
        self.elements.par_iter_mut().for_each(Element::update);
        self.ticks += 1;
        trace!(tick = self.ticks, elements = self.elements.len(), "population tick");
    }

    /// Applies the same force to every element for the next tick.
    pub fn apply_force_all(&mut self, force: Vector) {
        for element in &mut self.elements {
            element.apply_force(force);
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the population has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements, in creation order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Mutable access to the elements, e.g. to apply per-element forces.
    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
