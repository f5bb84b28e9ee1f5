use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read.
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A parameter is outside its allowed range.
    #[error("invalid parameter: {0}")]
    Invalid(&'static str),
}

/// Simulation parameters for the population and its visualization.
///
/// Missing fields in a parameter file take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of elements in the population.
    pub population_size: usize,
    /// Half-width of the range random positions and velocities are drawn from.
    pub spawn_range: f64,
    /// Velocity magnitude bound applied after each tick.
    pub max_speed: f64,
    /// Half-width of the range of the random steering force applied each tick.
    pub steering_strength: f64,
    /// Width of the visible area in simulation units, centered on the origin.
    pub box_width: f64,
    /// Height of the visible area in simulation units.
    pub box_height: f64,
    /// Base of the triangle drawn for each element, in pixels.
    pub triangle_base: f32,
    /// Height of the triangle drawn for each element, in pixels.
    pub triangle_height: f32,
    /// Seed for the random vector provider; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            population_size: 25,
            spawn_range: 5.0,
            max_speed: 0.08,
            steering_strength: 0.01,
            box_width: 20.0,
            box_height: 15.0,
            triangle_base: 8.0,
            triangle_height: 20.0,
            seed: None,
        }
    }
}

impl Params {
    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        debug!(path = %path.display(), ?params, "loaded parameters");
        Ok(params)
    }

    /// Checks that every parameter is within its allowed range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.box_width <= 0.0 || self.box_height <= 0.0 {
            return Err(ParamsError::Invalid("box dimensions must be positive"));
        }
        if !(self.spawn_range.is_finite() && self.spawn_range >= 0.0) {
            return Err(ParamsError::Invalid(
                "spawn_range must be finite and not negative",
            ));
        }
        if self.max_speed < 0.0 {
            return Err(ParamsError::Invalid("max_speed must not be negative"));
        }
        if !(self.steering_strength.is_finite() && self.steering_strength >= 0.0) {
            return Err(ParamsError::Invalid(
                "steering_strength must be finite and not negative",
            ));
        }
        if self.triangle_base <= 0.0 || self.triangle_height <= 0.0 {
            return Err(ParamsError::Invalid("triangle dimensions must be positive"));
        }
        Ok(())
    }
}
