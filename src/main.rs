//! Drift demo: a population of elements drawn as heading triangles.

use drift::simulation::params::Params;
use drift::simulation::population::Population;
use drift::simulation::random::{SourceError, UniformVectors, VectorSource};
use drift::Vector;
use macroquad::prelude::*;
use tracing::{error, info, warn};

mod graphics;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };
    match Params::load_from_file(&path) {
        Ok(params) => params,
        Err(error) => {
            warn!(%path, %error, "falling back to default parameters");
            Params::default()
        }
    }
}

fn source(range: f64, seed: Option<u64>) -> Result<UniformVectors, SourceError> {
    match seed {
        Some(seed) => UniformVectors::seeded(-range, range, seed),
        None => UniformVectors::new(-range, range),
    }
}

#[macroquad::main("Drift")]
async fn main() {
    init_tracing();

    let params = load_params();
    let sources = source(params.spawn_range, params.seed).and_then(|spawn| {
        let steering = source(
            params.steering_strength,
            params.seed.map(|seed| seed.wrapping_add(1)),
        )?;
        Ok((spawn, steering))
    });
    let (mut spawn, mut steering) = match sources {
        Ok(sources) => sources,
        Err(error) => {
            error!(%error, "cannot create random vector sources");
            return;
        }
    };
    let mut population = Population::new(params.population_size, &mut spawn);

    info!(
        elements = population.len(),
        "starting drift simulation"
    );

    loop {
        clear_background(WHITE);

        for element in population.elements_mut() {
            element.apply_force(steering.next_vector());
        }
        population.update();
        for element in population.elements_mut() {
            element.velocity = Vector::clamp_magnitude(element.velocity, params.max_speed);
        }

        graphics::draw_entities(population.elements(), &params);

        next_frame().await
    }
}
