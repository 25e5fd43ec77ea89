use serde::{Deserialize, Serialize};

use crate::math::C;
use crate::rng::Generator;
use crate::seed::Seed;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub c: C,
}

/// Reseeds `rng` and draws zoom, pan_x, pan_y, c.re, c.im in that order.
pub fn sample_params(seed: Seed, rng: &mut Generator) -> FractalParams {
    rng.reseed(seed);
    let zoom = 1.2 + rng.next_double() * 0.5;
    let pan_x = rng.uniform(-0.5, 0.5);
    let pan_y = rng.uniform(-0.5, 0.5);
    let re = rng.uniform(-0.8, 0.8);
    let im = rng.uniform(-0.8, 0.8);
    FractalParams { zoom, pan_x, pan_y, c: C::new(re, im) }
}
