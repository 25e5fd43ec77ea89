use image::Rgb32FImage;
use serde::Serialize;

use crate::colorize::colorize;
use crate::config::{ColorScheme, RenderConfig};
use crate::fractal::{IterationField, julia_field};
use crate::palette::{Palette, PaletteSource, select_palette};
use crate::params::{FractalParams, sample_params};
use crate::rng::Generator;
use crate::seed::{Seed, derive_seed};

/// Everything derived from one input string.
pub struct Generation {
    pub input: String,
    pub seed: Seed,
    pub palette: Palette,
    pub palette_source: PaletteSource,
    pub params: FractalParams,
    pub field: IterationField,
    pub image: Rgb32FImage,
}

#[derive(Serialize)]
struct Summary<'a> {
    seed: String,
    palette_source: &'a PaletteSource,
    palette: &'a Palette,
    params: &'a FractalParams,
}

impl Generation {
    /// One-line JSON description of the derived values, for logs.
    pub fn summary_json(&self) -> String {
        let summary = Summary {
            seed: self.seed.to_string(),
            palette_source: &self.palette_source,
            palette: &self.palette,
            params: &self.params,
        };
        serde_json::to_string(&summary).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

pub fn generate(input: &str, config: &RenderConfig, scheme: &ColorScheme) -> Generation {
    let seed = derive_seed(input);
    let mut rng = Generator::new(seed);
    log::info!("seed for {:?}: {}", input, seed);

    // Palette synthesis and parameter sampling each reseed the shared
    // generator from the same seed.
    let (palette, palette_source) = select_palette(input, &mut rng);
    let params = sample_params(seed, &mut rng);

    log::info!(
        "rendering {}x{} julia set, c = {:.4} {:+.4}i, zoom {:.3}",
        config.width, config.height, params.c.re, params.c.im, params.zoom
    );
    let field = julia_field(config, &params);
    log::debug!("{} of {} points stayed bounded", field.bounded_count(), field.data.len());

    let image = colorize(&field, &palette, scheme);

    let generation = Generation {
        input: input.to_string(),
        seed,
        palette,
        palette_source,
        params,
        field,
        image,
    };
    log::debug!("{}", generation.summary_json());
    generation
}
