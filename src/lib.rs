pub mod math;
pub mod seed;
pub mod rng;
pub mod palette;
pub mod params;
pub mod config;
pub mod fractal;
pub mod colorize;
pub mod generator;
pub mod visualizer;

pub use math::C;
pub use seed::{Seed, derive_seed};
pub use rng::Generator;
pub use palette::{
    ChannelParams, FixedPalette, Palette, PaletteSource, FIXED_PALETTES,
    find_fixed_palette, select_palette, synthesize_palette
};
pub use params::{FractalParams, sample_params};
pub use config::{ChannelWave, ColorScheme, Pulse, RenderConfig, Trig};
pub use fractal::{IterationField, PointState, julia_escapes, julia_field, linspace};
pub use colorize::{colorize, shade};
pub use generator::{Generation, generate};
pub use visualizer::{compose_frame, show, to_argb_buffer, window_title};
