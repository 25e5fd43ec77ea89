//! Character palettes.
//!
//! A palette holds a `(mean, variance)` pair per RGB channel. Inputs naming a
//! known character get that character's fixed palette; anything else gets one
//! synthesized from the input's seed.

use serde::{Deserialize, Serialize};

use crate::rng::Generator;
use crate::seed::derive_seed;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelParams {
    pub mean: f64,
    pub variance: f64,
}

impl ChannelParams {
    pub const fn new(mean: f64, variance: f64) -> Self {
        ChannelParams { mean, variance }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub red: ChannelParams,
    pub green: ChannelParams,
    pub blue: ChannelParams,
}

impl Palette {
    pub const fn new(red: (f64, f64), green: (f64, f64), blue: (f64, f64)) -> Self {
        Palette {
            red: ChannelParams::new(red.0, red.1),
            green: ChannelParams::new(green.0, green.1),
            blue: ChannelParams::new(blue.0, blue.1),
        }
    }

    pub fn channels(&self) -> [ChannelParams; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Where the palette for an input came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum PaletteSource {
    Fixed(&'static str),
    Synthesized,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPalette {
    pub key: &'static str,
    pub description: &'static str,
    pub palette: Palette,
}

/// Tested in order against the lowercased input; the first key found as a
/// substring wins.
pub const FIXED_PALETTES: [FixedPalette; 6] = [
    FixedPalette {
        key: "sukuna",
        description: "red",
        palette: Palette::new((0.9, 0.1), (0.1, 0.05), (0.1, 0.05)),
    },
    FixedPalette {
        key: "gojo",
        description: "blue/purple",
        palette: Palette::new((0.4, 0.1), (0.2, 0.1), (0.8, 0.1)),
    },
    FixedPalette {
        key: "mahoraga",
        description: "white glow",
        palette: Palette::new((0.9, 0.05), (0.9, 0.05), (0.9, 0.05)),
    },
    FixedPalette {
        key: "megumi",
        description: "shadowy blue",
        palette: Palette::new((0.1, 0.05), (0.3, 0.05), (0.4, 0.1)),
    },
    FixedPalette {
        key: "yuta",
        description: "calm blue glow",
        palette: Palette::new((0.5, 0.05), (0.5, 0.05), (0.9, 0.05)),
    },
    FixedPalette {
        key: "toji",
        description: "cursed green",
        palette: Palette::new((0.1, 0.1), (0.9, 0.1), (0.1, 0.1)),
    },
];

pub fn find_fixed_palette(input: &str) -> Option<&'static FixedPalette> {
    let lowered = input.to_lowercase();
    FIXED_PALETTES.iter().find(|fixed| lowered.contains(fixed.key))
}

/// Reseeds `rng` from the input's own seed and draws mean ~ U[0,1),
/// variance ~ U[0,1) * 0.2 for red, green, then blue.
pub fn synthesize_palette(input: &str, rng: &mut Generator) -> Palette {
    rng.reseed(derive_seed(input));
    let mut draw = || {
        let mean = rng.next_double();
        let variance = rng.next_double() * 0.2;
        ChannelParams::new(mean, variance)
    };
    let red = draw();
    let green = draw();
    let blue = draw();
    Palette { red, green, blue }
}

pub fn select_palette(input: &str, rng: &mut Generator) -> (Palette, PaletteSource) {
    match find_fixed_palette(input) {
        Some(fixed) => {
            log::debug!("palette '{}' ({}) selected", fixed.key, fixed.description);
            (fixed.palette, PaletteSource::Fixed(fixed.key))
        }
        None => {
            log::debug!("no character key in input, synthesizing palette");
            (synthesize_palette(input, rng), PaletteSource::Synthesized)
        }
    }
}
