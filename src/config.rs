//! Render and color tunables.
//!
//! Defaults reproduce the classic "cursed energy" look: an 800x800 frame,
//! 300 iterations and a deliberately generous escape radius.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
    /// Orbits stay bounded while `|z| < escape_radius`.
    pub escape_radius: f64,
    /// Half-width of the unzoomed view on both axes.
    pub view_extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 800,
            max_iter: 300,
            escape_radius: 1000.0,
            view_extent: 1.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Trig::Sin => x.sin(),
            Trig::Cos => x.cos(),
        }
    }
}

/// Banding wave for one channel: `trig(freq * norm * PI * mult)`, plus the
/// share of the pulse added on top.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelWave {
    pub trig: Trig,
    pub freq: f64,
    pub mult: f64,
    pub weight: f64,
}

/// Sharp glow rings: `sin(freq * norm * PI)^power`. `power` must be even.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub freq: f64,
    pub power: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub red: ChannelWave,
    pub green: ChannelWave,
    pub blue: ChannelWave,
    pub pulse: Pulse,
}

impl ColorScheme {
    pub fn waves(&self) -> [ChannelWave; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            red: ChannelWave { trig: Trig::Sin, freq: 10.0, mult: 5.0, weight: 0.7 },
            green: ChannelWave { trig: Trig::Cos, freq: 15.0, mult: 4.0, weight: 0.4 },
            blue: ChannelWave { trig: Trig::Sin, freq: 20.0, mult: 3.0, weight: 0.15 },
            pulse: Pulse { freq: 50.0, power: 12 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height, config.max_iter), (800, 800, 300));
        assert_eq!(config.escape_radius, 1000.0);
    }

    #[test]
    fn scheme_serializes_trig_names() {
        let json = serde_json::to_string(&ColorScheme::default()).unwrap();
        assert!(json.contains("\"trig\":\"cos\""));
        let back: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorScheme::default());
    }
}
