//! Iteration counts to RGB.
//!
//! Each channel oscillates around its palette mean by its palette variance,
//! then a sharp periodic pulse brightens the rings, mostly in red.

use std::f64::consts::PI;

use image::{Rgb, Rgb32FImage};

use crate::config::{ChannelWave, ColorScheme, Pulse};
use crate::fractal::IterationField;
use crate::palette::{ChannelParams, Palette};

pub fn pulse(norm: f64, pulse: &Pulse) -> f64 {
    (pulse.freq * norm * PI).sin().powi(pulse.power)
}

pub fn base_value(norm: f64, params: &ChannelParams, wave: &ChannelWave) -> f64 {
    let phase = wave.freq * norm * PI * wave.mult;
    (params.mean + params.variance * wave.trig.apply(phase)).clamp(0.0, 1.0)
}

pub fn channel_value(norm: f64, params: &ChannelParams, wave: &ChannelWave, glow: f64) -> f64 {
    (base_value(norm, params, wave) + glow * wave.weight).clamp(0.0, 1.0)
}

/// Color for a single normalized escape time.
pub fn shade(norm: f64, palette: &Palette, scheme: &ColorScheme) -> [f64; 3] {
    let glow = pulse(norm, &scheme.pulse);
    let mut rgb = [0.0; 3];
    for ((out, params), wave) in rgb.iter_mut().zip(palette.channels()).zip(scheme.waves()) {
        *out = channel_value(norm, &params, &wave, glow);
    }
    rgb
}

pub fn colorize(field: &IterationField, palette: &Palette, scheme: &ColorScheme) -> Rgb32FImage {
    let max_iter = field.max_iter as f64;
    Rgb32FImage::from_fn(field.width as u32, field.height as u32, |x, y| {
        let norm = field.get(x as usize, y as usize) as f64 / max_iter;
        let [r, g, b] = shade(norm, palette, scheme);
        Rgb([r as f32, g as f32, b as f32])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gojo() -> Palette {
        Palette::new((0.4, 0.1), (0.2, 0.1), (0.8, 0.1))
    }

    #[test]
    fn pulse_is_even_and_bounded() {
        let scheme = ColorScheme::default();
        for i in 0..=300 {
            let p = pulse(i as f64 / 300.0, &scheme.pulse);
            assert!((0.0..=1.0).contains(&p));
        }
        // sin(50 * 0.01 * PI) = sin(PI / 2) = 1.
        assert!((pulse(0.01, &scheme.pulse) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_norm_is_palette_mean_plus_cosine_offset() {
        let [r, g, b] = shade(0.0, &gojo(), &ColorScheme::default());
        // sin(0) = 0, cos(0) = 1, pulse(0) = 0.
        assert!((r - 0.4).abs() < 1e-12);
        assert!((g - 0.3).abs() < 1e-12);
        assert!((b - 0.8).abs() < 1e-12);
    }

    #[test]
    fn pulse_peak_adds_channel_weights() {
        let scheme = ColorScheme::default();
        let palette = Palette::new((0.0, 0.0), (0.0, 0.0), (0.0, 0.0));
        let [r, g, b] = shade(0.01, &palette, &scheme);
        assert!((r - 0.7).abs() < 1e-9);
        assert!((g - 0.4).abs() < 1e-9);
        assert!((b - 0.15).abs() < 1e-9);
    }

    #[test]
    fn channels_are_clipped() {
        let scheme = ColorScheme::default();
        let hot = Palette::new((0.95, 0.5), (0.95, 0.5), (0.95, 0.5));
        for i in 0..=300 {
            for v in shade(i as f64 / 300.0, &hot, &scheme) {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn image_is_channel_last_and_sized_like_field() {
        let field = IterationField { width: 3, height: 2, max_iter: 300, data: vec![0, 3, 300, 150, 75, 1] };
        let img = colorize(&field, &gojo(), &ColorScheme::default());
        assert_eq!(img.dimensions(), (3, 2));
        let expected = shade(0.0, &gojo(), &ColorScheme::default());
        let px = img.get_pixel(0, 0);
        assert_eq!(px.0, [expected[0] as f32, expected[1] as f32, expected[2] as f32]);
        let expected = shade(150.0 / 300.0, &gojo(), &ColorScheme::default());
        assert_eq!(img.get_pixel(0, 1).0[0], expected[0] as f32);
    }
}
