use crate::config::RenderConfig;
use crate::math::C;
use crate::params::FractalParams;

/// Per-point orbit state. Once diverged a point is frozen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointState {
    Active(C),
    Diverged(u32),
}

impl PointState {
    /// Advances one iteration: `z = z^2 + c`, then marks the point diverged at
    /// `iteration` if `|z|` is no longer below `escape_radius`.
    pub fn step(self, iteration: u32, c: C, escape_radius: f64) -> PointState {
        match self {
            PointState::Active(z) => {
                let z = z.square().add(c);
                if z.norm() < escape_radius {
                    PointState::Active(z)
                } else {
                    PointState::Diverged(iteration)
                }
            }
            diverged => diverged,
        }
    }
}

/// Escape time of `z0` under `z -> z^2 + c`: the 0-based iteration at which
/// divergence was seen, or `max_iter` if the orbit stayed bounded throughout.
pub fn julia_escapes(z0: C, c: C, max_iter: u32, escape_radius: f64) -> u32 {
    let mut state = PointState::Active(z0);
    for i in 0..max_iter {
        state = state.step(i, c, escape_radius);
        if let PointState::Diverged(at) = state {
            return at;
        }
    }
    max_iter
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// Escape times for a `height x width` grid, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationField {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
    pub data: Vec<u32>,
}

impl IterationField {
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x]
    }

    /// Escape times normalized to [0, 1].
    pub fn normalized(&self) -> impl Iterator<Item = f64> + '_ {
        let max_iter = self.max_iter as f64;
        self.data.iter().map(move |&v| v as f64 / max_iter)
    }

    pub fn bounded_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == self.max_iter).count()
    }
}

pub fn julia_field(config: &RenderConfig, params: &FractalParams) -> IterationField {
    let extent = config.view_extent;
    let xs: Vec<f64> = linspace(-extent, extent, config.width)
        .into_iter()
        .map(|x| x / params.zoom + params.pan_x)
        .collect();
    let ys: Vec<f64> = linspace(-extent, extent, config.height)
        .into_iter()
        .map(|y| y / params.zoom + params.pan_y)
        .collect();

    let mut data = Vec::with_capacity(config.width * config.height);
    for &im in &ys {
        for &re in &xs {
            data.push(julia_escapes(C::new(re, im), params.c, config.max_iter, config.escape_radius));
        }
    }

    IterationField {
        width: config.width,
        height: config.height,
        max_iter: config.max_iter,
        data,
    }
}
