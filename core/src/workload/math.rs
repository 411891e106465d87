use std::hint::black_box;

pub const SEED: f64 = 1.2345;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathOutcome {
    pub iterations: u64,
    pub value: f64,
}

#[inline]
pub fn step(mut value: f64) -> f64 {
    value += value.sin();
    value += value.cos();
    value += (value.abs() + 1.0).ln();
    value
}

/// Applies [`step`] `iterations` times starting from [`SEED`].
pub fn run(iterations: u64) -> MathOutcome {
    let mut value = SEED;
    let mut done = 0u64;
    for _ in 0..iterations {
        value = black_box(step(value));
        done += 1;
    }
    MathOutcome {
        iterations: done,
        value: black_box(value),
    }
}
