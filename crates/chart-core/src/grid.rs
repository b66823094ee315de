// File: crates/chart-core/src/grid.rs
// Summary: Sampling and tick layout helpers.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Category indices to label when at most `limit` ticks fit.
pub fn category_ticks(count: usize, limit: Option<usize>) -> Vec<usize> {
    if count == 0 { return Vec::new(); }
    let limit = limit.unwrap_or(11).max(1);
    let stride = count.div_ceil(limit).max(1);
    (0..count).step_by(stride).collect()
}
