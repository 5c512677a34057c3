//! Random utilities

/// `n` evenly spaced values covering `[start, stop]` inclusive
///
/// # Example
///
/// ```rust
/// use empirical::misc::linspace;
///
/// let xs = linspace(0.0, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start; n];
    }
    let span = stop - start;
    let denom = (n - 1) as f64;
    (0..n).map(|i| start + span * i as f64 / denom).collect()
}
