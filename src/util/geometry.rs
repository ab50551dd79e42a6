/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    dist_squared(x1, y1, x2, y2).sqrt()
}

/// Squared distance, for comparisons that don't need the square root.
#[inline]
pub fn dist_squared(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}
