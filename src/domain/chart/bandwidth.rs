/// Fraction of the tightest spacing a glyph may occupy.
pub const DEFAULT_WIDTH_FRACTION: f64 = 0.75;

/// Width used when fewer than two points are available to measure spacing.
pub const FALLBACK_BANDWIDTH: f64 = 10.0;

/// Glyph width derived from data density: `width_fraction` times the smallest
/// gap between adjacent pixel positions.
pub fn auto_bandwidth(screen_values: &[f64], width_fraction: f64) -> f64 {
    let mut sorted: Vec<f64> = screen_values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.len() < 2 {
        return FALLBACK_BANDWIDTH;
    }
    sorted.sort_by(f64::total_cmp);

    let min_spacing = sorted
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold(f64::INFINITY, f64::min);

    width_fraction * min_spacing
}
