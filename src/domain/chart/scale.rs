//! Continuous linear scales and extent helpers.

/// Default number of ticks requested from a scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Linear mapping from a numeric domain to a pixel range.
///
/// The domain is `None` until data is available; every mapping then returns
/// `None` and callers skip rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: Option<(f64, f64)>,
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self { domain: None, range: (0.0, 1.0) }
    }
}

impl LinearScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(domain: Option<(f64, f64)>) -> Self {
        let mut scale = Self::default();
        scale.set_domain(domain);
        scale
    }

    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    pub fn set_domain(&mut self, domain: Option<(f64, f64)>) {
        self.domain = domain.filter(|(d0, d1)| d0.is_finite() && d1.is_finite());
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_range(&mut self, r0: f64, r1: f64) {
        self.range = (r0, r1);
    }

    pub fn is_defined(&self) -> bool {
        self.domain.is_some()
    }

    /// Map a domain value to the range. A zero-width domain maps everything to
    /// the middle of the range.
    pub fn apply(&self, value: f64) -> Option<f64> {
        let (d0, d1) = self.domain?;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        Some(r0 + t * (r1 - r0))
    }

    /// Map a range value back to the domain.
    pub fn invert(&self, pixel: f64) -> Option<f64> {
        let (d0, d1) = self.domain?;
        let (r0, r1) = self.range;
        let t = if r1 == r0 { 0.5 } else { (pixel - r0) / (r1 - r0) };
        Some(d0 + t * (d1 - d0))
    }

    /// Roughly `count` human-friendly values inside the domain, spaced by
    /// 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self.domain {
            Some((d0, d1)) => ticks(d0, d1, count as f64),
            None => Vec::new(),
        }
    }
}

/// JavaScript-style rounding (half toward positive infinity).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        // Negative `inc` marks a reciprocal step, avoiding 0.1 * 3 style drift.
        let recip = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * recip);
        i2 = round_half_up(stop * recip);
        if i1 / recip < start {
            i1 += 1.0;
        }
        if i2 / recip > stop {
            i2 -= 1.0;
        }
        inc = -recip;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick values between `start` and `stop`, ordered in the same direction.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let k = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// Minimum and maximum over every accessor applied to every item.
/// Non-finite values are ignored; `None` when nothing finite remains.
pub fn extent<T>(items: &[T], accessors: &[&dyn Fn(&T) -> f64]) -> Option<(f64, f64)> {
    items
        .iter()
        .flat_map(|item| accessors.iter().map(move |accessor| accessor(item)))
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_zero_to_one() {
        let values = ticks(0.0, 1.0, 10.0);
        assert_eq!(values, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn ticks_reverse_domain() {
        assert_eq!(ticks(10.0, 0.0, 5.0), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn degenerate_domain_single_tick() {
        assert_eq!(ticks(3.0, 3.0, 10.0), vec![3.0]);
    }

    #[test]
    fn undefined_scale_has_no_ticks() {
        assert!(LinearScale::new().ticks(DEFAULT_TICK_COUNT).is_empty());
        assert_eq!(LinearScale::new().apply(1.0), None);
    }
}
