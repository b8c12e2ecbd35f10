#![cfg(not(target_arch = "wasm32"))]
use candle_chart_wasm::domain::chart::{ChartScales, SurfaceSize, auto_bandwidth, ticks};
use candle_chart_wasm::domain::market_data::RandomFinancial;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn generated_series_is_valid(seed: u64, count: u8) -> bool {
    let candles = RandomFinancial::new(0, seed).generate(count as usize);
    candles.len() == count as usize
        && candles.iter().all(|c| c.ohlcv.is_valid())
        && candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}

#[quickcheck]
fn candles_stay_inside_the_surface(seed: u64, count: u8) -> bool {
    let candles = RandomFinancial::new(0, seed).generate(count as usize + 1);
    let mut scales = ChartScales::from_candles(&candles);
    scales.measure(SurfaceSize::new(800.0, 400.0));

    candles.iter().all(|c| {
        let x = scales.x.apply(c.timestamp.as_f64()).unwrap_or(f64::NAN);
        let high = scales.y.apply(c.ohlcv.high.value()).unwrap_or(f64::NAN);
        let low = scales.y.apply(c.ohlcv.low.value()).unwrap_or(f64::NAN);
        (-1e-6..=800.0 + 1e-6).contains(&x)
            && (-1e-6..=400.0 + 1e-6).contains(&high)
            && (-1e-6..=400.0 + 1e-6).contains(&low)
            && high <= low
    })
}

#[quickcheck]
fn ticks_stay_in_the_domain(a: i32, b: i32) -> bool {
    let (lo, hi) = (a.min(b) as f64, a.max(b) as f64);
    let values = ticks(lo, hi, 10.0);
    !values.is_empty()
        && values.iter().all(|t| *t >= lo && *t <= hi)
        && values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn bandwidth_never_exceeds_the_spacing(raw: Vec<u16>) -> bool {
    let mut xs: Vec<f64> = raw.iter().map(|v| *v as f64).collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup();
    let width = auto_bandwidth(&xs, 0.75);
    match xs.windows(2).map(|w| w[1] - w[0]).reduce(f64::min) {
        Some(min_gap) => (width - 0.75 * min_gap).abs() < 1e-9,
        None => width == 10.0,
    }
}
