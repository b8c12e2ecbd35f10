use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::entities::Candle;
use super::value_objects::{OHLCV, Price, Timestamp, Volume};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;
const YEAR_MS: f64 = 365.0 * DAY_MS as f64;

/// Random OHLCV generator driven by geometric Brownian motion.
///
/// Each record covers one `interval_ms`; the interval is sampled `steps` times
/// and the samples are collapsed into open/high/low/close, so
/// `low <= open, close <= high` holds for every record.
#[derive(Debug, Clone)]
pub struct RandomFinancial {
    pub start_date: u64,
    pub start_price: f64,
    pub interval_ms: u64,
    /// Annualised drift.
    pub mu: f64,
    /// Annualised volatility.
    pub sigma: f64,
    pub steps: usize,
    pub seed: u64,
}

impl Default for RandomFinancial {
    fn default() -> Self {
        Self {
            start_date: 0,
            start_price: 100.0,
            interval_ms: DAY_MS,
            mu: 0.1,
            sigma: 0.1,
            steps: 20,
            seed: 0,
        }
    }
}

impl RandomFinancial {
    pub fn new(start_date: u64, seed: u64) -> Self {
        Self { start_date, seed, ..Default::default() }
    }

    pub fn with_start_price(mut self, start_price: f64) -> Self {
        self.start_price = start_price;
        self
    }

    pub fn with_interval(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    pub fn with_drift(mut self, mu: f64, sigma: f64) -> Self {
        self.mu = mu;
        self.sigma = sigma;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    /// Produce `count` candles with strictly increasing dates.
    pub fn generate(&self, count: usize) -> Vec<Candle> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let steps = self.steps.max(1);
        let delta = self.interval_ms as f64 / YEAR_MS / steps as f64;
        let drift = (self.mu - self.sigma * self.sigma / 2.0) * delta;
        let diffusion = self.sigma * delta.sqrt();

        let mut price = self.start_price;
        let mut candles = Vec::with_capacity(count);

        for i in 0..count {
            let Some(timestamp) = (i as u64)
                .checked_mul(self.interval_ms)
                .and_then(|offset| self.start_date.checked_add(offset))
            else {
                log_warn!(
                    LogComponent::Domain("RandomFinancial"),
                    "date range exhausted after {} of {} candles",
                    i,
                    count
                );
                break;
            };

            let open = price;
            let mut high = open;
            let mut low = open;

            for _ in 0..steps {
                price *= (drift + diffusion * standard_normal(&mut rng)).exp();
                high = high.max(price);
                low = low.min(price);
            }

            let close = price;
            let volume = interval_volume(&mut rng);

            candles.push(Candle::new(
                Timestamp::from_millis(timestamp),
                OHLCV::new(
                    Price::from(open),
                    Price::from(high),
                    Price::from(low),
                    Price::from(close),
                    Volume::from(volume),
                ),
            ));
        }

        log_debug!(
            LogComponent::Domain("RandomFinancial"),
            "generated {} candles (seed {})",
            candles.len(),
            self.seed
        );

        candles
    }
}

fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

/// `ceil(1000 * N(1, 0.1))`, never negative.
fn interval_volume<R: Rng>(rng: &mut R) -> f64 {
    (1000.0 * (1.0 + 0.1 * standard_normal(rng))).ceil().max(0.0)
}
