use crate::config::DataConfig;
use crate::log_info;
use crate::domain::{
    logging::{LogComponent, get_time_provider},
    market_data::{Candle, RandomFinancial},
};

/// Builds the synthetic data set the chart starts with.
pub struct GenerateDataUseCase {
    config: DataConfig,
}

impl GenerateDataUseCase {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// Generator anchored at `start_date`. Without a configured seed, every
    /// call with a new `start_date` yields a different series.
    pub fn generator(&self, start_date: u64) -> RandomFinancial {
        RandomFinancial::new(start_date, self.config.seed.unwrap_or(start_date))
            .with_start_price(self.config.start_price)
            .with_interval(self.config.interval_ms)
            .with_drift(self.config.mu, self.config.sigma)
            .with_steps(self.config.steps)
    }

    /// `candle_count` candles starting now.
    pub fn execute(&self) -> Vec<Candle> {
        self.execute_with_count(self.config.candle_count)
    }

    pub fn execute_with_count(&self, count: usize) -> Vec<Candle> {
        let now = get_time_provider().current_timestamp();
        let candles = self.generator(now).generate(count);

        log_info!(
            LogComponent::Application("GenerateData"),
            "Generated {} synthetic candles",
            candles.len()
        );
        candles
    }
}
