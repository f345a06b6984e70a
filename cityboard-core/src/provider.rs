use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::{config::Config, model::CityWeather, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// Lookup failures, by cause. The board collapses all of these into one
/// generic user-facing message; the detail is for logs and tests.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced an HTTP response.
    #[error("failed to reach the weather service: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("weather service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to parse weather service response: {0}")]
    Parse(String),
}

/// Current-conditions lookup by city-name query.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<CityWeather, LookupError>;
}

/// Construct the lookup provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<WeatherApiProvider> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityboard configure` and enter your WeatherAPI.com key."
        )
    })?;

    Ok(match &config.base_url {
        Some(base) => WeatherApiProvider::with_base_url(api_key, base.clone()),
        None => WeatherApiProvider::new(api_key),
    })
}
