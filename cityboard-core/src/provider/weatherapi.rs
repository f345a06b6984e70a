use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::model::CityWeather;

use super::{LookupError, WeatherLookup};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// WeatherAPI.com current-conditions client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different endpoint. Tests use this to talk
    /// to a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherLookup for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<CityWeather, LookupError> {
        let url = format!("{}/current.json", self.base_url);

        debug!(city, "fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "weather lookup transport failure");
                LookupError::Transport(e.to_string())
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, "weather lookup rejected");
            return Err(LookupError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "weather lookup returned an unexpected body");
            LookupError::Parse(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
