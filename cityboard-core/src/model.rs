use serde::{Deserialize, Serialize};

/// A place as identified by the lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub region: Option<String>,
}

/// Condition description plus the service's icon path and numeric code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

impl Condition {
    /// Absolute URL for the condition icon. The service returns
    /// protocol-relative paths (`//cdn.weatherapi.com/...`), which get an
    /// `https:` prefix; already-absolute URLs pass through untouched.
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("http") {
            self.icon.clone()
        } else {
            format!("https:{}", self.icon)
        }
    }
}

/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_kph: f64,
    pub feelslike_c: Option<f64>,
    pub uv: Option<f64>,
}

/// One lookup result, kept verbatim as the service returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeather {
    pub location: Location,
    pub current: CurrentWeather,
}

/// Case-insensitive city-name comparison; the identity key for the board.
pub fn same_city(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
