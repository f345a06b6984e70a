//! Core library for the `cityboard` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The board state container (search, dedup, remove)
//! - The weather lookup provider and shared domain models
//!
//! It is used by `cityboard-cli`, but can also be reused by other binaries or services.

pub mod board;
pub mod config;
pub mod model;
pub mod provider;

pub use board::{Board, LOOKUP_FAILED_MSG};
pub use config::Config;
pub use model::{CityWeather, Condition, CurrentWeather, Location};
pub use provider::weatherapi::WeatherApiProvider;
pub use provider::{LookupError, WeatherLookup, provider_from_config};
