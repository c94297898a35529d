//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind the `WeatherProvider` trait
//! - Shared domain models (requests, readings, condition groups)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Condition, Units, WeatherReading, WeatherRequest};
pub use provider::{OpenWeatherProvider, WeatherProvider};
