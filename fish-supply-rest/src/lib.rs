//! HTTP-backed data access: PostgREST repositories over the same schema as
//! `fish-supply-postgres`, plus the Google user-info and weather lookups.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod repository;
pub mod weather;

pub use client::RestClient;
pub use config::RestConfig;
pub use error::{RestError, RestResult};
pub use identity::{GoogleUserInfo, GoogleUserInfoClient};
pub use repository::{RestGateways, RestRepositories, RestRepository, RestResource};
pub use weather::{WeatherClient, WeatherConfig, WeatherReport};
