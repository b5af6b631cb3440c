//! Read-only JSON API over a daily climate-observation dataset.
//!
//! Serves precipitation, station, and temperature queries from a SQLite file
//! of daily weather-station readings. The interesting part is the thin layer
//! that turns path parameters into date-bounded aggregate queries and shapes
//! the rows into response payloads.

pub mod api;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod web;

pub use config::AppConfig;
pub use error::ApiError;
