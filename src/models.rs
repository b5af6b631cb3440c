//! Row types decoded from the observation dataset.

use chrono::NaiveDate;
use sqlx::FromRow;

/// One weather station, as stored in the `station` table.
#[derive(Debug, Clone, FromRow)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily precipitation reading. `prcp` is null when the station recorded
/// no precipitation value that day.
#[derive(Debug, Clone, FromRow)]
pub struct PrecipitationReading {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// One daily observed-temperature reading.
#[derive(Debug, Clone, FromRow)]
pub struct TemperatureReading {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Min/max/avg of observed temperature over a date range. All three are null
/// when no rows matched the range.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}
