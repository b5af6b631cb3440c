//! Read-only data access over the observation dataset.
//!
//! Every function checks a connection out of the shared pool for the duration
//! of one query and returns it when the future completes, on success or
//! failure. Handlers validate their inputs before calling in here, so a
//! rejected request never touches the pool.

use std::path::Path;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::models::{PrecipitationReading, Station, TemperatureReading, TemperatureStats};

/// Opens the dataset read-only. Fails if the file is missing rather than
/// creating an empty database.
pub async fn connect(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);
    SqlitePoolOptions::new().connect_with(options).await
}

/// Newest date present in the measurement table, the anchor for the rolling
/// one-year window. `None` on an empty dataset.
#[tracing::instrument(level = "debug", skip(pool))]
pub async fn latest_measurement_date(pool: &SqlitePool) -> Result<Option<NaiveDate>, sqlx::Error> {
    sqlx::query_scalar("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await
}

/// All precipitation readings on or after `since`, every station, ordered by
/// date ascending.
#[tracing::instrument(level = "debug", skip(pool))]
pub async fn precipitation_since(
    pool: &SqlitePool,
    since: NaiveDate,
) -> Result<Vec<PrecipitationReading>, sqlx::Error> {
    sqlx::query_as("SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date")
        .bind(since)
        .fetch_all(pool)
        .await
}

#[tracing::instrument(level = "debug", skip(pool))]
pub async fn all_stations(pool: &SqlitePool) -> Result<Vec<Station>, sqlx::Error> {
    sqlx::query_as("SELECT id, station, name, latitude, longitude, elevation FROM station")
        .fetch_all(pool)
        .await
}

/// Station id with the greatest number of measurement rows; count ties break
/// toward the lowest id so the choice is deterministic.
#[tracing::instrument(level = "debug", skip(pool))]
pub async fn most_active_station(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT station FROM measurement \
         GROUP BY station \
         ORDER BY COUNT(*) DESC, station ASC \
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

/// Temperature readings for one station on or after `since`, ordered by date
/// ascending.
#[tracing::instrument(level = "debug", skip(pool))]
pub async fn temperatures_for_station(
    pool: &SqlitePool,
    station: &str,
    since: NaiveDate,
) -> Result<Vec<TemperatureReading>, sqlx::Error> {
    sqlx::query_as(
        "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ? ORDER BY date",
    )
    .bind(station)
    .bind(since)
    .fetch_all(pool)
    .await
}

/// Min/max/avg observed temperature for all rows with `date >= start`, and
/// `date <= end` when an end is given. Aggregates over zero rows come back
/// as nulls, not as an error.
#[tracing::instrument(level = "debug", skip(pool))]
pub async fn temperature_stats(
    pool: &SqlitePool,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<TemperatureStats, sqlx::Error> {
    match end {
        Some(end) => {
            sqlx::query_as(
                "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                 FROM measurement WHERE date >= ? AND date <= ?",
            )
            .bind(start)
            .bind(end)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_as(
                "SELECT MIN(tobs) AS min, MAX(tobs) AS max, AVG(tobs) AS avg \
                 FROM measurement WHERE date >= ?",
            )
            .bind(start)
            .fetch_one(pool)
            .await
        }
    }
}
