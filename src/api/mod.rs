//! HTTP surface: router, handlers, and the wire shapes they produce.
//!
//! Every handler is a pure function of its own path parameters plus the
//! shared read-only pool; nothing is carried over between requests.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::dates;
use crate::error::ApiError;
use crate::models::{Station, TemperatureReading, TemperatureStats};

#[derive(Serialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Information")]
    pub information: StationInformation,
}

#[derive(Serialize)]
pub struct StationInformation {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Elevation")]
    pub elevation: f64,
}

impl From<Station> for StationRecord {
    fn from(row: Station) -> Self {
        Self {
            station: row.station,
            information: StationInformation {
                id: row.id,
                name: row.name,
                latitude: row.latitude,
                longitude: row.longitude,
                elevation: row.elevation,
            },
        }
    }
}

#[derive(Serialize)]
pub struct TobsEntry {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "TOBS")]
    pub tobs: f64,
}

impl From<TemperatureReading> for TobsEntry {
    fn from(row: TemperatureReading) -> Self {
        Self {
            date: row.date,
            tobs: row.tobs,
        }
    }
}

#[derive(Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "From_Date")]
    pub from_date: NaiveDate,
    #[serde(rename = "To_Date", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(rename = "Temp_Calcs")]
    pub temp_calcs: TempCalcs,
}

#[derive(Serialize)]
pub struct TempCalcs {
    #[serde(rename = "Min Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max: Option<f64>,
    #[serde(rename = "Avg Temperature")]
    pub avg: Option<f64>,
}

impl From<TemperatureStats> for TempCalcs {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.min,
            max: stats.max,
            avg: stats.avg.map(|v| (v * 100.0).round() / 100.0),
        }
    }
}

pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperature_from))
        .route("/api/v1.0/{start}/{end}", get(temperature_range))
        .with_state(pool)
}

async fn home() -> Html<&'static str> {
    Html(
        "<h1>Climate Observation API</h1>\
         <h2>Available Routes:</h2>\
         <h3>Precipitation (last year of data)</h3>\
         /api/v1.0/precipitation<br/>\
         <h3>Stations</h3>\
         /api/v1.0/stations<br/>\
         <h3>Temperature observations for the most active station</h3>\
         /api/v1.0/tobs<br/>\
         <h3>Temperature stats from a start date</h3>\
         /api/v1.0/yyyy-mm-dd<br/>\
         <h3>Temperature stats for a start/end range</h3>\
         /api/v1.0/yyyy-mm-dd/yyyy-mm-dd<br/>",
    )
}

/// Precipitation readings over the year ending at the newest measurement
/// date, as a date-to-value mapping. Rows arrive ordered by date, so when
/// several stations report the same day the last row wins the key.
async fn precipitation(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<NaiveDate, Option<f64>>>, ApiError> {
    let Some(anchor) = db::latest_measurement_date(&pool).await? else {
        return Ok(Json(BTreeMap::new()));
    };
    let readings = db::precipitation_since(&pool, dates::window_start(anchor)).await?;
    let mapping = readings.into_iter().map(|r| (r.date, r.prcp)).collect();
    Ok(Json(mapping))
}

async fn stations(State(pool): State<SqlitePool>) -> Result<Json<Vec<StationRecord>>, ApiError> {
    let rows = db::all_stations(&pool).await?;
    Ok(Json(rows.into_iter().map(StationRecord::from).collect()))
}

/// Temperature observations for the station with the most measurement rows,
/// over the same one-year window as the precipitation endpoint.
async fn tobs(State(pool): State<SqlitePool>) -> Result<Json<Vec<TobsEntry>>, ApiError> {
    let Some(anchor) = db::latest_measurement_date(&pool).await? else {
        return Ok(Json(Vec::new()));
    };
    let Some(station) = db::most_active_station(&pool).await? else {
        return Ok(Json(Vec::new()));
    };
    let rows =
        db::temperatures_for_station(&pool, &station, dates::window_start(anchor)).await?;
    Ok(Json(rows.into_iter().map(TobsEntry::from).collect()))
}

async fn temperature_from(
    State(pool): State<SqlitePool>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let start_date = dates::parse_path_date(&start)
        .ok_or(ApiError::MalformedDate { value: start })?;

    let stats = db::temperature_stats(&pool, start_date, None).await?;
    Ok(Json(vec![TemperatureSummary {
        from_date: start_date,
        to_date: None,
        temp_calcs: stats.into(),
    }]))
}

async fn temperature_range(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    let parsed = dates::parse_path_date(&start).zip(dates::parse_path_date(&end));
    let Some((start_date, end_date)) = parsed else {
        return Err(ApiError::MalformedRange { start, end });
    };
    // Equal dates are a valid single-day range; only a reversed range is
    // rejected, before any query runs.
    if end_date < start_date {
        return Err(ApiError::EndBeforeStart { start, end });
    }

    let stats = db::temperature_stats(&pool, start_date, Some(end_date)).await?;
    Ok(Json(vec![TemperatureSummary {
        from_date: start_date,
        to_date: Some(end_date),
        temp_calcs: stats.into(),
    }]))
}
