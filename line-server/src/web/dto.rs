//! Data transfer objects for web requests and responses.
//!
//! Domain types stay serde-free; every response is built by an explicit
//! conversion so the wire format is decoupled from the model.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Section, SectionError, Station};

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Station name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Station id
    pub id: u64,

    /// Station name
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    /// Line name
    pub name: String,

    /// Display color
    pub color: String,

    /// Up station of the first section
    pub up_station_id: u64,

    /// Down station of the first section
    pub down_station_id: u64,

    /// Distance of the first section
    pub distance: u64,
}

/// Request to update a line's name and color.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    /// New line name
    pub name: String,

    /// New display color
    pub color: String,
}

/// Request to insert a section into a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    /// Up station id
    pub up_station_id: u64,

    /// Down station id
    pub down_station_id: u64,

    /// Section distance
    pub distance: u64,
}

/// Query selecting the station to remove from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStationQuery {
    /// Station id to remove
    pub station_id: u64,
}

/// A line with its ordered stations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    /// Line id
    pub id: u64,

    /// Line name
    pub name: String,

    /// Display color
    pub color: String,

    /// Stations from head to tail
    pub stations: Vec<StationResponse>,

    /// Creation timestamp (RFC 3339)
    pub created_date: String,

    /// Last-modification timestamp (RFC 3339)
    pub modified_date: String,
}

/// One section of a line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    /// Up station name
    pub up_station: String,

    /// Down station name
    pub down_station: String,

    /// Section distance
    pub distance: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().to_string(),
        }
    }
}

impl LineResponse {
    /// Create from a domain Line, materializing the head-to-tail order.
    pub fn from_line(line: &Line) -> Result<Self, SectionError> {
        let stations = line
            .stations()?
            .iter()
            .map(StationResponse::from_station)
            .collect();

        Ok(Self {
            id: line.id().0,
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations,
            created_date: line.created_at().to_rfc3339(),
            modified_date: line.modified_at().to_rfc3339(),
        })
    }
}

impl SectionResponse {
    /// Create from a domain Section.
    pub fn from_section(section: &Section) -> Self {
        Self {
            up_station: section.up().name().to_string(),
            down_station: section.down().name().to_string(),
            distance: section.distance().get(),
        }
    }
}
