//! Station identity types.

use std::fmt;
use std::sync::Arc;

/// Error returned when constructing a station with an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// Identifier of one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identity token for one station.
///
/// Stations are owned by the registry; the topology core only compares and
/// copies these tokens, it never creates, destroys, or resolves a station.
/// The registry is the single producer of tokens, so two equal tokens denote
/// the same station.
///
/// # Examples
///
/// ```
/// use line_server::domain::{Station, StationId};
///
/// let gangnam = Station::new(StationId(1), "강남역").unwrap();
/// assert_eq!(gangnam.name(), "강남역");
///
/// // Blank names are rejected
/// assert!(Station::new(StationId(2), "   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: StationId,
    name: Arc<str>,
}

impl Station {
    /// Create a station token.
    ///
    /// The name is trimmed and must be non-empty afterwards.
    pub fn new(id: StationId, name: &str) -> Result<Self, InvalidStation> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidStation {
                reason: "name must not be blank",
            });
        }

        Ok(Station {
            id,
            name: Arc::from(name),
        })
    }

    /// Returns the station id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({} {})", self.id, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
