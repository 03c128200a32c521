//! Line service: station resolution and per-line operations.
//!
//! The topology core works on already-resolved station tokens and a single
//! line at a time. This service is the calling layer around it: it resolves
//! station ids against the registry, allocates line ids, and serializes
//! access to the line map so each line is mutated by one caller at a time.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Distance, Line, LineId, Section, SectionError, StationId};
use crate::stations::StationRegistry;

use super::error::LineError;

/// Parameters for creating a line with its first section.
#[derive(Debug, Clone)]
pub struct CreateLine {
    pub name: String,
    pub color: String,
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: u64,
}

/// Parameters for inserting a section into a line.
#[derive(Debug, Clone, Copy)]
pub struct AddSection {
    pub up_station: StationId,
    pub down_station: StationId,
    pub distance: u64,
}

/// Thread-safe line store and operations.
///
/// Clones share the same underlying store.
#[derive(Clone)]
pub struct LineService {
    stations: StationRegistry,
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    next_id: u64,
    lines: HashMap<LineId, Line>,
}

impl LineService {
    /// Create a service resolving stations against `stations`.
    pub fn new(stations: StationRegistry) -> Self {
        LineService {
            stations,
            inner: Arc::new(RwLock::new(Inner {
                next_id: 1,
                lines: HashMap::new(),
            })),
        }
    }

    /// The registry this service resolves stations against.
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    /// Create a line from its first section.
    ///
    /// # Errors
    ///
    /// Fails if either station id is unknown or the section is malformed;
    /// nothing is stored in that case.
    pub async fn create_line(&self, req: CreateLine) -> Result<Line, LineError> {
        let section = self
            .build_section(req.up_station, req.down_station, req.distance)
            .await?;

        let mut guard = self.inner.write().await;
        let id = LineId(guard.next_id);
        guard.next_id += 1;

        let line = Line::new(id, req.name, req.color, section);
        guard.lines.insert(id, line.clone());
        info!(%id, name = line.name(), "line created");
        Ok(line)
    }

    /// Look up a line by id.
    pub async fn get_line(&self, id: LineId) -> Result<Line, LineError> {
        let guard = self.inner.read().await;
        guard.lines.get(&id).cloned().ok_or(LineError::NotFound(id))
    }

    /// All lines, in id order.
    pub async fn list_lines(&self) -> Vec<Line> {
        let guard = self.inner.read().await;
        let mut lines: Vec<Line> = guard.lines.values().cloned().collect();
        lines.sort_by_key(Line::id);
        lines
    }

    /// Change a line's name and color.
    pub async fn update_line(
        &self,
        id: LineId,
        name: String,
        color: String,
    ) -> Result<Line, LineError> {
        let mut guard = self.inner.write().await;
        let line = guard.lines.get_mut(&id).ok_or(LineError::NotFound(id))?;
        line.update(name, color);
        Ok(line.clone())
    }

    /// Delete a line and every section it owns.
    pub async fn delete_line(&self, id: LineId) -> Result<(), LineError> {
        let mut guard = self.inner.write().await;
        guard
            .lines
            .remove(&id)
            .map(|_| info!(%id, "line deleted"))
            .ok_or(LineError::NotFound(id))
    }

    /// Insert a section into a line's path.
    ///
    /// # Errors
    ///
    /// Fails on unknown ids or when the topology rejects the section; the
    /// line is unchanged on error.
    pub async fn add_section(&self, id: LineId, req: AddSection) -> Result<Line, LineError> {
        let section = self
            .build_section(req.up_station, req.down_station, req.distance)
            .await?;

        let mut guard = self.inner.write().await;
        let line = guard.lines.get_mut(&id).ok_or(LineError::NotFound(id))?;
        line.add_section(section)?;
        Ok(line.clone())
    }

    /// Remove a station from a line's path.
    ///
    /// # Errors
    ///
    /// Fails on unknown ids or when the topology rejects the removal; the
    /// line is unchanged on error.
    pub async fn remove_station(&self, id: LineId, station: StationId) -> Result<Line, LineError> {
        let station = self.stations.resolve(station).await?;

        let mut guard = self.inner.write().await;
        let line = guard.lines.get_mut(&id).ok_or(LineError::NotFound(id))?;
        line.remove_station(&station)?;
        Ok(line.clone())
    }

    /// Resolve both endpoints and build a free-standing section.
    async fn build_section(
        &self,
        up: StationId,
        down: StationId,
        distance: u64,
    ) -> Result<Section, LineError> {
        let up = self.stations.resolve(up).await?;
        let down = self.stations.resolve(down).await?;
        let distance = Distance::new(distance).map_err(SectionError::from)?;
        Ok(Section::new(up, down, distance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use crate::stations::StationError;

    async fn seeded() -> (LineService, StationId, StationId, StationId) {
        let registry = StationRegistry::new();
        let gangnam = registry.create("강남역").await.unwrap();
        let yeoksam = registry.create("력삼역").await.unwrap();
        let seolleung = registry.create("선릉역").await.unwrap();

        (
            LineService::new(registry),
            gangnam.id(),
            yeoksam.id(),
            seolleung.id(),
        )
    }

    fn create_request(up: StationId, down: StationId, distance: u64) -> CreateLine {
        CreateLine {
            name: "2호선".to_string(),
            color: "bg-green-600".to_string(),
            up_station: up,
            down_station: down,
            distance,
        }
    }

    fn names(line: &Line) -> Vec<String> {
        line.stations()
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn create_line_with_initial_section() {
        let (service, gangnam, _, seolleung) = seeded().await;

        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();

        assert_eq!(line.id(), LineId(1));
        assert_eq!(names(&line), vec!["강남역", "선릉역"]);
    }

    #[tokio::test]
    async fn create_line_with_unknown_station_stores_nothing() {
        let (service, gangnam, _, _) = seeded().await;

        let result = service
            .create_line(create_request(gangnam, StationId(99), 10))
            .await;

        assert!(matches!(
            result,
            Err(LineError::Station(StationError::NotFound(_)))
        ));
        assert!(service.list_lines().await.is_empty());
    }

    #[tokio::test]
    async fn create_line_with_zero_distance_is_invalid() {
        let (service, gangnam, _, seolleung) = seeded().await;

        let result = service
            .create_line(create_request(gangnam, seolleung, 0))
            .await;

        assert!(matches!(
            result,
            Err(LineError::Section(SectionError::InvalidSection(_)))
        ));
    }

    #[tokio::test]
    async fn add_section_splits_the_line() {
        let (service, gangnam, yeoksam, seolleung) = seeded().await;
        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();

        let line = service
            .add_section(
                line.id(),
                AddSection {
                    up_station: gangnam,
                    down_station: yeoksam,
                    distance: 4,
                },
            )
            .await
            .unwrap();

        assert_eq!(names(&line), vec!["강남역", "력삼역", "선릉역"]);

        let distances: Vec<u64> = {
            let stored = service.get_line(line.id()).await.unwrap();
            let mut pairs: Vec<(u64, u64)> = stored
                .sections()
                .iter()
                .map(|s| (s.up().id().0, s.distance().get()))
                .collect();
            pairs.sort();
            pairs.into_iter().map(|(_, d)| d).collect()
        };
        assert_eq!(distances, vec![4, 6]);
    }

    #[tokio::test]
    async fn remove_station_rereads_the_short_path() {
        let (service, gangnam, yeoksam, seolleung) = seeded().await;
        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();
        service
            .add_section(
                line.id(),
                AddSection {
                    up_station: gangnam,
                    down_station: yeoksam,
                    distance: 4,
                },
            )
            .await
            .unwrap();

        let line = service.remove_station(line.id(), yeoksam).await.unwrap();

        assert_eq!(names(&line), vec!["강남역", "선릉역"]);
        let merged: Vec<u64> = line.sections().iter().map(|s| s.distance().get()).collect();
        assert_eq!(merged, vec![10]);
    }

    #[tokio::test]
    async fn remove_station_from_minimal_line_is_rejected() {
        let (service, gangnam, _, seolleung) = seeded().await;
        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();

        let result = service.remove_station(line.id(), gangnam).await;
        assert!(matches!(
            result,
            Err(LineError::Section(SectionError::MinimumSection))
        ));
        assert_eq!(names(&service.get_line(line.id()).await.unwrap()).len(), 2);
    }

    #[tokio::test]
    async fn update_line_changes_naming() {
        let (service, gangnam, _, seolleung) = seeded().await;
        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();
        let created = line.created_at();

        let updated = service
            .update_line(line.id(), "신분당선".to_string(), "bg-red-600".to_string())
            .await
            .unwrap();

        assert_eq!(updated.name(), "신분당선");
        assert_eq!(updated.color(), "bg-red-600");
        assert_eq!(updated.created_at(), created);
    }

    #[tokio::test]
    async fn delete_line_removes_it() {
        let (service, gangnam, _, seolleung) = seeded().await;
        let line = service
            .create_line(create_request(gangnam, seolleung, 10))
            .await
            .unwrap();

        service.delete_line(line.id()).await.unwrap();
        assert!(matches!(
            service.get_line(line.id()).await,
            Err(LineError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_line(line.id()).await,
            Err(LineError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_lines_is_id_ordered() {
        let (service, gangnam, yeoksam, seolleung) = seeded().await;
        service
            .create_line(create_request(gangnam, yeoksam, 4))
            .await
            .unwrap();
        service
            .create_line(CreateLine {
                name: "분당선".to_string(),
                color: "bg-yellow-600".to_string(),
                up_station: yeoksam,
                down_station: seolleung,
                distance: 6,
            })
            .await
            .unwrap();

        let ids: Vec<LineId> = service.list_lines().await.iter().map(Line::id).collect();
        assert_eq!(ids, vec![LineId(1), LineId(2)]);
    }

    #[tokio::test]
    async fn stations_accessor_shares_the_registry() {
        let (service, gangnam, _, _) = seeded().await;
        let station: Station = service.stations().resolve(gangnam).await.unwrap();
        assert_eq!(station.name(), "강남역");
    }
}
