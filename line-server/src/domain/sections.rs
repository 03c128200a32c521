//! Line topology: the section collection and its path invariant.
//!
//! Sections are stored unordered; the invariant, restored by every
//! successful mutation, is that their up -> down edges form a single simple
//! path. Ordering is reconstructed on demand from the up-station map, which
//! stays injective exactly because of that invariant.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{Section, SectionError, Station};

/// All sections of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded with a line's first section.
    pub fn with_initial(section: Section) -> Self {
        Sections {
            sections: vec![section],
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if the line has no sections yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in storage order (not path order).
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    fn contains_station(&self, station: &Station) -> bool {
        self.sections
            .iter()
            .any(|s| s.matches_up(station) || s.matches_down(station))
    }

    /// Insert a section into the path.
    ///
    /// The first section is stored unconditionally. Afterwards exactly one
    /// endpoint of the incoming section must already be on the line: the
    /// host section covering that attachment point is shrunk to make room
    /// (or left alone when the line is merely extended past its head or
    /// tail), then the incoming section is stored.
    ///
    /// # Errors
    ///
    /// - `OverlappingSection` if both endpoints are already on the line
    ///   (duplicate span or cycle-closing insert), or if a split would
    ///   leave the host without a positive remainder.
    /// - `DisconnectedSection` if neither endpoint is on the line.
    ///
    /// The collection is unchanged on error.
    pub fn add(&mut self, section: Section) -> Result<(), SectionError> {
        if self.sections.is_empty() {
            self.sections.push(section);
            return Ok(());
        }

        let up_known = self.contains_station(section.up());
        let down_known = self.contains_station(section.down());

        if up_known && down_known {
            return Err(SectionError::OverlappingSection {
                up: section.up().clone(),
                down: section.down().clone(),
            });
        }
        if !up_known && !down_known {
            return Err(SectionError::DisconnectedSection {
                up: section.up().clone(),
                down: section.down().clone(),
            });
        }

        let host = self
            .split_host(&section)
            .or_else(|| self.extension_host(&section))
            .ok_or_else(|| SectionError::DisconnectedSection {
                up: section.up().clone(),
                down: section.down().clone(),
            })?;

        self.sections[host].relocate(&section)?;

        debug!(up = %section.up(), down = %section.down(), "section inserted");
        self.sections.push(section);
        Ok(())
    }

    /// First section that must shrink to admit `incoming`: it covers the
    /// attachment station on the same side, so the incoming span is carved
    /// out of it.
    fn split_host(&self, incoming: &Section) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.matches_up(incoming.up()) || s.matches_down(incoming.down()))
    }

    /// First section the incoming one merely touches: the line is extended
    /// past its head or tail and the host keeps its span.
    fn extension_host(&self, incoming: &Section) -> Option<usize> {
        self.sections.iter().position(|s| s.is_connectable(incoming))
    }

    /// Remove a station from the path.
    ///
    /// An interior station has one section arriving and one leaving; the
    /// arriving section absorbs the leaving one, summing their distances.
    /// The head and tail stations drop their single touching section.
    ///
    /// # Errors
    ///
    /// - `StationNotOnLine` if no section touches `station`.
    /// - `MinimumSection` if the line has only one section left; a line
    ///   never shrinks below two stations.
    ///
    /// The collection is unchanged on error.
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        let inbound = self.sections.iter().position(|s| s.matches_down(station));
        let outbound = self.sections.iter().position(|s| s.matches_up(station));

        match (inbound, outbound) {
            (None, None) => Err(SectionError::StationNotOnLine(station.clone())),
            _ if self.sections.len() == 1 => Err(SectionError::MinimumSection),
            (Some(idx), None) | (None, Some(idx)) => {
                // head or tail: the single touching section goes away
                self.sections.remove(idx);
                debug!(%station, "end station removed");
                Ok(())
            }
            (Some(into), Some(out_of)) => {
                let following = self.sections.remove(out_of);
                let into = if out_of < into { into - 1 } else { into };
                self.sections[into].merge(&following);
                debug!(%station, "interior station removed");
                Ok(())
            }
        }
    }

    /// The station sequence from head to tail, materialized fresh per call.
    ///
    /// Walks the up -> down map starting from the head (the one up station
    /// that is nobody's down station). An empty collection yields an empty
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns `BrokenPath` if the sections do not form a single simple
    /// path; the mutation guards keep this unreachable.
    pub fn ordered_stations(&self) -> Result<Vec<Station>, SectionError> {
        if self.sections.is_empty() {
            return Ok(Vec::new());
        }

        let mut next = HashMap::with_capacity(self.sections.len());
        for section in &self.sections {
            if next.insert(section.up(), section.down()).is_some() {
                return Err(SectionError::BrokenPath);
            }
        }

        let down_stations: HashSet<&Station> = self.sections.iter().map(Section::down).collect();
        let mut heads = next.keys().filter(|up| !down_stations.contains(*up));
        let head = heads.next().copied().ok_or(SectionError::BrokenPath)?;
        if heads.next().is_some() {
            return Err(SectionError::BrokenPath);
        }

        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        let mut current = head;
        stations.push(current.clone());
        while let Some(&down) = next.get(current) {
            current = down;
            stations.push(current.clone());
        }

        if stations.len() != self.sections.len() + 1 {
            return Err(SectionError::BrokenPath);
        }
        Ok(stations)
    }
}
