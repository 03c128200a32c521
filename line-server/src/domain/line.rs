//! Line aggregate.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Section, SectionError, Sections, Station};

/// Identifier of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One transit line: its naming, its section topology, and audit
/// timestamps.
///
/// The line exclusively owns its sections; every section inserted is bound
/// to the line's id, and sections removed from the topology are dropped
/// with it. Mutations go through the topology, so the path invariant holds
/// after each successful call.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Sections,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Line {
    /// Create a line from its first section.
    pub fn new(id: LineId, name: String, color: String, mut initial: Section) -> Self {
        initial.bind_line(id);
        let now = Utc::now();

        Line {
            id,
            name,
            color,
            sections: Sections::with_initial(initial),
            created_at: now,
            modified_at: now,
        }
    }

    /// Returns the line id.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the section topology.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Change name and color.
    pub fn update(&mut self, name: String, color: String) {
        self.name = name;
        self.color = color;
        self.touch();
    }

    /// Insert a section into the line's path.
    ///
    /// # Errors
    ///
    /// Propagates the topology's rejection; the line is unchanged on error.
    pub fn add_section(&mut self, mut section: Section) -> Result<(), SectionError> {
        section.bind_line(self.id);
        self.sections.add(section)?;
        self.touch();
        Ok(())
    }

    /// Remove a station, merging or dropping the touching sections.
    ///
    /// # Errors
    ///
    /// Propagates the topology's rejection; the line is unchanged on error.
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        self.sections.remove_station(station)?;
        self.touch();
        Ok(())
    }

    /// The station sequence from head to tail.
    pub fn stations(&self) -> Result<Vec<Station>, SectionError> {
        self.sections.ordered_stations()
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
