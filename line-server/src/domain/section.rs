//! Line section type.

use super::{Distance, LineId, SectionError, Station};

/// One directed edge of a line: an up station, a down station, and the
/// distance between them.
///
/// Sections are created free-standing and bound to a line when first
/// inserted into its topology. The topology is their only mutator: it
/// shrinks a host section to admit a new neighbor ([`Section::relocate`])
/// and widens one to absorb a removed neighbor ([`Section::merge`]).
///
/// # Invariants
///
/// - The two stations are distinct.
/// - The distance is positive (guaranteed by [`Distance`]).
/// - A section belongs to at most one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
    line: Option<LineId>,
}

impl Section {
    /// Create a section between two distinct stations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSection` if both endpoints are the same station.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_server::domain::{Distance, Section, Station, StationId};
    ///
    /// let gangnam = Station::new(StationId(1), "강남역").unwrap();
    /// let seolleung = Station::new(StationId(3), "선릉역").unwrap();
    ///
    /// let section = Section::new(gangnam.clone(), seolleung, Distance::new(10).unwrap()).unwrap();
    /// assert_eq!(section.distance().get(), 10);
    ///
    /// // A section cannot loop back onto its own up station
    /// let loops = Section::new(gangnam.clone(), gangnam, Distance::new(1).unwrap());
    /// assert!(loops.is_err());
    /// ```
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, SectionError> {
        if up == down {
            return Err(SectionError::InvalidSection(
                "up and down station are the same",
            ));
        }

        Ok(Section {
            up,
            down,
            distance,
            line: None,
        })
    }

    /// Returns the up station.
    pub fn up(&self) -> &Station {
        &self.up
    }

    /// Returns the down station.
    pub fn down(&self) -> &Station {
        &self.down
    }

    /// Returns the section length.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns the line this section belongs to, once inserted.
    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    pub(crate) fn bind_line(&mut self, line: LineId) {
        self.line = Some(line);
    }

    /// True if `station` is this section's up station.
    pub fn matches_up(&self, station: &Station) -> bool {
        self.up == *station
    }

    /// True if `station` is this section's down station.
    pub fn matches_down(&self, station: &Station) -> bool {
        self.down == *station
    }

    fn touches(&self, station: &Station) -> bool {
        self.matches_up(station) || self.matches_down(station)
    }

    /// True iff exactly one endpoint of `other` coincides with one of ours.
    ///
    /// Sharing both endpoints (a duplicate span) or none (a disjoint span)
    /// is not connectable; both are caller errors, not attachment points.
    pub fn is_connectable(&self, other: &Section) -> bool {
        let up_connected = other.touches(&self.up);
        let down_connected = other.touches(&self.down);
        up_connected != down_connected
    }

    /// Shrink this section so `incoming` can take over part of its span.
    ///
    /// Head-side split: same up station — `incoming` slots in before the
    /// remainder, and this section is rewritten to start where `incoming`
    /// ends. Tail-side split: same down station — symmetric, this section
    /// now ends where `incoming` starts. In both cases `incoming` keeps its
    /// caller-supplied endpoints and the two sections together span exactly
    /// the original range.
    ///
    /// When neither side matches, `incoming` extends the line past one of
    /// our endpoints and nothing here needs to move.
    ///
    /// # Errors
    ///
    /// Returns `OverlappingSection` if the remainder would not stay
    /// positive. This section is untouched on error.
    pub fn relocate(&mut self, incoming: &Section) -> Result<(), SectionError> {
        if self.up == incoming.up && self.down != incoming.down {
            let remainder = self.remainder(incoming)?;
            self.up = incoming.down.clone();
            self.distance = remainder;
            return Ok(());
        }

        if self.down == incoming.down && self.up != incoming.up {
            let remainder = self.remainder(incoming)?;
            self.down = incoming.up.clone();
            self.distance = remainder;
        }

        Ok(())
    }

    fn remainder(&self, incoming: &Section) -> Result<Distance, SectionError> {
        self.distance
            .minus(incoming.distance)
            .ok_or_else(|| SectionError::OverlappingSection {
                up: incoming.up.clone(),
                down: incoming.down.clone(),
            })
    }

    /// Absorb `following`, the section that starts where this one ends.
    ///
    /// Used when the shared station is removed: this section takes over the
    /// combined span and the caller discards `following`.
    pub fn merge(&mut self, following: &Section) {
        debug_assert!(
            self.down == following.up,
            "merge requires adjacent sections"
        );
        self.down = following.down.clone();
        self.distance = self.distance.plus(following.distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name).unwrap()
    }

    fn dist(value: u64) -> Distance {
        Distance::new(value).unwrap()
    }

    fn section(up: &Station, down: &Station, distance: u64) -> Section {
        Section::new(up.clone(), down.clone(), dist(distance)).unwrap()
    }

    #[test]
    fn new_rejects_looping_section() {
        let a = station(1, "A");
        let result = Section::new(a.clone(), a, dist(5));
        assert!(matches!(result, Err(SectionError::InvalidSection(_))));
    }

    #[test]
    fn new_section_is_unbound() {
        let s = section(&station(1, "A"), &station(2, "B"), 5);
        assert_eq!(s.line(), None);
    }

    #[test]
    fn bind_line_attaches() {
        let mut s = section(&station(1, "A"), &station(2, "B"), 5);
        s.bind_line(LineId(7));
        assert_eq!(s.line(), Some(LineId(7)));
    }

    #[test]
    fn connectable_when_sharing_one_endpoint() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let d = station(4, "D");

        let base = section(&a, &b, 10);

        // same up station
        assert!(base.is_connectable(&section(&a, &c, 4)));
        // same down station
        assert!(base.is_connectable(&section(&c, &b, 4)));
        // continues past the tail
        assert!(base.is_connectable(&section(&b, &c, 4)));
        // arrives at the head
        assert!(base.is_connectable(&section(&c, &a, 4)));
        // disjoint
        assert!(!base.is_connectable(&section(&c, &d, 4)));
    }

    #[test]
    fn not_connectable_to_duplicate() {
        let a = station(1, "A");
        let b = station(2, "B");

        let base = section(&a, &b, 10);
        assert!(!base.is_connectable(&section(&a, &b, 4)));
        // reversed duplicate shares both endpoints too
        assert!(!base.is_connectable(&section(&b, &a, 4)));
    }

    #[test]
    fn relocate_head_side_split() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");

        let mut host = section(&a, &b, 10);
        let incoming = section(&a, &c, 4);

        host.relocate(&incoming).unwrap();

        assert_eq!(host.up(), &c);
        assert_eq!(host.down(), &b);
        assert_eq!(host.distance(), dist(6));
        // the incoming section is never rewritten
        assert_eq!(incoming.up(), &a);
        assert_eq!(incoming.down(), &c);
        assert_eq!(incoming.distance(), dist(4));
    }

    #[test]
    fn relocate_tail_side_split() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");

        let mut host = section(&a, &b, 10);
        let incoming = section(&c, &b, 4);

        host.relocate(&incoming).unwrap();

        assert_eq!(host.up(), &a);
        assert_eq!(host.down(), &c);
        assert_eq!(host.distance(), dist(6));
    }

    #[test]
    fn relocate_rejects_span_as_long_as_host() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");

        let mut host = section(&a, &b, 10);
        let before = host.clone();

        let result = host.relocate(&section(&a, &c, 10));
        assert!(matches!(
            result,
            Err(SectionError::OverlappingSection { .. })
        ));
        // untouched on error
        assert_eq!(host, before);

        let result = host.relocate(&section(&a, &c, 12));
        assert!(matches!(
            result,
            Err(SectionError::OverlappingSection { .. })
        ));
        assert_eq!(host, before);
    }

    #[test]
    fn relocate_is_noop_for_end_extension() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");

        let mut host = section(&a, &b, 10);
        let before = host.clone();

        // extends the tail; longer than the host is fine, nothing is split
        host.relocate(&section(&b, &c, 99)).unwrap();
        assert_eq!(host, before);

        // extends the head
        host.relocate(&section(&c, &a, 99)).unwrap();
        assert_eq!(host, before);
    }

    #[test]
    fn merge_absorbs_following_section() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");

        let mut first = section(&a, &b, 5);
        let second = section(&b, &c, 6);

        first.merge(&second);

        assert_eq!(first.up(), &a);
        assert_eq!(first.down(), &c);
        assert_eq!(first.distance(), dist(11));
    }
}
