//! Section length arithmetic.

use std::fmt;

/// Error returned when constructing a non-positive distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: must be positive")]
pub struct InvalidDistance;

/// A strictly positive length of track, in line-length units.
///
/// A `Distance` is greater than zero by construction. Splitting arithmetic
/// goes through [`Distance::minus`], which refuses to produce a remainder
/// that is not positive, so a section can never shrink to nothing.
///
/// # Examples
///
/// ```
/// use line_server::domain::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// let four = Distance::new(4).unwrap();
///
/// assert_eq!(ten.minus(four), Distance::new(6).ok());
/// assert_eq!(four.minus(ten), None);
/// assert_eq!(ten.plus(four).get(), 14);
///
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    /// Create a distance from a raw value.
    pub fn new(value: u64) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance);
        }
        Ok(Distance(value))
    }

    /// Returns the raw value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Remainder after carving `other` out of this span.
    ///
    /// Returns `None` when `other` is as long as, or longer than, this
    /// distance: nothing positive would remain.
    pub fn minus(self, other: Distance) -> Option<Distance> {
        (self.0 > other.0).then(|| Distance(self.0 - other.0))
    }

    /// Combined length of two adjacent spans.
    pub fn plus(self, other: Distance) -> Distance {
        Distance(self.0 + other.0)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
