//! Core topology model for transit lines.
//!
//! This module contains the domain types that represent one line as an
//! ordered chain of sections. All types enforce their invariants at
//! construction or mutation time, so code that receives them can trust a
//! consistent path.

mod distance;
mod error;
mod line;
mod section;
mod sections;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::SectionError;
pub use line::{Line, LineId};
pub use section::Section;
pub use sections::Sections;
pub use station::{InvalidStation, Station, StationId};
