//! Transit line topology server.
//!
//! A web service that manages subway-style lines as ordered chains of
//! sections: insert a section by splitting the span it lands in, remove a
//! station by merging its neighboring sections, and read the station order
//! back from head to tail.

pub mod domain;
pub mod lines;
pub mod stations;
pub mod web;
