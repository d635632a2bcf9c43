//! mhn-network core utilities
//!
//! Shortest paths, itinerary measures and itinerary time repair for the
//! MHN highway/transit network, plus the small reference helpers around them.

pub mod traits;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod measures;
pub mod times;
pub mod config;
pub mod table;
pub mod tipid;
pub mod bearing;
pub mod link;
