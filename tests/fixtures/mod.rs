//! Test fixtures for mhn-network.
//!
//! Provides:
//! - A small weighted graph with hand-checked shortest paths
//! - A numeric-id itinerary segment type with builders

pub mod sample_network;

pub use sample_network::*;
