//! Core domain traits for itinerary processing.
//!
//! Rows come from whatever table layer the caller uses. Implement these for
//! your own row types, or use [`crate::itinerary::ItinRow`].

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Identifier for routes and links.
///
/// `Display` is used when an identifier has to be named in an error.
pub trait Id: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T> Id for T where T: Clone + Eq + Hash + Ord + fmt::Display {}

/// One row of a transit itinerary: a link traversed by a route.
pub trait ItinSegment {
    type RouteId: Id;
    type LinkId: Id;

    /// Transit line this segment belongs to.
    fn route_id(&self) -> &Self::RouteId;

    /// 1-based position within the route.
    fn itin_order(&self) -> u32;

    /// Directional link (ABB) traversed by this segment.
    fn link_id(&self) -> &Self::LinkId;
}

/// A segment carrying linear-referencing measures (percent of route length).
pub trait MeasuredSegment: ItinSegment {
    fn measures(&self) -> (f64, f64);

    fn set_measures(&mut self, from_measure: f64, to_measure: f64);
}

/// A segment carrying scheduled times.
pub trait TimedSegment: ItinSegment {
    /// Departure time in seconds.
    fn departure_time(&self) -> i64;

    /// Arrival time in seconds.
    fn arrival_time(&self) -> i64;

    /// Segment travel time in minutes (1 d.p.).
    fn line_serv_time(&self) -> f64;

    fn set_times(&mut self, departure_time: i64, arrival_time: i64, line_serv_time: f64);
}

/// Provides link lengths in miles.
pub trait LinkLengthProvider {
    type LinkId: Id;

    fn miles_for(&self, link_id: &Self::LinkId) -> Option<f64>;
}

impl<K: Id> LinkLengthProvider for HashMap<K, f64> {
    type LinkId = K;

    fn miles_for(&self, link_id: &K) -> Option<f64> {
        self.get(link_id).copied()
    }
}
