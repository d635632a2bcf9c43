//! Itinerary rows and per-route grouping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ItinError;
use crate::traits::{ItinSegment, LinkLengthProvider, MeasuredSegment, TimedSegment};

/// A transit itinerary row, using MHN field names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItinRow {
    #[serde(rename = "TRANSIT_LINE")]
    pub transit_line: String,
    #[serde(rename = "ITIN_ORDER")]
    pub itin_order: u32,
    #[serde(rename = "ABB")]
    pub abb: String,
    #[serde(rename = "F_MEAS", default)]
    pub f_meas: f64,
    #[serde(rename = "T_MEAS", default)]
    pub t_meas: f64,
    #[serde(rename = "DEP_TIME", default)]
    pub dep_time: i64,
    #[serde(rename = "ARR_TIME", default)]
    pub arr_time: i64,
    #[serde(rename = "LINE_SERV_TIME", default)]
    pub line_serv_time: f64,
}

impl ItinRow {
    pub fn new(transit_line: impl Into<String>, itin_order: u32, abb: impl Into<String>) -> Self {
        Self {
            transit_line: transit_line.into(),
            itin_order,
            abb: abb.into(),
            f_meas: 0.0,
            t_meas: 0.0,
            dep_time: 0,
            arr_time: 0,
            line_serv_time: 0.0,
        }
    }

    pub fn with_times(mut self, dep_time: i64, arr_time: i64) -> Self {
        self.dep_time = dep_time;
        self.arr_time = arr_time;
        self.line_serv_time = ((arr_time - dep_time) as f64 / 60.0 * 10.0).round() / 10.0;
        self
    }
}

impl ItinSegment for ItinRow {
    type RouteId = String;
    type LinkId = String;

    fn route_id(&self) -> &String {
        &self.transit_line
    }

    fn itin_order(&self) -> u32 {
        self.itin_order
    }

    fn link_id(&self) -> &String {
        &self.abb
    }
}

impl MeasuredSegment for ItinRow {
    fn measures(&self) -> (f64, f64) {
        (self.f_meas, self.t_meas)
    }

    fn set_measures(&mut self, from_measure: f64, to_measure: f64) {
        self.f_meas = from_measure;
        self.t_meas = to_measure;
    }
}

impl TimedSegment for ItinRow {
    fn departure_time(&self) -> i64 {
        self.dep_time
    }

    fn arrival_time(&self) -> i64 {
        self.arr_time
    }

    fn line_serv_time(&self) -> f64 {
        self.line_serv_time
    }

    fn set_times(&mut self, departure_time: i64, arrival_time: i64, line_serv_time: f64) {
        self.dep_time = departure_time;
        self.arr_time = arrival_time;
        self.line_serv_time = line_serv_time;
    }
}

/// Split segments into routes, ordered by route id, each sorted by
/// `itin_order`. The underlying slice is not reordered.
pub fn group_by_route<S: ItinSegment>(segments: &mut [S]) -> Vec<Vec<&mut S>> {
    let mut routes: BTreeMap<S::RouteId, Vec<&mut S>> = BTreeMap::new();
    for segment in segments.iter_mut() {
        let route = segment.route_id().clone();
        routes.entry(route).or_default().push(segment);
    }

    routes
        .into_values()
        .map(|mut route| {
            route.sort_by_key(|segment| segment.itin_order());
            route
        })
        .collect()
}

/// Resolve the length of every segment in a route, in order.
pub(crate) fn resolve_lengths<S, L>(route: &[&mut S], lengths: &L) -> Result<Vec<f64>, ItinError>
where
    S: ItinSegment,
    L: LinkLengthProvider<LinkId = S::LinkId>,
{
    route
        .iter()
        .map(|segment| {
            let link = segment.link_id();
            let miles = lengths
                .miles_for(link)
                .ok_or_else(|| ItinError::MissingLink(link.to_string()))?;
            if !miles.is_finite() || miles < 0.0 {
                return Err(ItinError::InvalidLength {
                    link: link.to_string(),
                    miles,
                });
            }
            Ok(miles)
        })
        .collect()
}
