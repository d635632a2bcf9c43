//! Itinerary time QC: keep departures after the previous arrival and give
//! zero-time segments a distance-based travel time.

use std::ops::Add;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::ItinError;
use crate::itinerary::{group_by_route, resolve_lengths};
use crate::traits::{LinkLengthProvider, TimedSegment};

/// Assumed speed for segments with no recorded travel time.
pub const NOMINAL_SPEED_MPH: f64 = 30.0;

/// Floor applied to estimated segment times, in minutes.
pub const MIN_SEGMENT_MINUTES: f64 = 0.1;

/// Counts of the repairs made by [`validate_itin_times`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRepairSummary {
    /// Segments whose departure was moved up to the previous arrival.
    pub shifted: usize,
    /// Segments recorded as arriving before they depart.
    pub raised: usize,
    /// Zero-time segments given an estimated travel time.
    pub estimated: usize,
}

impl Add for TimeRepairSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            shifted: self.shifted + other.shifted,
            raised: self.raised + other.raised,
            estimated: self.estimated + other.estimated,
        }
    }
}

/// Travel time in whole seconds for a link at [`NOMINAL_SPEED_MPH`].
///
/// `None` when the length is negative or the estimate does not fit in `i64`.
pub fn estimate_travel_seconds(miles: f64) -> Option<i64> {
    let seconds = (miles / NOMINAL_SPEED_MPH * 3600.0).round();
    (0.0..i64::MAX as f64)
        .contains(&seconds)
        .then_some(seconds as i64)
}

/// Seconds to minutes, rounded to 1 d.p. and floored at [`MIN_SEGMENT_MINUTES`].
pub fn travel_time_minutes(seconds: i64) -> f64 {
    let minutes = (seconds as f64 / 60.0 * 10.0).round() / 10.0;
    minutes.max(MIN_SEGMENT_MINUTES)
}

/// Reconcile departure, arrival and travel times along each route.
///
/// Times are only ever moved forward. All routes are repaired before any
/// segment is updated, so an error leaves every segment untouched.
pub fn validate_itin_times<S, L>(segments: &mut [S], lengths: &L) -> Result<TimeRepairSummary, ItinError>
where
    S: TimedSegment + Send + Sync,
    L: LinkLengthProvider<LinkId = S::LinkId> + Sync,
{
    let routes = group_by_route(segments);

    let route_miles = routes
        .iter()
        .map(|route| resolve_lengths(route, lengths))
        .collect::<Result<Vec<_>, _>>()?;

    let plans = routes
        .par_iter()
        .zip(route_miles.par_iter())
        .map(|(route, miles)| repair_route(route, miles))
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let summary = plans
        .iter()
        .fold(TimeRepairSummary::default(), |total, plan| total + plan.summary);

    routes
        .into_par_iter()
        .zip(plans.into_par_iter())
        .for_each(|(mut route, plan)| {
            for (segment, (dep_time, arr_time, line_serv_time)) in route.iter_mut().zip(plan.times) {
                segment.set_times(dep_time, arr_time, line_serv_time);
            }
        });

    info!(
        shifted = summary.shifted,
        raised = summary.raised,
        estimated = summary.estimated,
        "itinerary times validated"
    );
    Ok(summary)
}

// Repaired (departure, arrival, line_serv_time) per segment, in route order.
struct RoutePlan {
    times: Vec<(i64, i64, f64)>,
    summary: TimeRepairSummary,
}

fn repair_route<S: TimedSegment>(route: &[&mut S], miles: &[f64]) -> Result<RoutePlan, ItinError> {
    let mut summary = TimeRepairSummary::default();
    let mut times = Vec::with_capacity(route.len());
    let mut previous_arrival: Option<i64> = None;

    for (segment, &segment_miles) in route.iter().zip(miles) {
        let mut dep_time = segment.departure_time();
        let mut arr_time = segment.arrival_time();
        let mut line_serv_time = segment.line_serv_time();

        if let Some(prev_arr_time) = previous_arrival {
            if dep_time < prev_arr_time {
                let route_id = segment.route_id();
                debug!(
                    route = %route_id,
                    order = segment.itin_order(),
                    by = prev_arr_time.saturating_sub(dep_time),
                    "departure precedes previous arrival; shifting"
                );
                dep_time = prev_arr_time;
                summary.shifted += 1;
            }
        }

        if arr_time < dep_time {
            if segment.arrival_time() < segment.departure_time() {
                summary.raised += 1;
            }
            arr_time = dep_time;
        }

        if dep_time == arr_time {
            let overflow = || ItinError::TimeOverflow {
                route: segment.route_id().to_string(),
                order: segment.itin_order(),
            };
            let estimate = estimate_travel_seconds(segment_miles).ok_or_else(overflow)?;
            arr_time = arr_time.checked_add(estimate).ok_or_else(overflow)?;
            line_serv_time = travel_time_minutes(estimate);
            summary.estimated += 1;
        }

        times.push((dep_time, arr_time, line_serv_time));
        previous_arrival = Some(arr_time);
    }

    Ok(RoutePlan { times, summary })
}
