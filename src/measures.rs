//! Itinerary measures: position of each segment as a percent of route length.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::ItinError;
use crate::itinerary::{group_by_route, resolve_lengths};
use crate::traits::{LinkLengthProvider, MeasuredSegment};

/// Set `from`/`to` measures for every segment from the lengths of its links.
///
/// Every route is checked before anything is written, so an error leaves
/// all segments untouched.
pub fn calculate_itin_measures<S, L>(segments: &mut [S], lengths: &L) -> Result<(), ItinError>
where
    S: MeasuredSegment + Send,
    L: LinkLengthProvider<LinkId = S::LinkId> + Sync,
{
    let routes = group_by_route(segments);

    let mut route_miles = Vec::with_capacity(routes.len());
    for route in &routes {
        let miles = resolve_lengths(route, lengths)?;
        let total: f64 = miles.iter().sum();
        if total <= 0.0 {
            // Non-empty by construction.
            let route_id = route[0].route_id().to_string();
            return Err(ItinError::DegenerateRoute(route_id));
        }
        route_miles.push((miles, total));
    }

    let route_count = routes.len();
    routes
        .into_par_iter()
        .zip(route_miles.into_par_iter())
        .for_each(|(mut route, (miles, total))| {
            let mut cumulative_percent = 0.0;
            for (segment, segment_miles) in route.iter_mut().zip(miles) {
                let to_measure = cumulative_percent + segment_miles / total * 100.0;
                segment.set_measures(cumulative_percent, to_measure);
                cumulative_percent = to_measure;
            }
            let route_id = route[0].route_id();
            debug!(route = %route_id, total_miles = total, "measured route");
        });

    info!(routes = route_count, segments = segments.len(), "itinerary measures calculated");
    Ok(())
}
