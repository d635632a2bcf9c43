//! Errors raised by the itinerary routines.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ItinError {
    #[error("No length recorded for link {0}")]
    MissingLink(String),
    #[error("Link {link} has an unusable length: {miles}")]
    InvalidLength { link: String, miles: f64 },
    #[error("Route {0} has zero total length")]
    DegenerateRoute(String),
    #[error("Route {route} order {order}: repaired arrival time is out of range")]
    TimeOverflow { route: String, order: u32 },
}
