//! Cardinal direction of an arc from its endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearing {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl Bearing {
    // Counter-clockwise from east, one per 45 degree sector.
    const SECTORS: [Bearing; 8] = [
        Bearing::E,
        Bearing::NE,
        Bearing::N,
        Bearing::NW,
        Bearing::W,
        Bearing::SW,
        Bearing::S,
        Bearing::SE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bearing::E => "E",
            Bearing::NE => "NE",
            Bearing::N => "N",
            Bearing::NW => "NW",
            Bearing::W => "W",
            Bearing::SW => "SW",
            Bearing::S => "S",
            Bearing::SE => "SE",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bearing of the straight line from `first` to `last`, both planar `(x, y)`.
///
/// A zero-length arc reports `E`.
pub fn determine_arc_bearing(first: (f64, f64), last: (f64, f64)) -> Bearing {
    let (x1, y1) = first;
    let (x2, y2) = last;
    let angle = (y2 - y1).atan2(x2 - x1).to_degrees();
    let sector = ((angle + 22.5).rem_euclid(360.0) / 45.0).floor() as usize;
    Bearing::SECTORS[sector % 8]
}
