//! Planar geometry for the market grid.
//!
//! Destinations and shoppers live on an abstract 12 x 12 grid. Distances are
//! straight-line (Euclidean); there is no routing. [`GridProjection`] maps grid
//! points onto real coordinates for whoever renders the output.

use serde::{Deserialize, Serialize};

/// Lower bound of the grid on both axes.
pub const GRID_MIN: f64 = 0.0;
/// Upper bound of the grid on both axes.
pub const GRID_MAX: f64 = 12.0;

/// Distance used in place of an exact zero so utilities stay finite.
///
/// This is a modelling policy: a shopper standing on a destination is treated
/// as 0.1 grid units away from it.
pub const MIN_DISTANCE: f64 = 0.1;

/// A point on the market grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into `[GRID_MIN, GRID_MAX]`.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(GRID_MIN, GRID_MAX),
            y: self.y.clamp(GRID_MIN, GRID_MAX),
        }
    }

    pub fn distance_to(self, other: GridPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Straight-line distance with an exact zero replaced by [`MIN_DISTANCE`].
    pub fn floored_distance_to(self, other: GridPoint) -> f64 {
        let distance = self.distance_to(other);
        if distance == 0.0 {
            MIN_DISTANCE
        } else {
            distance
        }
    }
}

/// Linear projection from the grid onto a lat/lng bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridProjection {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// Default bounding box: northern Harare suburbs (approx).
impl Default for GridProjection {
    fn default() -> Self {
        Self {
            lat_min: -17.82,
            lat_max: -17.74,
            lng_min: 31.02,
            lng_max: 31.12,
        }
    }
}

impl GridProjection {
    /// Project a grid point to `(lat, lng)`. `y` drives latitude, `x` longitude.
    pub fn to_lat_lng(&self, point: GridPoint) -> (f64, f64) {
        let span = GRID_MAX - GRID_MIN;
        let lat = self.lat_min + ((point.y - GRID_MIN) / span) * (self.lat_max - self.lat_min);
        let lng = self.lng_min + ((point.x - GRID_MIN) / span) * (self.lng_max - self.lng_min);
        (lat, lng)
    }
}
