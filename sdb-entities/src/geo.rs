use strum::{Display, EnumString, IntoStaticStr};

/// The Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position in decimal degrees.
///
/// Neither the range nor the finiteness of the values are checked
/// on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Distance between two coordinates.
///
/// The unit depends on the [`DistanceMetric`] that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn to_f64(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// Strategy for measuring the distance between two coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DistanceMetric {
    /// Euclidean distance on raw degrees (unitless).
    ///
    /// Only monotonic with the true geographic distance for small spans
    /// and distorted near the poles and across the antimeridian.
    Planar,
    /// Great-circle distance in kilometers.
    #[default]
    Haversine,
}

impl DistanceMetric {
    pub fn distance(self, from: Coordinate, to: Coordinate) -> Distance {
        match self {
            Self::Planar => planar_distance(from, to),
            Self::Haversine => haversine_distance(from, to),
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Planar => "°",
            Self::Haversine => "km",
        }
    }
}

pub fn planar_distance(from: Coordinate, to: Coordinate) -> Distance {
    let dlat = to.lat - from.lat;
    let dlng = to.lng - from.lng;
    Distance((dlat * dlat + dlng * dlng).sqrt())
}

pub fn haversine_distance(from: Coordinate, to: Coordinate) -> Distance {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlng = (to.lng - from.lng).to_radians();

    let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    // Rounding may push `a` slightly out of [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance(EARTH_RADIUS_KM * c)
}
