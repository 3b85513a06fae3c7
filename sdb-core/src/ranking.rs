//! Ranking of records by their distance to a target coordinate.
//!
//! The ranking is a pure function of its inputs: records are
//! annotated with their distance to the target and sorted in
//! ascending order. Records with an equal distance keep their
//! relative input order. Non-finite distances, e.g. caused by
//! stored coordinates that are not numbers, are placed after
//! all finite distances.

use std::cmp::Ordering;

use thiserror::Error;

use crate::entities::*;

/// The target coordinate of a ranking request is unusable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Missing latitude")]
    MissingLatitude,
    #[error("Missing longitude")]
    MissingLongitude,
    #[error("Latitude is not a finite number")]
    Latitude,
    #[error("Longitude is not a finite number")]
    Longitude,
}

/// Anything that is located at a coordinate.
pub trait Positioned {
    fn pos(&self) -> Coordinate;
}

impl Positioned for School {
    fn pos(&self) -> Coordinate {
        self.pos
    }
}

impl Positioned for Coordinate {
    fn pos(&self) -> Coordinate {
        *self
    }
}

/// A record annotated with its distance to the target
/// of a single ranking request.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance: Distance,
}

pub type RankedSchool = Ranked<School>;

pub fn validate_target(target: Coordinate) -> Result<Coordinate, InvalidInput> {
    if !target.lat.is_finite() {
        return Err(InvalidInput::Latitude);
    }
    if !target.lng.is_finite() {
        return Err(InvalidInput::Longitude);
    }
    Ok(target)
}

/// Total order of distances with all NaN values at the end.
///
/// Infinite distances are ordered naturally, i.e. after all
/// finite distances but before NaN.
pub fn cmp_distances(lhs: Distance, rhs: Distance) -> Ordering {
    let (lhs, rhs) = (lhs.to_f64(), rhs.to_f64());
    match (lhs.is_nan(), rhs.is_nan()) {
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProximityRanker {
    metric: DistanceMetric,
}

impl ProximityRanker {
    pub const fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    pub const fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn rank<T, I>(&self, target: Coordinate, records: I) -> Result<Vec<Ranked<T>>, InvalidInput>
    where
        T: Positioned,
        I: IntoIterator<Item = T>,
    {
        let target = validate_target(target)?;
        let metric = self.metric;
        let mut ranked: Vec<_> = records
            .into_iter()
            .map(|item| {
                let distance = metric.distance(target, item.pos());
                if !distance.is_finite() {
                    log::debug!("Non-finite {metric} distance to {}", item.pos());
                }
                Ranked { item, distance }
            })
            .collect();
        // `sort_by` is stable
        ranked.sort_by(|a, b| cmp_distances(a.distance, b.distance));
        Ok(ranked)
    }
}
