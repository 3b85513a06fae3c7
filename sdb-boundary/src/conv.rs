use super::*;
use sdb_entities as e;

impl From<e::school::School> for School {
    fn from(from: e::school::School) -> Self {
        let e::school::School {
            id,
            name,
            address,
            pos,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            latitude: pos.lat,
            longitude: pos.lng,
        }
    }
}

impl From<School> for e::school::School {
    fn from(from: School) -> Self {
        let School {
            id,
            name,
            address,
            latitude,
            longitude,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            pos: e::geo::Coordinate::new(latitude, longitude),
        }
    }
}

impl From<e::id::SchoolId> for SchoolCreated {
    fn from(id: e::id::SchoolId) -> Self {
        Self { id: id.into() }
    }
}

impl From<(e::school::School, e::geo::Distance)> for RankedSchool {
    fn from((school, distance): (e::school::School, e::geo::Distance)) -> Self {
        let School {
            id,
            name,
            address,
            latitude,
            longitude,
        } = school.into();
        Self {
            id,
            name,
            address,
            latitude,
            longitude,
            distance: distance.is_finite().then_some(distance.to_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_from_entity() {
        let school = e::school::School {
            id: e::id::SchoolId::from_raw(3),
            name: "Lincoln High".into(),
            address: "1 Elm St".into(),
            pos: e::geo::Coordinate::new(40.7, -74.0),
        };
        let School {
            id,
            latitude,
            longitude,
            ..
        } = school.clone().into();
        assert_eq!(id, 3);
        assert_eq!(latitude, 40.7);
        assert_eq!(longitude, -74.0);
        let ranked = RankedSchool::from((school, e::geo::Distance::new(1.5)));
        assert_eq!(ranked.name, "Lincoln High");
        assert_eq!(ranked.distance, Some(1.5));
    }

    #[test]
    fn ranked_school_with_non_finite_distance() {
        let school = e::school::School {
            id: e::id::SchoolId::from_raw(1),
            name: "Far".into(),
            address: "Away".into(),
            pos: e::geo::Coordinate::new(1e200, 0.0),
        };
        for distance in [f64::INFINITY, f64::NAN] {
            let ranked = RankedSchool::from((school.clone(), e::geo::Distance::new(distance)));
            assert!(ranked.distance.is_none());
        }
    }
}
