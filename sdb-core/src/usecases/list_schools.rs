use super::prelude::*;

/// Load all schools and rank them by their distance to `target`.
///
/// The target is checked before the store is accessed, so an
/// invalid target never yields a partial result.
pub fn list_schools_by_distance<R: SchoolRepo>(
    repo: &R,
    ranker: &ProximityRanker,
    target: Coordinate,
) -> Result<Vec<RankedSchool>> {
    validate_target(target)?;
    let schools = repo.all_schools()?;
    log::debug!(
        "Ranking {} school(s) by {} distance to {target}",
        schools.len(),
        ranker.metric()
    );
    Ok(ranker.rank(target, schools)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use sdb_entities::builders::*;

    fn db_with_schools() -> MockDb {
        let db = MockDb::default();
        db.schools.borrow_mut().extend([
            School::build().id(1).name("A").pos(0.0, 1.0).finish(),
            School::build().id(2).name("B").pos(1.0, 0.0).finish(),
            School::build().id(3).name("C").pos(0.0, 0.0).finish(),
        ]);
        db
    }

    fn names(ranked: &[RankedSchool]) -> Vec<&str> {
        ranked.iter().map(|r| r.item.name.as_str()).collect()
    }

    #[test]
    fn list_by_haversine_distance() {
        let db = db_with_schools();
        let ranker = ProximityRanker::new(DistanceMetric::Haversine);
        let ranked = list_schools_by_distance(&db, &ranker, Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(names(&ranked), vec!["C", "A", "B"]);
        assert!((ranked[1].distance.to_f64() - 111.19).abs() < 0.01);
    }

    #[test]
    fn list_by_planar_distance() {
        let db = db_with_schools();
        let ranker = ProximityRanker::new(DistanceMetric::Planar);
        let ranked = list_schools_by_distance(&db, &ranker, Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(names(&ranked), vec!["C", "A", "B"]);
        assert_eq!(ranked[2].distance.to_f64(), 1.0);
    }

    #[test]
    fn list_empty_store() {
        let db = MockDb::default();
        let ranked =
            list_schools_by_distance(&db, &ProximityRanker::default(), Coordinate::new(1.0, 1.0))
                .unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn reject_invalid_target_before_loading() {
        // A failing store would be noticed if it was accessed
        let db = MockDb::failing();
        let res = list_schools_by_distance(
            &db,
            &ProximityRanker::default(),
            Coordinate::new(f64::NAN, 0.0),
        );
        assert!(matches!(
            res,
            Err(Error::InvalidTarget(InvalidInput::Latitude))
        ));
    }

    #[test]
    fn surface_store_errors() {
        let db = MockDb::failing();
        let res =
            list_schools_by_distance(&db, &ProximityRanker::default(), Coordinate::new(0.0, 0.0));
        assert!(matches!(res, Err(Error::Repo(_))));
    }
}
