use super::*;

#[post("/addSchool", data = "<body>")]
pub fn post_add_school(
    db: sqlite::Connections,
    body: JsonResult<json::NewSchool>,
) -> CreatedResult<json::SchoolCreated> {
    let new_school = from_json::add_school(body?.into_inner());
    let id = usecases::add_school(&db.exclusive()?, new_school)?;
    Ok((Status::Created, Json(id.into())))
}

#[get("/listSchools?<latitude>&<longitude>&<metric>")]
pub fn get_list_schools(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    latitude: Option<&str>,
    longitude: Option<&str>,
    metric: Option<&str>,
) -> Result<Vec<json::RankedSchool>> {
    let target = parse::parse_target(latitude, longitude)?;
    let ranker = cfg
        .ranker(metric)
        .map_err(|err| ApiError::OtherWithStatus(err, Status::BadRequest))?;
    let ranked = usecases::list_schools_by_distance(&db.shared()?, &ranker, target)?;
    Ok(Json(ranked.into_iter().map(to_json::ranked_school).collect()))
}

#[get("/schools/<id>")]
pub fn get_school(db: sqlite::Connections, id: i64) -> Result<json::School> {
    let school = usecases::get_school(&db.shared()?, SchoolId::from_raw(id))?;
    Ok(Json(school.into()))
}

#[get("/count/schools")]
pub fn get_count_schools(db: sqlite::Connections) -> Result<usize> {
    Ok(Json(usecases::count_schools(&db.shared()?)?))
}
