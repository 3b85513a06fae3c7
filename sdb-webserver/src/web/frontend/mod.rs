use std::result;

use maud::Markup;
use rocket::{
    self, get,
    http::Status,
    post,
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use crate::{
    adapters::json::{self, from_json},
    core::{prelude::*, usecases, util::parse},
    web::{sqlite, Cfg},
};

mod view;


const MISSING_SCHOOL_FIELDS: &str = "All fields (name, address, latitude, longitude) are required.";
const MISSING_TARGET: &str = "Both latitude and longitude query parameters are required.";
const ADD_SCHOOL_DB_ERROR: &str = "Database error occurred while adding school.";
const LIST_SCHOOLS_DB_ERROR: &str = "Could not fetch schools due to a database error.";

type ErrorPage = (Status, Markup);
type Result<T> = result::Result<T, ErrorPage>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

fn error_page(status: Status, message: &str) -> ErrorPage {
    (status, view::error(message))
}

#[get("/")]
pub fn get_index() -> Markup {
    view::index()
}

#[post("/addSchool", data = "<body>")]
pub fn post_add_school(
    db: sqlite::Connections,
    body: JsonResult<json::NewSchool>,
) -> Result<(Status, Markup)> {
    let new_school = body.map_err(|err| {
        debug!("Invalid school payload: {err}");
        error_page(Status::UnprocessableEntity, &err.to_string())
    })?;
    let new_school = from_json::add_school(new_school.into_inner());
    let db = db.exclusive().map_err(|err| {
        error!("{err:#}");
        error_page(Status::InternalServerError, ADD_SCHOOL_DB_ERROR)
    })?;
    match usecases::add_school(&db, new_school) {
        Ok(_) => Ok((Status::Created, view::school_added())),
        Err(usecases::Error::Repo(err)) => {
            error!("Failed to add school: {err}");
            Err(error_page(Status::InternalServerError, ADD_SCHOOL_DB_ERROR))
        }
        Err(err) => {
            debug!("Rejected school: {err}");
            Err(error_page(Status::BadRequest, MISSING_SCHOOL_FIELDS))
        }
    }
}

#[get("/listSchools?<latitude>&<longitude>&<metric>")]
pub fn get_list_schools(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    latitude: Option<&str>,
    longitude: Option<&str>,
    metric: Option<&str>,
) -> Result<Markup> {
    let target = parse::parse_target(latitude, longitude).map_err(|err| match err {
        InvalidInput::MissingLatitude | InvalidInput::MissingLongitude => {
            error_page(Status::BadRequest, MISSING_TARGET)
        }
        _ => error_page(Status::BadRequest, &err.to_string()),
    })?;
    let ranker = cfg
        .ranker(metric)
        .map_err(|err| error_page(Status::BadRequest, &err.to_string()))?;
    let db = db.shared().map_err(|err| {
        error!("{err:#}");
        error_page(Status::InternalServerError, LIST_SCHOOLS_DB_ERROR)
    })?;
    let schools = usecases::list_schools_by_distance(&db, &ranker, target).map_err(|err| match err {
        usecases::Error::Repo(err) => {
            error!("Failed to list schools: {err}");
            error_page(Status::InternalServerError, LIST_SCHOOLS_DB_ERROR)
        }
        err => error_page(Status::BadRequest, &err.to_string()),
    })?;
    Ok(view::school_list(&schools, ranker.metric()))
}

pub fn routes() -> Vec<Route> {
    routes![get_index, post_add_school, get_list_schools]
}
