use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};
use sdb_boundary::Error as JsonErrorResponse;

use super::{guards::*, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases, util::parse},
};

mod error;
mod schools;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   schools   --- //
        schools::post_add_school,
        schools::get_list_schools,
        schools::get_school,
        schools::get_count_schools,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
