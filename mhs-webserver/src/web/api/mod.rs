use std::{fmt::Display, result};

use mhs_boundary::{self as json, Error as JsonErrorResponse};
use rocket::{
    self, delete, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route,
};

mod activities;
mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        activities::get_activities,
        activities::post_signup,
        activities::delete_unregister,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        detail: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
