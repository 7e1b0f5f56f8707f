use rocket::{get, response::Redirect, routes, Route};

// The static front-end is served by someone else.
const INDEX_HTML: &str = "/static/index.html";

#[get("/")]
pub fn get_index() -> Redirect {
    Redirect::temporary(INDEX_HTML)
}

pub fn routes() -> Vec<Route> {
    routes![get_index]
}
