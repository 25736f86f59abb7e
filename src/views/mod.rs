pub mod home;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new().route("/", get(home::index))
}
