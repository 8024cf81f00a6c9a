//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee façade router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v1/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search/{search_string}", get(handler::search))
        .route("/highestSalary", get(handler::highest_salary))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(handler::top_ten_earner_names),
        )
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
