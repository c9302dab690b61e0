//! The 404 page returned for unknown routes.

use axum::{
    http::StatusCode,
    response::Response,
};

use crate::{html::error_view, shared_templates::render};

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Sorry, this page does not exist.",
            "Check the address for typos, or head back to the dashboard.",
        ),
    )
}
