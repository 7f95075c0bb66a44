//! HTTP routes

use crate::{
    handlers::contact::{handle_contact_preflight, handle_contact_submit},
    AppState,
};
use axum::{routing::post, Router};

pub const CONTACT_PATH: &str = "/api/contact";

pub fn create_routes() -> Router<AppState> {
    Router::new().route(
        CONTACT_PATH,
        post(handle_contact_submit).options(handle_contact_preflight),
    )
}
