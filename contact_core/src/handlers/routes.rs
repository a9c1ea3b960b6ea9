//! Route table for the service

use crate::{
    handlers::{contact::create_contact_routes, health::create_health_routes},
    AppState,
};
use axum::Router;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(create_health_routes())
        .merge(create_contact_routes())
}
