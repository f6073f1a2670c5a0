use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod blogs;
pub mod categories;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod payments;
pub mod products;
pub mod users;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(products::router())
        .merge(categories::router())
        .merge(users::router())
        .merge(orders::router())
        .merge(blogs::router())
        .merge(payments::router())
}
