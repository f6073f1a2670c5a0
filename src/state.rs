use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn},
    stripe::StripeClient,
};

/// Shared handles owned by the router for the lifetime of the process.
/// `main` closes the storage handles after the server drains.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub config: AppConfig,
    pub stripe: StripeClient,
}
