//! Builders wiring a user repository into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use users_api::domain::UsersService;
use users_api::domain::ports::UserRepository;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::memory::InMemoryUserRepository;
use users_api::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

fn state_for<R>(repository: R) -> HttpState
where
    R: UserRepository + 'static,
{
    let service = Arc::new(UsersService::new(Arc::new(repository)));
    HttpState::new(service.clone(), service)
}

/// Build the HTTP state, choosing PostgreSQL when a pool is configured.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(storage = "postgres", "user repository selected");
            state_for(DieselUserRepository::new(pool.clone()))
        }
        None => {
            info!(storage = "memory", "user repository selected");
            state_for(InMemoryUserRepository::new())
        }
    };
    web::Data::new(state)
}
