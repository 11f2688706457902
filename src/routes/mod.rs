pub mod attempts;
pub mod auth;
pub mod clients;
pub mod mailings;
pub mod messages;
pub mod users;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route(
            "/api/v1/auth/email-confirm/{token}",
            get(auth::email_confirm),
        )
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/new-password", post(auth::new_password))
        // Clients
        .route("/api/v1/clients", get(clients::list).post(clients::create))
        .route(
            "/api/v1/clients/{id}",
            get(clients::get)
                .put(clients::update)
                .delete(clients::delete),
        )
        // Messages
        .route(
            "/api/v1/messages",
            get(messages::list).post(messages::create),
        )
        .route(
            "/api/v1/messages/{id}",
            get(messages::get)
                .put(messages::update)
                .delete(messages::delete),
        )
        // Mailings
        .route(
            "/api/v1/mailings",
            get(mailings::list).post(mailings::create),
        )
        .route(
            "/api/v1/mailings/{id}",
            get(mailings::get)
                .put(mailings::update)
                .delete(mailings::delete),
        )
        .route("/api/v1/mailings/{id}/start", post(mailings::start))
        .route("/api/v1/mailings/{id}/complete", post(mailings::complete))
        .route(
            "/api/v1/mailings/{id}/recipients",
            get(mailings::list_recipients),
        )
        .route(
            "/api/v1/mailings/{id}/recipients/{client_id}",
            put(mailings::add_recipient).delete(mailings::remove_recipient),
        )
        // Attempts
        .route(
            "/api/v1/mailings/{id}/attempts",
            get(attempts::list).post(attempts::append),
        )
        // Users
        .route("/api/v1/users", get(users::list))
        .route(
            "/api/v1/users/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
}
