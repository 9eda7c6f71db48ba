use axum::{routing::post, Router};

use crate::handlers::{contact_handlers, method_not_allowed, preflight};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/contact-form",
        post(contact_handlers::submit_contact_form)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}
