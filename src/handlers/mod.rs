pub mod admin_dashboard;
pub mod auth_handlers;
pub mod doctor_dashboard;
pub mod landing;
pub mod patient_dashboard;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::router::{self, Event};
use crate::auth::session;
use crate::config::AppConfig;
use crate::errors::{AppError, see_other};
use crate::templates_structs::{NotFoundTemplate, PageContext};

/// Body of POST forms that carry nothing but the CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// Token of the current session. Guarded scopes only let token-bound roles
/// through with a token, so `None` here means the session changed under us.
pub(crate) fn session_token(sess: &Session) -> Option<String> {
    session::get(sess).token
}

/// Clear the session, leave the expiry notice and send the browser to the landing page.
pub(crate) fn force_logout(sess: &Session) -> Result<HttpResponse, AppError> {
    router::apply(sess, Event::TokenMissing)?;
    Ok(see_other(router::LANDING))
}

pub async fn not_found(
    config: web::Data<AppConfig>,
    sess: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&sess, &config.app_name);
    let body = askama::Template::render(&NotFoundTemplate { ctx })?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

