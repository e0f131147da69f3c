//! Role-based dashboards for the hospital backend: admin, doctor and patient
//! pages rendered on the server, with all data coming from the REST API.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod views;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, middleware::from_fn, web};

use crate::auth::middleware::{require_admin, require_doctor, require_logged_patient, require_patient};
use crate::auth::router::LANDING_PATHS;

/// Cookie-backed session holding role, token, flash and CSRF token.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Full route table. The landing page and login forms are public; every
/// dashboard sits behind its area guard.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"));

    for path in LANDING_PATHS {
        cfg.route(path, web::get().to(handlers::landing::index));
    }

    cfg
        // Public auth routes
        .route("/role", web::post().to(handlers::auth_handlers::select_role))
        .route("/login/admin", web::get().to(handlers::auth_handlers::admin_login_page))
        .route("/login/admin", web::post().to(handlers::auth_handlers::admin_login_submit))
        .route("/login/doctor", web::get().to(handlers::auth_handlers::doctor_login_page))
        .route("/login/doctor", web::post().to(handlers::auth_handlers::doctor_login_submit))
        .route("/login/patient", web::get().to(handlers::auth_handlers::patient_login_page))
        .route("/login/patient", web::post().to(handlers::auth_handlers::patient_login_submit))
        .route("/signup", web::get().to(handlers::auth_handlers::signup_page))
        .route("/signup", web::post().to(handlers::auth_handlers::signup_submit))
        .route("/logout", web::post().to(handlers::auth_handlers::logout))
        // Before the /patient scope, which would otherwise swallow it
        .route("/patient/logout", web::post().to(handlers::auth_handlers::patient_logout))
        // Admin area
        .service(
            web::scope("/admin")
                .wrap(from_fn(require_admin))
                .route("/dashboard", web::get().to(handlers::admin_dashboard::dashboard))
                // /doctors/new BEFORE /doctors/{id}
                .route("/doctors/new", web::get().to(handlers::admin_dashboard::new_form))
                .route("/doctors", web::post().to(handlers::admin_dashboard::create))
                .route("/doctors/{id}/delete", web::post().to(handlers::admin_dashboard::delete)),
        )
        // Doctor area
        .service(
            web::scope("/doctor")
                .wrap(from_fn(require_doctor))
                .route("/dashboard", web::get().to(handlers::doctor_dashboard::dashboard)),
        )
        // Patient area: browsing is open to guests, the account pages need a login
        .service(
            web::scope("/patient")
                .wrap(from_fn(require_patient))
                .route("/dashboard", web::get().to(handlers::patient_dashboard::dashboard))
                .route("/doctors/{id}/book", web::post().to(handlers::patient_dashboard::book))
                .service(
                    web::resource("/appointments")
                        .wrap(from_fn(require_logged_patient))
                        .route(web::get().to(handlers::patient_dashboard::appointments))
                        .route(web::post().to(handlers::patient_dashboard::submit_booking)),
                ),
        );
}
