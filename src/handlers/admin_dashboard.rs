use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{self, ApiClient};
use crate::auth::csrf;
use crate::auth::router::{self, Event};
use crate::auth::session::{self, Role};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::{CsrfOnly, session_token};
use crate::models::doctor::{DoctorFilter, DoctorForm};
use crate::templates_structs::{AdminDashboardTemplate, DoctorFormTemplate, PageContext};
use crate::views::doctor_card::{self, NO_DOCTORS, NO_FILTER_MATCH};
use crate::views::filters::{specialty_options, time_options};
use crate::views::listing;

const DASHBOARD: &str = "/admin/dashboard";
const AUTH_FAILED: &str = "Authorization failed. Please login as admin.";
const DOCTOR_ADDED: &str = "Doctor added successfully!";
const DOCTOR_DELETED: &str = "Doctor deleted successfully.";

/// Doctor listing with delete actions. Any submitted filter, even blank,
/// switches from the plain list to the search endpoint.
pub async fn dashboard(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    query: web::Query<DoctorFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner();
    let cards = if filter.is_submitted() {
        listing::load(
            api::doctors::search(&api, &filter),
            |d| doctor_card::card_for(&d, Role::Admin),
            NO_FILTER_MATCH,
        )
        .await
    } else {
        listing::load(api::doctors::list(&api), |d| doctor_card::card_for(&d, Role::Admin), NO_DOCTORS).await
    };

    let ctx = PageContext::build(&sess, &config.app_name);
    render(AdminDashboardTemplate {
        ctx,
        time_options: time_options(filter.time_value()),
        specialty_options: specialty_options(filter.specialty_value(), "All specialties"),
        filter,
        cards,
    })
}

pub async fn new_form(config: web::Data<AppConfig>, sess: Session) -> Result<HttpResponse, AppError> {
    render_form(&sess, &config, &DoctorForm::default(), Vec::new())
}

pub async fn create(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    form: web::Form<DoctorForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;

    let Some(token) = session_token(&sess) else {
        return authorization_failed(&sess);
    };

    let errors = form.validate();
    if !errors.is_empty() {
        return render_form(&sess, &config, &form, errors);
    }

    let outcome = api::doctors::create(&api, &form.to_new_doctor(), &token).await;
    if outcome.success {
        log::info!("doctor '{}' added", form.name.trim());
        session::set_flash(&sess, DOCTOR_ADDED);
        return Ok(see_other(DASHBOARD));
    }
    render_form(&sess, &config, &form, vec![format!("Failed to add doctor: {}", outcome.message)])
}

/// Delete, then show the dashboard again; the re-fetch drops the card.
pub async fn delete(
    api: web::Data<ApiClient>,
    sess: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;
    let id = path.into_inner();

    let Some(token) = session_token(&sess) else {
        return authorization_failed(&sess);
    };

    let outcome = api::doctors::delete(&api, id, &token).await;
    if outcome.success {
        log::info!("doctor {id} deleted");
        session::set_flash(&sess, DOCTOR_DELETED);
    } else {
        session::set_flash(&sess, &format!("Failed to delete doctor: {}", outcome.message));
    }
    Ok(see_other(DASHBOARD))
}

fn render_form(
    sess: &Session,
    config: &AppConfig,
    form: &DoctorForm,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(sess, &config.app_name);
    render(DoctorFormTemplate {
        ctx,
        errors,
        name: form.name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        time_slot: form.time_slot.clone(),
        specialty_options: specialty_options(form.specialty.trim(), "Select specialty"),
    })
}

fn authorization_failed(sess: &Session) -> Result<HttpResponse, AppError> {
    router::apply(sess, Event::LoggedOut)?;
    session::set_flash(sess, AUTH_FAILED);
    Ok(see_other(router::LANDING))
}
