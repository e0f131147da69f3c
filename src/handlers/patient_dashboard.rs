use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{self, ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::session::{self, Role};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::{CsrfOnly, force_logout, session_token};
use crate::models::appointment::{self, BookingForm, BookingRequest};
use crate::models::doctor::DoctorFilter;
use crate::models::patient::Patient;
use crate::templates_structs::{BookingTemplate, PageContext, PatientAppointmentsTemplate, PatientDashboardTemplate};
use crate::views::doctor_card::{self, NO_DOCTORS, NO_FILTER_MATCH};
use crate::views::filters::{specialty_options, time_options};
use crate::views::listing::{self, ListView};

const DASHBOARD: &str = "/patient/dashboard";
const APPOINTMENTS: &str = "/patient/appointments";
const LOGIN_TO_BOOK: &str = "Please login to book an appointment.";
const BOOKING_UNAVAILABLE: &str = "Could not load booking details.";
const INVALID_SLOT: &str = "Please pick a valid date and time slot.";
const NO_OWN_APPOINTMENTS: &str = "You have no appointments yet.";
const OWN_APPOINTMENTS_ERROR: &str = "Error loading appointments. Try again later.";

/// Doctor listing for guests and logged-in patients; the card action follows the role.
pub async fn dashboard(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    query: web::Query<DoctorFilter>,
) -> Result<HttpResponse, AppError> {
    let role = session::get(&sess).role.unwrap_or(Role::Patient);
    let filter = query.into_inner();
    let cards = if filter.is_submitted() {
        listing::load(
            api::doctors::search(&api, &filter),
            |d| doctor_card::card_for(&d, role),
            NO_FILTER_MATCH,
        )
        .await
    } else {
        listing::load(api::doctors::list(&api), |d| doctor_card::card_for(&d, role), NO_DOCTORS).await
    };

    let ctx = PageContext::build(&sess, &config.app_name);
    render(PatientDashboardTemplate {
        ctx,
        time_options: time_options(filter.time_value()),
        specialty_options: specialty_options(filter.specialty_value(), "All specialties"),
        filter,
        cards,
    })
}

/// "Book Now" on a card. Guests are asked to log in without any backend call;
/// logged-in patients get the booking page with their profile filled in.
pub async fn book(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;
    let doctor_id = path.into_inner();

    let state = session::get(&sess);
    if state.role != Some(Role::LoggedPatient) {
        session::set_flash(&sess, LOGIN_TO_BOOK);
        return Ok(see_other(DASHBOARD));
    }
    let Some(token) = state.token else {
        return force_logout(&sess);
    };

    let patient = match load_profile(&api, &token).await {
        Ok(patient) => patient,
        Err(e) if e.is_unauthorized() => return force_logout(&sess),
        Err(_) => {
            session::set_flash(&sess, BOOKING_UNAVAILABLE);
            return Ok(see_other(DASHBOARD));
        }
    };

    let Some(doctor) = api::doctors::list(&api)
        .await
        .into_iter()
        .find(|d| d.id == doctor_id)
    else {
        log::warn!("booking: doctor {doctor_id} not in listing");
        session::set_flash(&sess, BOOKING_UNAVAILABLE);
        return Ok(see_other(DASHBOARD));
    };

    let ctx = PageContext::build(&sess, &config.app_name);
    render(BookingTemplate { ctx, doctor, patient, today: appointment::today() })
}

/// Confirm a booking from the booking page.
pub async fn submit_booking(
    api: web::Data<ApiClient>,
    sess: Session,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&sess, &form.csrf_token)?;

    let Some(token) = session_token(&sess) else {
        return force_logout(&sess);
    };

    let Some(request) = BookingRequest::new(form.doctor_id, form.patient_id, &form.date, &form.slot) else {
        session::set_flash(&sess, INVALID_SLOT);
        return Ok(see_other(DASHBOARD));
    };

    let outcome = api::appointments::book(&api, &request, &token).await;
    session::set_flash(&sess, &outcome.message);
    if outcome.success {
        log::info!("appointment booked with doctor {} at {}", form.doctor_id, request.appointment_time);
        Ok(see_other(APPOINTMENTS))
    } else {
        Ok(see_other(DASHBOARD))
    }
}

/// The logged-in patient's own appointments.
pub async fn appointments(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
) -> Result<HttpResponse, AppError> {
    let Some(token) = session_token(&sess) else {
        return force_logout(&sess);
    };

    let loaded = match load_profile(&api, &token).await {
        Ok(patient) => api::patients::appointments(&api, patient.id, &token)
            .await
            .map(|list| (patient.name, list)),
        Err(e) => Err(e),
    };

    let (patient_name, appointments) = match loaded {
        Ok((name, list)) => (name, ListView::from_items(list, NO_OWN_APPOINTMENTS)),
        Err(e) if e.is_unauthorized() => return force_logout(&sess),
        Err(e) => {
            log::error!("patient.appointments: {e}");
            (String::new(), ListView::failed(OWN_APPOINTMENTS_ERROR))
        }
    };

    let ctx = PageContext::build(&sess, &config.app_name);
    render(PatientAppointmentsTemplate { ctx, patient_name, appointments })
}

async fn load_profile(api: &ApiClient, token: &str) -> Result<Patient, ApiError> {
    let profile = api::patients::profile(api, token).await;
    if let Err(e) = &profile {
        log::error!("patient.profile: {e}");
    }
    profile
}
