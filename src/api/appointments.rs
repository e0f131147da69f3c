use reqwest::Method;

use super::{ApiClient, ApiError, MutationOutcome, or_sentinel};
use crate::models::appointment::{Appointment, AppointmentFilter, BookingRequest};

/// The logged-in doctor's appointments for one day, optionally narrowed by patient name.
/// Errors are returned so the dashboard can tell a rejected token from an outage.
pub async fn for_doctor(
    api: &ApiClient,
    filter: &AppointmentFilter,
    token: &str,
) -> Result<Vec<Appointment>, ApiError> {
    let segments = [
        "appointments",
        filter.date.as_str(),
        or_sentinel(filter.patient_name.as_deref()),
        token,
    ];
    api.try_fetch_collection("appointments.for_doctor", &segments, "appointments")
        .await
}

pub async fn book(api: &ApiClient, booking: &BookingRequest, token: &str) -> MutationOutcome {
    let body = match serde_json::to_value(booking) {
        Ok(body) => body,
        Err(e) => {
            log::error!("appointments.book: cannot encode body: {e}");
            return MutationOutcome::failed("Could not book the appointment.");
        }
    };
    api.mutate(
        "appointments.book",
        Method::POST,
        &["appointments", token],
        Some(body),
        "Could not book the appointment.",
    )
    .await
}
