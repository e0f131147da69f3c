use reqwest::Method;

use super::{ApiClient, MutationOutcome, or_sentinel};
use crate::models::doctor::{Doctor, DoctorFilter, NewDoctor};

/// All doctors. Empty on any failure.
pub async fn list(api: &ApiClient) -> Vec<Doctor> {
    api.fetch_collection("doctor.list", &["doctor"], "doctors").await
}

/// Doctors matching name, time of day and specialty; blank filters are sent as `null`.
pub async fn search(api: &ApiClient, filter: &DoctorFilter) -> Vec<Doctor> {
    let segments = [
        "doctor",
        "search",
        or_sentinel(filter.name()),
        or_sentinel(filter.time()),
        or_sentinel(filter.specialty()),
    ];
    api.fetch_collection("doctor.search", &segments, "doctors").await
}

pub async fn create(api: &ApiClient, doctor: &NewDoctor, token: &str) -> MutationOutcome {
    let body = match serde_json::to_value(doctor) {
        Ok(body) => body,
        Err(e) => {
            log::error!("doctor.create: cannot encode body: {e}");
            return MutationOutcome::failed("Error saving doctor.");
        }
    };
    api.mutate("doctor.create", Method::POST, &["doctor", token], Some(body), "Error saving doctor.")
        .await
}

pub async fn delete(api: &ApiClient, id: i64, token: &str) -> MutationOutcome {
    let id = id.to_string();
    api.mutate("doctor.delete", Method::DELETE, &["doctor", id.as_str(), token], None, "Network error occurred.")
        .await
}
