use reqwest::Method;
use serde_json::Value;

use super::{ApiClient, ApiError, MutationOutcome};
use crate::models::patient::{NewPatient, Patient, PatientAppointment};

/// Profile of the patient owning `token`.
pub async fn profile(api: &ApiClient, token: &str) -> Result<Patient, ApiError> {
    let body = api.get_json("patient.profile", &["patient", token]).await?;
    let patient = match body {
        Value::Object(mut map) if map.contains_key("patient") => map.remove("patient").unwrap_or(Value::Null),
        other => other,
    };
    if patient == Value::Null {
        return Err(ApiError::Decode("profile response has no patient".to_string()));
    }
    serde_json::from_value(patient).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn appointments(
    api: &ApiClient,
    patient_id: i64,
    token: &str,
) -> Result<Vec<PatientAppointment>, ApiError> {
    let id = patient_id.to_string();
    api.try_fetch_collection("patient.appointments", &["patient", id.as_str(), token], "appointments")
        .await
}

pub async fn signup(api: &ApiClient, patient: &NewPatient) -> MutationOutcome {
    let body = match serde_json::to_value(patient) {
        Ok(body) => body,
        Err(e) => {
            log::error!("patient.signup: cannot encode body: {e}");
            return MutationOutcome::failed("Sign up failed. Please try again later.");
        }
    };
    api.mutate("patient.signup", Method::POST, &["patient"], Some(body), "Sign up failed. Please try again later.")
        .await
}
