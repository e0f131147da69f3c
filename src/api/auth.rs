use serde_json::json;

use super::{ApiClient, ApiError};

pub async fn admin_login(api: &ApiClient, username: &str, password: &str) -> Result<String, ApiError> {
    api.login("admin.login", &["admin"], json!({ "username": username, "password": password }))
        .await
}

pub async fn doctor_login(api: &ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    api.login("doctor.login", &["doctor", "login"], json!({ "email": email, "password": password }))
        .await
}

pub async fn patient_login(api: &ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    api.login("patient.login", &["patient", "login"], json!({ "email": email, "password": password }))
        .await
}
