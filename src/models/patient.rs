use serde::{Deserialize, Serialize};

use crate::auth::validate;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Patient {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "mobileNo")]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// One row of the logged patient's own appointment list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientAppointment {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub patient_id: i64,
    pub patient_name: String,
    pub appointment_time: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time_only: Option<String>,
    pub status: i32,
}

impl PatientAppointment {
    pub fn date_label(&self) -> String {
        self.appointment_date
            .clone()
            .or_else(|| self.appointment_time.as_deref().map(|t| split_date_time(t).0.to_string()))
            .unwrap_or_default()
    }

    pub fn time_label(&self) -> String {
        self.appointment_time_only
            .as_deref()
            .map(|t| t.chars().take(5).collect())
            .or_else(|| self.appointment_time.as_deref().map(|t| split_date_time(t).1.to_string()))
            .unwrap_or_default()
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            0 => "Scheduled",
            1 => "Completed",
            _ => "Cancelled",
        }
    }
}

/// Split an ISO `YYYY-MM-DDTHH:MM[:SS]` timestamp into date and `HH:MM`.
pub fn split_date_time(value: &str) -> (&str, &str) {
    match value.split_once('T') {
        Some((date, time)) => (date, time.get(..5).unwrap_or(time)),
        None => (value, ""),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

/// Form data from the patient sign-up page.
#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub csrf_token: String,
}

impl SignupForm {
    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = [
            validate::validate_required(&self.name, "Name", 3, 100),
            validate::validate_email(&self.email),
            validate::validate_password(&self.password),
            validate::validate_phone(&self.phone),
        ]
        .into_iter()
        .flatten()
        .collect();
        if self.address.trim().chars().count() > 255 {
            errors.push("Address cannot exceed 255 characters".to_string());
        }
        if self.address.trim().is_empty() {
            errors.push("Address is required".to_string());
        }
        errors
    }

    pub fn to_new_patient(&self) -> NewPatient {
        NewPatient {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}
