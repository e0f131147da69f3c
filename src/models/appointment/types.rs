use serde::{Deserialize, Serialize};

use crate::models::patient::{Patient, split_date_time};

pub const STATUS_SCHEDULED: i32 = 0;

/// An appointment as listed on the doctor dashboard, with its patient nested.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default, alias = "date")]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub patient: Patient,
    #[serde(default)]
    pub status: i32,
}

impl Appointment {
    pub fn time_label(&self) -> &str {
        self.appointment_time
            .as_deref()
            .map(|t| split_date_time(t).1)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdRef {
    pub id: i64,
}

/// Body of the booking request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor: IdRef,
    pub patient: IdRef,
    pub appointment_time: String,
    pub status: i32,
}

impl BookingRequest {
    /// `date` is `YYYY-MM-DD`; `slot` is a doctor slot like `09:00-10:00`, its start is booked.
    pub fn new(doctor_id: i64, patient_id: i64, date: &str, slot: &str) -> Option<Self> {
        let day = chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        let start = slot.split('-').next()?.trim();
        let time = chrono::NaiveTime::parse_from_str(start, "%H:%M").ok()?;
        Some(Self {
            doctor: IdRef { id: doctor_id },
            patient: IdRef { id: patient_id },
            appointment_time: day.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
            status: STATUS_SCHEDULED,
        })
    }
}

/// Booking form posted from the booking page.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: String,
    pub slot: String,
    pub csrf_token: String,
}
