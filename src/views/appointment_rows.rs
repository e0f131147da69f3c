use crate::models::appointment::Appointment;
use crate::views::listing::ListView;

pub const NO_APPOINTMENTS: &str = "No Appointments found for today.";
pub const LOAD_ERROR: &str = "Error loading appointments. Try again later.";

/// One table row: the appointment's patient plus the appointment id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRow {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub time: String,
}

pub fn row_for(appointment: Appointment) -> PatientRow {
    let time = appointment.time_label().to_string();
    let patient = appointment.patient;
    PatientRow {
        appointment_id: appointment.id,
        patient_id: patient.id,
        name: patient.name,
        phone: patient.phone,
        email: patient.email,
        time,
    }
}

pub fn rows_for(appointments: Vec<Appointment>) -> ListView<PatientRow> {
    ListView::from_items(appointments.into_iter().map(row_for).collect(), NO_APPOINTMENTS)
}

pub fn load_failed() -> ListView<PatientRow> {
    ListView::failed(LOAD_ERROR)
}
