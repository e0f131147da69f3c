use askama::Template;

use super::PageContext;
use crate::models::doctor::{Doctor, DoctorFilter};
use crate::models::patient::{Patient, PatientAppointment};
use crate::views::doctor_card::DoctorCard;
use crate::views::filters::SelectOption;
use crate::views::listing::ListView;

#[derive(Template)]
#[template(path = "patient/dashboard.html")]
pub struct PatientDashboardTemplate {
    pub ctx: PageContext,
    pub filter: DoctorFilter,
    pub cards: ListView<DoctorCard>,
    pub time_options: Vec<SelectOption>,
    pub specialty_options: Vec<SelectOption>,
}

/// Stand-in for the booking overlay: doctor and patient side by side, pick a day and slot.
#[derive(Template)]
#[template(path = "patient/booking.html")]
pub struct BookingTemplate {
    pub ctx: PageContext,
    pub doctor: Doctor,
    pub patient: Patient,
    pub today: String,
}

#[derive(Template)]
#[template(path = "patient/appointments.html")]
pub struct PatientAppointmentsTemplate {
    pub ctx: PageContext,
    pub patient_name: String,
    pub appointments: ListView<PatientAppointment>,
}
