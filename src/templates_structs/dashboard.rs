use askama::Template;

use super::PageContext;
use crate::models::appointment::AppointmentFilter;
use crate::models::doctor::DoctorFilter;
use crate::views::appointment_rows::PatientRow;
use crate::views::doctor_card::DoctorCard;
use crate::views::filters::SelectOption;
use crate::views::listing::ListView;

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub filter: DoctorFilter,
    pub cards: ListView<DoctorCard>,
    pub time_options: Vec<SelectOption>,
    pub specialty_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "admin/doctor_form.html")]
pub struct DoctorFormTemplate {
    pub ctx: PageContext,
    pub errors: Vec<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub time_slot: String,
    pub specialty_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "doctor/dashboard.html")]
pub struct DoctorDashboardTemplate {
    pub ctx: PageContext,
    pub filter: AppointmentFilter,
    pub today: String,
    pub table: ListView<PatientRow>,
}
