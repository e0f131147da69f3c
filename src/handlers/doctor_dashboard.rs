use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::{force_logout, session_token};
use crate::models::appointment::{self, AppointmentQuery};
use crate::templates_structs::{DoctorDashboardTemplate, PageContext};
use crate::views::appointment_rows;

/// The doctor's appointments for one day, optionally narrowed to a patient name.
pub async fn dashboard(
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    sess: Session,
    query: web::Query<AppointmentQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(token) = session_token(&sess) else {
        return force_logout(&sess);
    };

    let today = appointment::today();
    let filter = query.resolve(&today);

    let table = match api::appointments::for_doctor(&api, &filter, &token).await {
        Ok(list) => appointment_rows::rows_for(list),
        Err(e) if e.is_unauthorized() => {
            log::info!("doctor token rejected by backend");
            return force_logout(&sess);
        }
        Err(e) => {
            log::error!("doctor.appointments: {e}");
            appointment_rows::load_failed()
        }
    };

    let ctx = PageContext::build(&sess, &config.app_name);
    render(DoctorDashboardTemplate { ctx, filter, today, table })
}
