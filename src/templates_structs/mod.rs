// Template context structures for Askama templates, organized by dashboard.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{self, Role};
use crate::views::header::{NavAction, nav_for};

/// Common context shared by every page.
/// Templates access these as `ctx.app_name`, `ctx.nav`, etc.
pub struct PageContext {
    pub app_name: String,
    pub role: Option<Role>,
    pub nav: Vec<NavAction>,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    /// Context for the current session: header navigation follows the stored role.
    pub fn build(sess: &Session, app_name: &str) -> Self {
        let role = session::get(sess).role;
        Self::for_role(sess, app_name, role)
    }

    /// Context with an explicit role; the landing page passes `None` after resetting the session.
    pub fn for_role(sess: &Session, app_name: &str, role: Option<Role>) -> Self {
        Self {
            app_name: app_name.to_string(),
            role,
            nav: nav_for(role),
            flash: session::take_flash(sess),
            csrf_token: csrf::get_or_create_token(sess),
        }
    }
}

mod common;
mod dashboard;
mod patient;

pub use self::common::{LandingTemplate, LoginTemplate, NotFoundTemplate, SignupTemplate};
pub use self::dashboard::{AdminDashboardTemplate, DoctorDashboardTemplate, DoctorFormTemplate};
pub use self::patient::{BookingTemplate, PatientAppointmentsTemplate, PatientDashboardTemplate};
