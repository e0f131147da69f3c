use crate::auth::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    Link,
    /// Rendered as a small form so the action carries the CSRF token.
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavAction {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub kind: NavKind,
}

impl NavAction {
    const fn link(id: &'static str, label: &'static str, href: &'static str) -> Self {
        Self { id, label, href, kind: NavKind::Link }
    }

    const fn post(id: &'static str, label: &'static str, href: &'static str) -> Self {
        Self { id, label, href, kind: NavKind::Post }
    }

    pub fn is_post(&self) -> bool {
        self.kind == NavKind::Post
    }
}

/// Header navigation for a role. `None` (landing page) shows only the logo.
pub fn nav_for(role: Option<Role>) -> Vec<NavAction> {
    let Some(role) = role else {
        return Vec::new();
    };
    match role {
        Role::Admin => vec![
            NavAction::link("addDocBtn", "Add Doctor", "/admin/doctors/new"),
            NavAction::post("logoutBtn", "Logout", "/logout"),
        ],
        Role::Doctor => vec![
            NavAction::link("doctorHomeBtn", "Home", "/doctor/dashboard"),
            NavAction::post("logoutBtn", "Logout", "/logout"),
        ],
        Role::Patient => vec![
            NavAction::link("patientLogin", "Login", "/login/patient"),
            NavAction::link("patientSignup", "Sign Up", "/signup"),
        ],
        Role::LoggedPatient => vec![
            NavAction::link("patientHome", "Home", "/patient/dashboard"),
            NavAction::link("patientAppointments", "Appointments", "/patient/appointments"),
            NavAction::post("logoutPatientBtn", "Logout", "/patient/logout"),
        ],
    }
}
