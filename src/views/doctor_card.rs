use crate::auth::session::Role;
use crate::models::doctor::Doctor;

pub const NO_DOCTORS: &str = "No doctors found.";
pub const NO_FILTER_MATCH: &str = "No doctors found with the given filters.";

/// The one action a card offers, decided by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Admin: confirm, then delete through the backend.
    Delete { confirm: String },
    /// Guest patient: booking only asks to log in.
    PromptLogin,
    /// Logged-in patient: opens the booking page.
    Book,
}

#[derive(Debug, Clone)]
pub struct DoctorCard {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub times: String,
    pub action: Option<CardAction>,
}

impl DoctorCard {
    pub fn is_delete(&self) -> bool {
        matches!(self.action, Some(CardAction::Delete { .. }))
    }

    pub fn is_book(&self) -> bool {
        matches!(self.action, Some(CardAction::PromptLogin | CardAction::Book))
    }

    pub fn confirm_text(&self) -> &str {
        match &self.action {
            Some(CardAction::Delete { confirm }) => confirm,
            _ => "",
        }
    }

    /// Where the action's form posts to.
    pub fn action_url(&self) -> String {
        match self.action {
            Some(CardAction::Delete { .. }) => format!("/admin/doctors/{}/delete", self.id),
            Some(CardAction::PromptLogin | CardAction::Book) => format!("/patient/doctors/{}/book", self.id),
            None => String::new(),
        }
    }
}

pub fn card_for(doctor: &Doctor, role: Role) -> DoctorCard {
    let action = match role {
        Role::Admin => Some(CardAction::Delete {
            confirm: format!("Are you sure you want to delete Dr. {}?", doctor.name),
        }),
        Role::Patient => Some(CardAction::PromptLogin),
        Role::LoggedPatient => Some(CardAction::Book),
        Role::Doctor => None,
    };
    let times = if doctor.available_times.is_empty() {
        "No times available".to_string()
    } else {
        doctor.available_times.join(", ")
    };
    DoctorCard {
        id: doctor.id,
        name: doctor.name.clone(),
        specialty: doctor.specialty.clone(),
        email: doctor.email.clone(),
        times,
        action,
    }
}
