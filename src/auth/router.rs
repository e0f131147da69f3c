//! Role router: which pages a session may see and where it gets sent otherwise.
//!
//! All session transitions (login, role pick, logout, forced logout, landing
//! reset) go through [`apply`], which is the only writer of role state besides
//! the session module itself.

use actix_session::Session;

use crate::auth::session::{self, Role, SessionState};
use crate::errors::AppError;

pub const LANDING: &str = "/";

pub const SESSION_EXPIRED: &str = "Session expired or invalid login. Please log in again.";

/// What the browser is currently allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Anonymous,
    Admin,
    Doctor,
    PatientGuest,
    PatientLogged,
}

impl ViewState {
    /// Derive the view state from a stored session. A token-bound role without
    /// a token is not a valid state and collapses to `Anonymous`.
    pub fn of(state: &SessionState) -> ViewState {
        match state.role {
            None => ViewState::Anonymous,
            Some(role) if role.requires_token() && state.token.is_none() => ViewState::Anonymous,
            Some(Role::Admin) => ViewState::Admin,
            Some(Role::Doctor) => ViewState::Doctor,
            Some(Role::Patient) => ViewState::PatientGuest,
            Some(Role::LoggedPatient) => ViewState::PatientLogged,
        }
    }

    pub fn role(self) -> Option<Role> {
        match self {
            ViewState::Anonymous => None,
            ViewState::Admin => Some(Role::Admin),
            ViewState::Doctor => Some(Role::Doctor),
            ViewState::PatientGuest => Some(Role::Patient),
            ViewState::PatientLogged => Some(Role::LoggedPatient),
        }
    }
}

/// Events that move a session between view states.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Backend answered 2xx with a token.
    LoggedIn { role: Role, token: &'a str },
    PickedPatient,
    PatientLoggedOut,
    LoggedOut,
    LandingVisited,
    TokenMissing,
}

/// Pure transition function of the router state machine.
pub fn next_state(current: ViewState, event: Event<'_>) -> ViewState {
    match event {
        Event::LoggedIn { role, token } if !token.trim().is_empty() => match role {
            Role::Admin => ViewState::Admin,
            Role::Doctor => ViewState::Doctor,
            Role::LoggedPatient | Role::Patient => ViewState::PatientLogged,
        },
        Event::LoggedIn { .. } => current,
        Event::PickedPatient => match current {
            ViewState::Anonymous => ViewState::PatientGuest,
            other => other,
        },
        Event::PatientLoggedOut => ViewState::PatientGuest,
        Event::LoggedOut | Event::LandingVisited | Event::TokenMissing => ViewState::Anonymous,
    }
}

/// Apply an event to the stored session and return the resulting view state.
pub fn apply(sess: &Session, event: Event<'_>) -> Result<ViewState, AppError> {
    let current = ViewState::of(&session::get(sess));
    let next = next_state(current, event);

    match (event, next) {
        (_, ViewState::Anonymous) => {
            session::clear(sess);
            if let Event::TokenMissing = event {
                session::set_flash(sess, SESSION_EXPIRED);
            }
        }
        (Event::LoggedIn { token, .. }, state) if !token.trim().is_empty() => {
            if let Some(role) = state.role() {
                session::set(sess, role, Some(token))?;
            }
        }
        (Event::PickedPatient | Event::PatientLoggedOut, ViewState::PatientGuest) => {
            session::set(sess, Role::Patient, None)?;
        }
        _ => {}
    }
    Ok(next)
}

/// Paths serving the landing page, which always resets the session.
pub const LANDING_PATHS: [&str; 2] = [LANDING, "/index.html"];

pub fn home_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Doctor => "/doctor/dashboard",
        Role::Patient | Role::LoggedPatient => "/patient/dashboard",
    }
}

/// Groups of pages sharing one access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Admin,
    Doctor,
    /// Doctor browsing, open to guests and logged-in patients.
    Patient,
    /// Pages that need a patient token (own appointments, booking).
    PatientAccount,
}

impl Area {
    pub fn admits(self, role: Role) -> bool {
        match self {
            Area::Admin => role == Role::Admin,
            Area::Doctor => role == Role::Doctor,
            Area::Patient => matches!(role, Role::Patient | Role::LoggedPatient),
            Area::PatientAccount => role == Role::LoggedPatient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(ViewState),
    /// Token-bound role without a token: clear, notify, go to landing.
    ForceLogout,
    Redirect(&'static str),
}

pub fn authorize(state: &SessionState, area: Area) -> Access {
    let Some(role) = state.role else {
        return Access::Redirect(LANDING);
    };
    if role.requires_token() && state.token.is_none() {
        return Access::ForceLogout;
    }
    if !area.admits(role) {
        return Access::Redirect(home_route(role));
    }
    Access::Granted(ViewState::of(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(role: Option<Role>, token: Option<&str>) -> SessionState {
        SessionState { role, token: token.map(String::from) }
    }

    #[test]
    fn login_moves_anonymous_to_role() {
        let admin = next_state(ViewState::Anonymous, Event::LoggedIn { role: Role::Admin, token: "t" });
        assert_eq!(admin, ViewState::Admin);
        let doctor = next_state(ViewState::Anonymous, Event::LoggedIn { role: Role::Doctor, token: "t" });
        assert_eq!(doctor, ViewState::Doctor);
    }

    #[test]
    fn login_without_token_stays_put() {
        let s = next_state(ViewState::Anonymous, Event::LoggedIn { role: Role::Admin, token: "" });
        assert_eq!(s, ViewState::Anonymous);
    }

    #[test]
    fn patient_flow() {
        let guest = next_state(ViewState::Anonymous, Event::PickedPatient);
        assert_eq!(guest, ViewState::PatientGuest);
        let logged = next_state(guest, Event::LoggedIn { role: Role::LoggedPatient, token: "p" });
        assert_eq!(logged, ViewState::PatientLogged);
        assert_eq!(next_state(logged, Event::PatientLoggedOut), ViewState::PatientGuest);
    }

    #[test]
    fn resets_always_end_anonymous() {
        for from in [ViewState::Admin, ViewState::Doctor, ViewState::PatientGuest, ViewState::PatientLogged] {
            assert_eq!(next_state(from, Event::LandingVisited), ViewState::Anonymous);
            assert_eq!(next_state(from, Event::LoggedOut), ViewState::Anonymous);
            assert_eq!(next_state(from, Event::TokenMissing), ViewState::Anonymous);
        }
    }

    #[test]
    fn view_state_ignores_tokenless_admin() {
        assert_eq!(ViewState::of(&state(Some(Role::Admin), None)), ViewState::Anonymous);
        assert_eq!(ViewState::of(&state(Some(Role::Patient), None)), ViewState::PatientGuest);
    }

    #[test]
    fn authorize_without_role_goes_to_landing() {
        assert_eq!(authorize(&state(None, None), Area::Admin), Access::Redirect(LANDING));
    }

    #[test]
    fn authorize_forces_logout_for_missing_token() {
        for role in [Role::Admin, Role::Doctor, Role::LoggedPatient] {
            for area in [Area::Admin, Area::Doctor, Area::Patient, Area::PatientAccount] {
                assert_eq!(authorize(&state(Some(role), None), area), Access::ForceLogout);
            }
        }
    }

    #[test]
    fn authorize_sends_wrong_role_home() {
        let doctor = state(Some(Role::Doctor), Some("t"));
        assert_eq!(authorize(&doctor, Area::Admin), Access::Redirect("/doctor/dashboard"));

        let guest = state(Some(Role::Patient), None);
        assert_eq!(authorize(&guest, Area::Patient), Access::Granted(ViewState::PatientGuest));
        assert_eq!(authorize(&guest, Area::PatientAccount), Access::Redirect("/patient/dashboard"));
    }
}
