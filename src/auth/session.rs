use actix_session::Session;

use crate::errors::AppError;

const ROLE_KEY: &str = "userRole";
const TOKEN_KEY: &str = "token";
const FLASH_KEY: &str = "flash";

/// The finite set of roles a browser session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    /// Guest patient: browses doctors, cannot book.
    Patient,
    LoggedPatient,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            "loggedPatient" => Some(Role::LoggedPatient),
            _ => None,
        }
    }

    /// Roles that are only valid together with a backend token.
    pub fn requires_token(self) -> bool {
        match self {
            Role::Admin | Role::Doctor | Role::LoggedPatient => true,
            Role::Patient => false,
        }
    }
}

/// Snapshot of the session pair `(userRole, token)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub role: Option<Role>,
    pub token: Option<String>,
}

impl SessionState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.token.is_none()
    }
}

/// Read the current role and token. Unknown roles and blank tokens read as absent.
pub fn get(session: &Session) -> SessionState {
    let role = session
        .get::<String>(ROLE_KEY)
        .unwrap_or(None)
        .and_then(|r| Role::parse(&r));
    let token = session
        .get::<String>(TOKEN_KEY)
        .unwrap_or(None)
        .filter(|t| !t.trim().is_empty());
    SessionState { role, token }
}

/// Store a role and, when given, its token. A `None` token removes any previous one.
pub fn set(session: &Session, role: Role, token: Option<&str>) -> Result<(), AppError> {
    session.insert(ROLE_KEY, role.as_str())?;
    match token {
        Some(t) if !t.trim().is_empty() => session.insert(TOKEN_KEY, t)?,
        _ => {
            session.remove(TOKEN_KEY);
        }
    }
    Ok(())
}

/// Forget role and token. Pending flash messages are kept.
pub fn clear(session: &Session) {
    session.remove(ROLE_KEY);
    session.remove(TOKEN_KEY);
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
