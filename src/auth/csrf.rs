use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const CSRF_KEY: &str = "csrf_token";

/// Get the form token from the session, minting one on first use.
pub fn get_or_create_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(CSRF_KEY) {
        return token;
    }
    let token = generate_token();
    if let Err(e) = session.insert(CSRF_KEY, &token) {
        log::warn!("Could not store CSRF token: {e}");
    }
    token
}

/// Every POST form carries the session's token back.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session
        .get::<String>(CSRF_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    if stored.is_empty() || !constant_time_eq(&stored, submitted) {
        return Err(AppError::Csrf);
    }
    Ok(())
}

fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_session::SessionExt;
    use actix_web::test::TestRequest;

    #[test]
    fn token_is_stable_within_a_session() {
        let session = TestRequest::default().to_http_request().get_session();
        let first = get_or_create_token(&session);
        assert_eq!(first.len(), 64);
        assert_eq!(get_or_create_token(&session), first);
        assert!(validate_csrf(&session, &first).is_ok());
    }

    #[test]
    fn wrong_or_missing_token_is_rejected() {
        let session = TestRequest::default().to_http_request().get_session();
        assert!(matches!(validate_csrf(&session, "anything"), Err(AppError::Csrf)));

        let _ = get_or_create_token(&session);
        assert!(matches!(validate_csrf(&session, "deadbeef"), Err(AppError::Csrf)));
    }
}
