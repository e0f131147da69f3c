/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a password: min 6 chars, the backend's own floor.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    None
}

/// Validate a phone number: exactly 10 digits.
pub fn validate_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some("Phone number is required".to_string());
    }
    if trimmed.len() != 10 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some("Phone number must be 10 digits".to_string());
    }
    None
}

/// Validate a required text field with a length range.
pub fn validate_required(value: &str, field_name: &str, min_len: usize, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    let len = trimmed.chars().count();
    if len < min_len {
        return Some(format!("{field_name} must be at least {min_len} characters"));
    }
    if len > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate a time slot such as `09:00-10:00`.
pub fn validate_time_slot(slot: &str) -> Option<String> {
    let trimmed = slot.trim();
    if trimmed.is_empty() {
        return Some("Available time is required".to_string());
    }
    let valid = trimmed
        .split_once('-')
        .is_some_and(|(from, to)| is_clock(from) && is_clock(to));
    if !valid {
        return Some("Available time must look like 09:00-10:00".to_string());
    }
    None
}

fn is_clock(s: &str) -> bool {
    chrono::NaiveTime::parse_from_str(s.trim(), "%H:%M").is_ok()
}
