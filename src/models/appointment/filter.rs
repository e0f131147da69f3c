use chrono::NaiveDate;
use serde::Deserialize;

/// Doctor dashboard filters: the day to show and an optional patient name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentQuery {
    pub date: Option<String>,
    pub name: Option<String>,
}

/// Filters after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub date: String,
    pub patient_name: Option<String>,
}

impl AppointmentQuery {
    /// Missing or malformed dates fall back to `today`.
    pub fn resolve(&self, today: &str) -> AppointmentFilter {
        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok())
            .unwrap_or(today)
            .to_string();
        let patient_name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        AppointmentFilter { date, patient_name }
    }
}

impl AppointmentFilter {
    pub fn name_value(&self) -> &str {
        self.patient_name.as_deref().unwrap_or("")
    }
}

/// Today's date as `YYYY-MM-DD` in local time.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
