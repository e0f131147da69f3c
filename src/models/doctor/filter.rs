use serde::Deserialize;

/// Doctor listing filters, as submitted by the search form.
///
/// A field that is present but blank still counts as submitted: the
/// dashboard then runs a search with placeholders instead of the plain list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

/// Time-of-day choices offered by the filter form.
pub const TIME_OPTIONS: &[(&str, &str)] = &[("", "All times"), ("AM", "Morning"), ("PM", "Afternoon")];

/// Specialties offered by the filter and add-doctor forms.
pub const SPECIALTIES: &[&str] = &[
    "Cardiologist",
    "Dermatologist",
    "Neurologist",
    "Pediatrician",
    "Orthopedic",
    "Gynecologist",
    "Psychiatrist",
    "Dentist",
    "Ophthalmologist",
    "ENT",
    "Urologist",
    "Oncologist",
    "Gastroenterologist",
    "General",
];

impl DoctorFilter {
    pub fn is_submitted(&self) -> bool {
        self.name.is_some() || self.time.is_some() || self.specialty.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn time(&self) -> Option<&str> {
        non_blank(&self.time)
    }

    pub fn specialty(&self) -> Option<&str> {
        non_blank(&self.specialty)
    }

    /// Values echoed back into the form inputs.
    pub fn name_value(&self) -> &str {
        self.name().unwrap_or("")
    }

    pub fn time_value(&self) -> &str {
        self.time().unwrap_or("")
    }

    pub fn specialty_value(&self) -> &str {
        self.specialty().unwrap_or("")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
