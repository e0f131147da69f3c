use serde::{Deserialize, Deserializer, Serialize};

/// A doctor as the backend returns it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialty: String,
    #[serde(default)]
    pub available_times: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Body of the admin "add doctor" request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    pub available_times: Vec<String>,
}

/// Form data from the add-doctor page. The form takes a single time slot.
#[derive(Debug, Default, Deserialize)]
pub struct DoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    pub time_slot: String,
    pub csrf_token: String,
}

impl DoctorForm {
    /// Field problems, in form order. Empty when the form can be sent.
    pub fn validate(&self) -> Vec<String> {
        use crate::auth::validate;

        [
            validate::validate_required(&self.name, "Name", 3, 100),
            validate::validate_email(&self.email),
            validate::validate_phone(&self.phone),
            validate::validate_password(&self.password),
            validate::validate_required(&self.specialty, "Specialty", 2, 50),
            validate::validate_time_slot(&self.time_slot),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn to_new_doctor(&self) -> NewDoctor {
        NewDoctor {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            specialty: self.specialty.trim().to_string(),
            available_times: vec![self.time_slot.trim().to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_shape() {
        let json = r#"{
            "id": 4,
            "name": "Dr. Rao",
            "email": "rao@clinic.org",
            "phone": "0123456789",
            "specialty": "Cardiologist",
            "availableTimes": ["09:00-10:00", "10:00-11:00"],
            "password": "ignored"
        }"#;
        let doctor: Doctor = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.id, 4);
        assert_eq!(doctor.available_times.len(), 2);
    }

    #[test]
    fn missing_optional_fields_default() {
        let doctor: Doctor = serde_json::from_str(r#"{"id": 1, "name": "Dr. Lin"}"#).unwrap();
        assert!(doctor.available_times.is_empty());
        assert_eq!(doctor.specialty, "");
    }

    #[test]
    fn nameless_record_does_not_sink_the_list() {
        let json = r#"[{"id": 1, "name": "Dr. Lin"}, {"id": 2, "name": null, "email": null}, {"id": 3}]"#;
        let doctors: Vec<Doctor> = serde_json::from_str(json).unwrap();
        assert_eq!(doctors.len(), 3);
        assert_eq!(doctors[1].name, "");
        assert_eq!(doctors[2].name, "");
    }

    #[test]
    fn form_becomes_camel_case_body() {
        let form = DoctorForm {
            name: " Dr. Okafor ".into(),
            email: "okafor@clinic.org".into(),
            phone: "0123456789".into(),
            password: "secret1".into(),
            specialty: "Dermatologist".into(),
            time_slot: "14:00-15:00".into(),
            csrf_token: "x".into(),
        };
        assert!(form.validate().is_empty());

        let body = serde_json::to_value(form.to_new_doctor()).unwrap();
        assert_eq!(body["name"], "Dr. Okafor");
        assert_eq!(body["availableTimes"][0], "14:00-15:00");
    }

    #[test]
    fn empty_form_lists_every_problem() {
        assert_eq!(DoctorForm::default().validate().len(), 6);
    }
}
