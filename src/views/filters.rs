use crate::models::doctor::{SPECIALTIES, TIME_OPTIONS};

/// One `<option>` of a filter or form select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub fn time_options(selected: &str) -> Vec<SelectOption> {
    TIME_OPTIONS
        .iter()
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: *value == selected,
        })
        .collect()
}

/// Specialties with a leading "any" entry whose value is empty.
pub fn specialty_options(selected: &str, any_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: any_label.to_string(),
        selected: selected.is_empty(),
    })
    .chain(SPECIALTIES.iter().map(|s| SelectOption {
        value: s.to_string(),
        label: s.to_string(),
        selected: s.eq_ignore_ascii_case(selected),
    }))
    .collect()
}
