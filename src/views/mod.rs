//! View models: plain data built from backend entities and the current role.
//! Templates only read these; no role logic lives in the HTML.

pub mod appointment_rows;
pub mod doctor_card;
pub mod filters;
pub mod header;
pub mod listing;
