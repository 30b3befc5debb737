pub mod dashboard;
pub mod registration;
