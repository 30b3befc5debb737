pub mod coupon;
pub mod dashboard;
pub mod donation;
pub mod event;
pub mod family;
pub mod health;
pub mod profile;
pub mod registration;
pub mod ticket;
