pub mod coupon;
pub mod donation;
pub mod event;
pub mod family;
pub mod registration;
pub mod ticket;
pub mod user;
