pub mod sqlite_user_repo;
pub mod sqlite_event_repo;
pub mod sqlite_ticket_repo;
pub mod sqlite_coupon_repo;
pub mod sqlite_registration_repo;
pub mod sqlite_family_repo;
pub mod sqlite_donation_repo;

pub mod mysql_user_repo;
pub mod mysql_event_repo;
pub mod mysql_ticket_repo;
pub mod mysql_coupon_repo;
pub mod mysql_registration_repo;
pub mod mysql_family_repo;
pub mod mysql_donation_repo;
