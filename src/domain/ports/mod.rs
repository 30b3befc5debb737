use crate::domain::models::{
    coupon::Coupon,
    donation::Donation,
    event::{Event, EventSummary},
    family::{AgeGroups, FamilyMember},
    registration::{Registration, RegistrationWithAttendee, RegistrationWithEvent},
    ticket::EventTicket,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<EventSummary>, AppError>;
    async fn list(&self) -> Result<Vec<EventSummary>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn count_upcoming(&self, now: DateTime<Utc>) -> Result<i64, AppError>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create(&self, ticket: &EventTicket) -> Result<EventTicket, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<EventTicket>, AppError>;
    async fn list_active_by_event(&self, event_id: &str) -> Result<Vec<EventTicket>, AppError>;
    async fn update(&self, ticket: &EventTicket) -> Result<EventTicket, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn create(&self, coupon: &Coupon) -> Result<Coupon, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Coupon>, AppError>;
    async fn list_valid_by_event(&self, event_id: &str, now: DateTime<Utc>) -> Result<Vec<Coupon>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persists a registration inside a single transaction: capacity and
    /// duplicate checks are re-run against current rows, and the coupon use
    /// counter is incremented with a guarded UPDATE, so two concurrent
    /// requests cannot both pass a stale read.
    async fn create(&self, registration: &Registration, max_capacity: Option<i64>) -> Result<Registration, AppError>;
    async fn exists_for_user(&self, user_id: &str, event_id: &str) -> Result<bool, AppError>;
    async fn coupon_uses_by_user(&self, user_id: &str, event_id: &str, coupon_id: &str) -> Result<i64, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<RegistrationWithEvent>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<RegistrationWithAttendee>, AppError>;
    /// Marks the attendee as checked in. Returns false when the registration
    /// does not exist or was already checked in.
    async fn check_in(&self, registration_id: &str, checked_by: &str) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait FamilyMemberRepository: Send + Sync {
    async fn create(&self, member: &FamilyMember) -> Result<FamilyMember, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FamilyMember>, AppError>;
    async fn update(&self, member: &FamilyMember) -> Result<FamilyMember, AppError>;
    /// Updates the family record and the owning user row in one transaction.
    /// Used when the edited record is the account holder's own ("self").
    async fn update_with_user_sync(&self, member: &FamilyMember, user: &User) -> Result<FamilyMember, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn count_families(&self) -> Result<i64, AppError>;
    async fn age_groups(&self) -> Result<AgeGroups, AppError>;
}

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn create(&self, donation: &Donation) -> Result<Donation, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Donation>, AppError>;
    async fn list_all(&self) -> Result<Vec<Donation>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn total_amount(&self) -> Result<f64, AppError>;
    async fn total_since(&self, since: DateTime<Utc>) -> Result<f64, AppError>;
}
