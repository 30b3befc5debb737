use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::models::{coupon::Coupon, event::EventSummary, ticket::EventTicket};
use crate::error::AppError;

/// Everything that can disqualify a registration before it is persisted.
/// The repository re-checks capacity, duplicates and coupon usage inside
/// its insert transaction; these checks exist to fail fast with a precise
/// reason before any write is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Registration deadline has passed")]
    DeadlinePassed,
    #[error("Not enough capacity for all attendees")]
    CapacityExceeded,
    #[error("User is already registered for this event")]
    AlreadyRegistered,
    #[error("Guest count cannot be negative")]
    InvalidGuestCount,
    #[error("Invalid ticket selection")]
    InvalidTicket,
    #[error("Invalid or expired coupon")]
    InvalidCoupon,
    #[error("Coupon usage limit reached")]
    CouponExhausted,
    #[error("Coupon already used by this user")]
    CouponAlreadyUsed,
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::CapacityExceeded
            | RegistrationError::AlreadyRegistered
            | RegistrationError::CouponExhausted
            | RegistrationError::CouponAlreadyUsed => AppError::Conflict(err.to_string()),
            RegistrationError::DeadlinePassed => AppError::Forbidden(err.to_string()),
            RegistrationError::InvalidGuestCount
            | RegistrationError::InvalidTicket
            | RegistrationError::InvalidCoupon => AppError::Validation(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
}

pub fn check_deadline(event: &EventSummary, now: DateTime<Utc>) -> Result<(), RegistrationError> {
    if let Some(deadline) = event.registration_deadline {
        if now > deadline {
            return Err(RegistrationError::DeadlinePassed);
        }
    }
    Ok(())
}

/// The new registration brings 1 + guest_count attendees; existing
/// registrations are counted as rows. No capacity set means unlimited.
pub fn check_capacity(event: &EventSummary, guest_count: i64) -> Result<(), RegistrationError> {
    if guest_count < 0 {
        return Err(RegistrationError::InvalidGuestCount);
    }
    if let Some(capacity) = event.max_capacity {
        if event.registration_count + 1 + guest_count > capacity {
            return Err(RegistrationError::CapacityExceeded);
        }
    }
    Ok(())
}

pub fn check_ticket(ticket: &EventTicket, event_id: &str) -> Result<(), RegistrationError> {
    if ticket.event_id != event_id || !ticket.is_active {
        return Err(RegistrationError::InvalidTicket);
    }
    Ok(())
}

pub fn check_coupon(
    coupon: &Coupon,
    event_id: &str,
    uses_by_user: i64,
    now: DateTime<Utc>,
) -> Result<(), RegistrationError> {
    if coupon.event_id != event_id || !coupon.is_active {
        return Err(RegistrationError::InvalidCoupon);
    }
    if let Some(expires_at) = coupon.expires_at {
        if now > expires_at {
            return Err(RegistrationError::InvalidCoupon);
        }
    }
    if let Some(limit) = coupon.usage_limit {
        if coupon.times_used >= limit {
            return Err(RegistrationError::CouponExhausted);
        }
    }
    if coupon.one_per_user && uses_by_user > 0 {
        return Err(RegistrationError::CouponAlreadyUsed);
    }
    Ok(())
}

/// Total is the ticket price for every attendee (the member plus guests);
/// without a ticket the event is free. The discount never pushes the final
/// amount below zero.
pub fn quote(ticket: Option<&EventTicket>, guest_count: i64, discount: f64) -> Quote {
    let attendees = 1 + guest_count;
    let total_amount = ticket.map(|t| t.price * attendees as f64).unwrap_or(0.0);
    let discount_amount = discount.min(total_amount);
    Quote {
        total_amount,
        discount_amount,
        final_amount: total_amount - discount_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(max_capacity: Option<i64>, registration_count: i64) -> EventSummary {
        EventSummary {
            id: "ev-1".to_string(),
            title: "Diwali Gala".to_string(),
            description: "Annual celebration".to_string(),
            event_date: Utc::now() + Duration::days(30),
            location: "Community Hall".to_string(),
            max_capacity,
            registration_deadline: Some(Utc::now() + Duration::days(14)),
            created_at: Utc::now(),
            registration_count,
        }
    }

    fn ticket(event_id: &str, price: f64, is_active: bool) -> EventTicket {
        EventTicket::new(event_id.to_string(), "General".to_string(), price, is_active)
    }

    fn coupon(event_id: &str) -> Coupon {
        use crate::domain::models::coupon::NewCouponParams;
        Coupon::new(NewCouponParams {
            event_id: event_id.to_string(),
            code: "EARLY10".to_string(),
            discount_amount: 10.0,
            usage_limit: None,
            one_per_user: false,
            expires_at: None,
        })
    }

    #[test]
    fn capacity_rejects_when_guests_overflow() {
        // capacity 10, 9 registered, 1 guest: 9 + 1 + 1 = 11 > 10
        let ev = event(Some(10), 9);
        assert_eq!(check_capacity(&ev, 1), Err(RegistrationError::CapacityExceeded));
    }

    #[test]
    fn capacity_accepts_exact_fit() {
        // capacity 10, 8 registered, 1 guest: 8 + 1 + 1 = 10
        let ev = event(Some(10), 8);
        assert_eq!(check_capacity(&ev, 1), Ok(()));
    }

    #[test]
    fn capacity_unlimited_when_unset() {
        let ev = event(None, 100_000);
        assert_eq!(check_capacity(&ev, 50), Ok(()));
    }

    #[test]
    fn negative_guest_count_rejected() {
        let ev = event(Some(10), 0);
        assert_eq!(check_capacity(&ev, -1), Err(RegistrationError::InvalidGuestCount));
    }

    #[test]
    fn deadline_in_past_rejects() {
        let mut ev = event(Some(10), 0);
        ev.registration_deadline = Some(Utc::now() - Duration::hours(1));
        assert_eq!(check_deadline(&ev, Utc::now()), Err(RegistrationError::DeadlinePassed));
    }

    #[test]
    fn missing_deadline_accepts() {
        let mut ev = event(Some(10), 0);
        ev.registration_deadline = None;
        assert_eq!(check_deadline(&ev, Utc::now()), Ok(()));
    }

    #[test]
    fn ticket_for_other_event_rejected() {
        let t = ticket("ev-other", 25.0, true);
        assert_eq!(check_ticket(&t, "ev-1"), Err(RegistrationError::InvalidTicket));
    }

    #[test]
    fn inactive_ticket_rejected() {
        let t = ticket("ev-1", 25.0, false);
        assert_eq!(check_ticket(&t, "ev-1"), Err(RegistrationError::InvalidTicket));
    }

    #[test]
    fn coupon_expired_rejected() {
        let mut c = coupon("ev-1");
        c.expires_at = Some(Utc::now() - Duration::minutes(5));
        assert_eq!(check_coupon(&c, "ev-1", 0, Utc::now()), Err(RegistrationError::InvalidCoupon));
    }

    #[test]
    fn coupon_exhausted_rejected() {
        let mut c = coupon("ev-1");
        c.usage_limit = Some(3);
        c.times_used = 3;
        assert_eq!(check_coupon(&c, "ev-1", 0, Utc::now()), Err(RegistrationError::CouponExhausted));
    }

    #[test]
    fn coupon_one_per_user_rejected_on_second_use() {
        let mut c = coupon("ev-1");
        c.one_per_user = true;
        assert_eq!(check_coupon(&c, "ev-1", 1, Utc::now()), Err(RegistrationError::CouponAlreadyUsed));
        assert_eq!(check_coupon(&c, "ev-1", 0, Utc::now()), Ok(()));
    }

    #[test]
    fn coupon_wrong_event_rejected() {
        let c = coupon("ev-other");
        assert_eq!(check_coupon(&c, "ev-1", 0, Utc::now()), Err(RegistrationError::InvalidCoupon));
    }

    #[test]
    fn quote_multiplies_ticket_price_by_attendees() {
        let t = ticket("ev-1", 25.0, true);
        let q = quote(Some(&t), 1, 0.0);
        assert_eq!(q.total_amount, 50.0);
        assert_eq!(q.final_amount, 50.0);
    }

    #[test]
    fn quote_applies_discount() {
        let t = ticket("ev-1", 25.0, true);
        let q = quote(Some(&t), 0, 10.0);
        assert_eq!(q.total_amount, 25.0);
        assert_eq!(q.discount_amount, 10.0);
        assert_eq!(q.final_amount, 15.0);
    }

    #[test]
    fn quote_clamps_discount_to_total() {
        let t = ticket("ev-1", 5.0, true);
        let q = quote(Some(&t), 0, 10.0);
        assert_eq!(q.discount_amount, 5.0);
        assert_eq!(q.final_amount, 0.0);
    }

    #[test]
    fn quote_free_event_without_ticket() {
        let q = quote(None, 3, 0.0);
        assert_eq!(q.total_amount, 0.0);
        assert_eq!(q.final_amount, 0.0);
    }
}
