use crate::domain::{
    models::registration::{Registration, RegistrationWithAttendee, RegistrationWithEvent},
    ports::RegistrationRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};

pub struct MySqlRegistrationRepo {
    pool: MySqlPool,
}

impl MySqlRegistrationRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for MySqlRegistrationRepo {
    async fn create(&self, registration: &Registration, max_capacity: Option<i64>) -> Result<Registration, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        if let Some(capacity) = max_capacity {
            // Row lock on the event serializes concurrent registrations so
            // the recount below cannot be stale when the insert lands.
            sqlx::query("SELECT id FROM events WHERE id = ? FOR UPDATE")
                .bind(&registration.event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            let row = sqlx::query("SELECT COUNT(*) as count FROM event_registrations WHERE event_id = ?")
                .bind(&registration.event_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            let current: i64 = row.get("count");
            if current + 1 + registration.guest_count > capacity {
                return Err(AppError::Conflict("Not enough capacity for all attendees".to_string()));
            }
        }

        if let Some(coupon_id) = &registration.coupon_id {
            let result = sqlx::query(
                r#"UPDATE coupons SET times_used = times_used + 1
                   WHERE id = ? AND is_active = TRUE
                     AND (usage_limit IS NULL OR times_used < usage_limit)"#,
            )
            .bind(coupon_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                return Err(AppError::Conflict("Coupon is no longer available".to_string()));
            }
        }

        sqlx::query(
            r#"INSERT INTO event_registrations (
                id, user_id, event_id, ticket_id, coupon_id, guest_count,
                total_amount, discount_amount, final_amount,
                checked_in, checkin_time, checked_in_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&registration.id)
        .bind(&registration.user_id)
        .bind(&registration.event_id)
        .bind(&registration.ticket_id)
        .bind(&registration.coupon_id)
        .bind(registration.guest_count)
        .bind(registration.total_amount)
        .bind(registration.discount_amount)
        .bind(registration.final_amount)
        .bind(registration.checked_in)
        .bind(registration.checkin_time)
        .bind(&registration.checked_in_by)
        .bind(registration.created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Registration>("SELECT * FROM event_registrations WHERE id = ?")
            .bind(&registration.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn exists_for_user(&self, user_id: &str, event_id: &str) -> Result<bool, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM event_registrations WHERE user_id = ? AND event_id = ?",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn coupon_uses_by_user(&self, user_id: &str, event_id: &str, coupon_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM event_registrations WHERE user_id = ? AND event_id = ? AND coupon_id = ?",
        )
        .bind(user_id)
        .bind(event_id)
        .bind(coupon_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<RegistrationWithEvent>, AppError> {
        sqlx::query_as::<_, RegistrationWithEvent>(
            r#"SELECT er.id, er.event_id, e.title as event_title, e.event_date,
                      e.location as event_location, et.name as ticket_name, et.price as ticket_price,
                      er.guest_count, er.total_amount, er.discount_amount, er.final_amount,
                      er.checked_in, er.created_at
               FROM event_registrations er
               JOIN events e ON er.event_id = e.id
               LEFT JOIN event_tickets et ON er.ticket_id = et.id
               WHERE er.user_id = ?
               ORDER BY e.event_date DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<RegistrationWithAttendee>, AppError> {
        sqlx::query_as::<_, RegistrationWithAttendee>(
            r#"SELECT er.id, er.user_id, CONCAT(u.first_name, ' ', u.last_name) as attendee_name,
                      u.email as attendee_email, et.name as ticket_name,
                      er.guest_count, er.final_amount, er.checked_in, er.checkin_time, er.created_at
               FROM event_registrations er
               JOIN users u ON er.user_id = u.id
               LEFT JOIN event_tickets et ON er.ticket_id = et.id
               WHERE er.event_id = ?
               ORDER BY er.created_at DESC"#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn check_in(&self, registration_id: &str, checked_by: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"UPDATE event_registrations
               SET checked_in = TRUE, checkin_time = ?, checked_in_by = ?
               WHERE id = ? AND checked_in = FALSE"#,
        )
        .bind(Utc::now())
        .bind(checked_by)
        .bind(registration_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM event_registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }
}
