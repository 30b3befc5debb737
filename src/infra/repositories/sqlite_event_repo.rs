use crate::domain::{
    models::event::{Event, EventSummary},
    ports::EventRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

const SUMMARY_SELECT: &str = r#"
    SELECT e.*, COUNT(er.id) as registration_count
    FROM events e
    LEFT JOIN event_registrations er ON e.id = er.event_id
"#;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (id, title, description, event_date, location, max_capacity, registration_deadline, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(&event.location)
        .bind(event.max_capacity)
        .bind(event.registration_deadline)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<EventSummary>, AppError> {
        sqlx::query_as::<_, EventSummary>(&format!(
            "{SUMMARY_SELECT} WHERE e.id = ? GROUP BY e.id"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<EventSummary>, AppError> {
        sqlx::query_as::<_, EventSummary>(&format!(
            "{SUMMARY_SELECT} GROUP BY e.id ORDER BY e.event_date ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET title = ?, description = ?, event_date = ?, location = ?,
                   max_capacity = ?, registration_deadline = ?
               WHERE id = ? RETURNING *"#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(&event.location)
        .bind(event.max_capacity)
        .bind(event.registration_deadline)
        .bind(&event.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }

    async fn count_upcoming(&self, now: DateTime<Utc>) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM events WHERE event_date > ?")
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }
}
