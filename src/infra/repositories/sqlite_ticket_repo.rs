use crate::domain::{models::ticket::EventTicket, ports::TicketRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTicketRepo {
    pool: SqlitePool,
}

impl SqliteTicketRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for SqliteTicketRepo {
    async fn create(&self, ticket: &EventTicket) -> Result<EventTicket, AppError> {
        sqlx::query_as::<_, EventTicket>(
            r#"INSERT INTO event_tickets (id, event_id, name, price, is_active, created_at)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&ticket.id)
        .bind(&ticket.event_id)
        .bind(&ticket.name)
        .bind(ticket.price)
        .bind(ticket.is_active)
        .bind(ticket.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<EventTicket>, AppError> {
        sqlx::query_as::<_, EventTicket>("SELECT * FROM event_tickets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active_by_event(&self, event_id: &str) -> Result<Vec<EventTicket>, AppError> {
        sqlx::query_as::<_, EventTicket>(
            "SELECT * FROM event_tickets WHERE event_id = ? AND is_active = 1",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, ticket: &EventTicket) -> Result<EventTicket, AppError> {
        sqlx::query_as::<_, EventTicket>(
            "UPDATE event_tickets SET name = ?, price = ?, is_active = ? WHERE id = ? RETURNING *",
        )
        .bind(&ticket.name)
        .bind(ticket.price)
        .bind(ticket.is_active)
        .bind(&ticket.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM event_tickets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Ticket not found".into()));
        }
        Ok(())
    }
}
