use crate::domain::{models::ticket::EventTicket, ports::TicketRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::MySqlPool;

pub struct MySqlTicketRepo {
    pool: MySqlPool,
}

impl MySqlTicketRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &str) -> Result<EventTicket, AppError> {
        sqlx::query_as::<_, EventTicket>("SELECT * FROM event_tickets WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl TicketRepository for MySqlTicketRepo {
    async fn create(&self, ticket: &EventTicket) -> Result<EventTicket, AppError> {
        sqlx::query(
            r#"INSERT INTO event_tickets (id, event_id, name, price, is_active, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&ticket.id)
        .bind(&ticket.event_id)
        .bind(&ticket.name)
        .bind(ticket.price)
        .bind(ticket.is_active)
        .bind(ticket.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.fetch(&ticket.id).await
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
            "SELECT * FROM event_tickets WHERE event_id = ? AND is_active = TRUE",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, ticket: &EventTicket) -> Result<EventTicket, AppError> {
        sqlx::query("UPDATE event_tickets SET name = ?, price = ?, is_active = ? WHERE id = ?")
            .bind(&ticket.name)
            .bind(ticket.price)
            .bind(ticket.is_active)
            .bind(&ticket.id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.fetch(&ticket.id).await
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
