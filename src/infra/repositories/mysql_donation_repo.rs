use crate::domain::{models::donation::Donation, ports::DonationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

pub struct MySqlDonationRepo {
    pool: MySqlPool,
}

impl MySqlDonationRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationRepository for MySqlDonationRepo {
    async fn create(&self, donation: &Donation) -> Result<Donation, AppError> {
        sqlx::query(
            r#"INSERT INTO donations (id, user_id, amount, message, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&donation.id)
        .bind(&donation.user_id)
        .bind(donation.amount)
        .bind(&donation.message)
        .bind(donation.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = ?")
            .bind(&donation.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Donation>, AppError> {
        sqlx::query_as::<_, Donation>(
            "SELECT * FROM donations WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Donation>, AppError> {
        sqlx::query_as::<_, Donation>("SELECT * FROM donations ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM donations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Donation not found".into()));
        }
        Ok(())
    }

    async fn total_amount(&self) -> Result<f64, AppError> {
        let row = sqlx::query("SELECT CAST(COALESCE(SUM(amount), 0) AS DOUBLE) as total FROM donations")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("total"))
    }

    async fn total_since(&self, since: DateTime<Utc>) -> Result<f64, AppError> {
        let row = sqlx::query(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS DOUBLE) as total FROM donations WHERE created_at >= ?",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get("total"))
    }
}
