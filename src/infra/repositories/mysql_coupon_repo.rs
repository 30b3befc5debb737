use crate::domain::{models::coupon::Coupon, ports::CouponRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

pub struct MySqlCouponRepo {
    pool: MySqlPool,
}

impl MySqlCouponRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &str) -> Result<Coupon, AppError> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl CouponRepository for MySqlCouponRepo {
    async fn create(&self, coupon: &Coupon) -> Result<Coupon, AppError> {
        sqlx::query(
            r#"INSERT INTO coupons (id, event_id, code, discount_amount, usage_limit, times_used, one_per_user, is_active, expires_at, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&coupon.id)
        .bind(&coupon.event_id)
        .bind(&coupon.code)
        .bind(coupon.discount_amount)
        .bind(coupon.usage_limit)
        .bind(coupon.times_used)
        .bind(coupon.one_per_user)
        .bind(coupon.is_active)
        .bind(coupon.expires_at)
        .bind(coupon.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.fetch(&coupon.id).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coupon>, AppError> {
        sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_valid_by_event(&self, event_id: &str, now: DateTime<Utc>) -> Result<Vec<Coupon>, AppError> {
        sqlx::query_as::<_, Coupon>(
            r#"SELECT * FROM coupons
               WHERE event_id = ? AND is_active = TRUE
                 AND (expires_at IS NULL OR expires_at > ?)
                 AND (usage_limit IS NULL OR times_used < usage_limit)"#,
        )
        .bind(event_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Coupon not found".into()));
        }
        Ok(())
    }
}
