use crate::domain::{
    models::family::{AgeGroups, FamilyMember},
    models::user::User,
    ports::FamilyMemberRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

pub struct MySqlFamilyRepo {
    pool: MySqlPool,
}

impl MySqlFamilyRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &str) -> Result<FamilyMember, AppError> {
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl FamilyMemberRepository for MySqlFamilyRepo {
    async fn create(&self, member: &FamilyMember) -> Result<FamilyMember, AppError> {
        sqlx::query(
            r#"INSERT INTO family_members (
                id, user_id, first_name, last_name, birth_year, gender, email,
                phone_e164, relationship, relationship_other, occupation, business_info, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&member.id)
        .bind(&member.user_id)
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(member.birth_year)
        .bind(&member.gender)
        .bind(&member.email)
        .bind(&member.phone_e164)
        .bind(&member.relationship)
        .bind(&member.relationship_other)
        .bind(&member.occupation)
        .bind(&member.business_info)
        .bind(member.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.fetch(&member.id).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FamilyMember>, AppError> {
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FamilyMember>, AppError> {
        sqlx::query_as::<_, FamilyMember>(
            "SELECT * FROM family_members WHERE user_id = ? ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, member: &FamilyMember) -> Result<FamilyMember, AppError> {
        sqlx::query(
            r#"UPDATE family_members SET
                   first_name = ?, last_name = ?, birth_year = ?, gender = ?, email = ?,
                   phone_e164 = ?, relationship = ?, relationship_other = ?, occupation = ?, business_info = ?
               WHERE id = ?"#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(member.birth_year)
        .bind(&member.gender)
        .bind(&member.email)
        .bind(&member.phone_e164)
        .bind(&member.relationship)
        .bind(&member.relationship_other)
        .bind(&member.occupation)
        .bind(&member.business_info)
        .bind(&member.id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.fetch(&member.id).await
    }

    async fn update_with_user_sync(&self, member: &FamilyMember, user: &User) -> Result<FamilyMember, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("UPDATE users SET first_name = ?, last_name = ?, email = ?, phone_e164 = ? WHERE id = ?")
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.phone_e164)
            .bind(&user.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query(
            r#"UPDATE family_members SET
                   first_name = ?, last_name = ?, birth_year = ?, gender = ?, email = ?,
                   phone_e164 = ?, relationship = ?, relationship_other = ?, occupation = ?, business_info = ?
               WHERE id = ?"#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(member.birth_year)
        .bind(&member.gender)
        .bind(&member.email)
        .bind(&member.phone_e164)
        .bind(&member.relationship)
        .bind(&member.relationship_other)
        .bind(&member.occupation)
        .bind(&member.business_info)
        .bind(&member.id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        self.fetch(&member.id).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Family member not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM family_members")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }

    async fn count_families(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(DISTINCT user_id) as count FROM family_members")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get("count"))
    }

    async fn age_groups(&self) -> Result<AgeGroups, AppError> {
        sqlx::query_as::<_, AgeGroups>(
            r#"SELECT
                   COUNT(CASE WHEN birth_year IS NOT NULL AND YEAR(NOW()) - birth_year <= 10 THEN 1 END) as kids,
                   COUNT(CASE WHEN birth_year IS NOT NULL AND YEAR(NOW()) - birth_year BETWEEN 11 AND 59 THEN 1 END) as adults,
                   COUNT(CASE WHEN birth_year IS NOT NULL AND YEAR(NOW()) - birth_year >= 60 THEN 1 END) as seniors
               FROM family_members"#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
