//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberPayload},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a new member and return it with its assigned id
    pub async fn create(&self, member: &MemberPayload) -> AppResult<Member> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO members (first_name, last_name, email, join_date, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING member_id
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.join_date)
        .bind(&member.phone)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// List every member, in storage-default order
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT * FROM members")
            .fetch_all(&self.pool)
            .await?;

        Ok(members)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE member_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        Ok(member)
    }

    /// Overwrite every field of an existing member with the payload's values
    pub async fn update(&self, id: i32, member: &MemberPayload) -> AppResult<Member> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET first_name = $1, last_name = $2, email = $3,
                join_date = $4, phone = $5
            WHERE member_id = $6
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.join_date)
        .bind(&member.phone)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a member
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        Ok(())
    }
}
