//! Members table access

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{key_param, log_untouched, Dao};
use crate::{
    error::AppResult,
    models::{Entity, Member},
};

#[derive(Clone)]
pub struct MemberDao {
    pool: SqlitePool,
}

impl MemberDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Dao for MemberDao {
    type Entity = Member;

    async fn insert_or_replace(&self, member: &Member) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO miembros (miembroId, nombre, apellido, fechaInscripcion)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (miembroId) DO UPDATE SET
                nombre = excluded.nombre,
                apellido = excluded.apellido,
                fechaInscripcion = excluded.fechaInscripcion
            RETURNING miembroId
            "#,
        )
        .bind(key_param(member.id))
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.registered_on)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored member {}", id);
        Ok(id)
    }

    async fn update(&self, member: &Member) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE miembros SET nombre = $1, apellido = $2, fechaInscripcion = $3
            WHERE miembroId = $4
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.registered_on)
        .bind(member.id)
        .execute(&self.pool)
        .await?;
        log_untouched(Member::TABLE, "update", result.rows_affected(), member.id);
        Ok(())
    }

    async fn delete(&self, member: &Member) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM miembros WHERE miembroId = $1")
            .bind(member.id)
            .execute(&self.pool)
            .await?;
        log_untouched(Member::TABLE, "delete", result.rows_affected(), member.id);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM miembros ORDER BY miembroId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Member>> {
        let row = sqlx::query_as::<_, Member>("SELECT * FROM miembros WHERE miembroId = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
