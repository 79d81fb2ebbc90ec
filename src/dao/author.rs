//! Authors table access

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{key_param, log_untouched, Dao};
use crate::{
    error::AppResult,
    models::{Author, Entity},
};

#[derive(Clone)]
pub struct AuthorDao {
    pool: SqlitePool,
}

impl AuthorDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Dao for AuthorDao {
    type Entity = Author;

    async fn insert_or_replace(&self, author: &Author) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO autores (autorId, nombre, apellido, nacionalidad)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (autorId) DO UPDATE SET
                nombre = excluded.nombre,
                apellido = excluded.apellido,
                nacionalidad = excluded.nacionalidad
            RETURNING autorId
            "#,
        )
        .bind(key_param(author.id))
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.nationality)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored author {}", id);
        Ok(id)
    }

    async fn update(&self, author: &Author) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE autores SET nombre = $1, apellido = $2, nacionalidad = $3 WHERE autorId = $4",
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.nationality)
        .bind(author.id)
        .execute(&self.pool)
        .await?;
        log_untouched(Author::TABLE, "update", result.rows_affected(), author.id);
        Ok(())
    }

    async fn delete(&self, author: &Author) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM autores WHERE autorId = $1")
            .bind(author.id)
            .execute(&self.pool)
            .await?;
        log_untouched(Author::TABLE, "delete", result.rows_affected(), author.id);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM autores ORDER BY autorId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>("SELECT * FROM autores WHERE autorId = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
