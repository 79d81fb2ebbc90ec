//! Books table access

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{key_param, log_untouched, Dao};
use crate::{
    error::AppResult,
    models::{Author, Book, Entity},
};

#[derive(Clone)]
pub struct BookDao {
    pool: SqlitePool,
}

impl BookDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Authors a book can be attached to, for the author picker
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM autores ORDER BY autorId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl Dao for BookDao {
    type Entity = Book;

    async fn insert_or_replace(&self, book: &Book) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO libros (libroId, titulo, genero, autorId)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (libroId) DO UPDATE SET
                titulo = excluded.titulo,
                genero = excluded.genero,
                autorId = excluded.autorId
            RETURNING libroId
            "#,
        )
        .bind(key_param(book.id))
        .bind(&book.title)
        .bind(&book.genre)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Stored book {} for author {}", id, book.author_id);
        Ok(id)
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE libros SET titulo = $1, genero = $2, autorId = $3 WHERE libroId = $4",
        )
        .bind(&book.title)
        .bind(&book.genre)
        .bind(book.author_id)
        .bind(book.id)
        .execute(&self.pool)
        .await?;
        log_untouched(Book::TABLE, "update", result.rows_affected(), book.id);
        Ok(())
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM libros WHERE libroId = $1")
            .bind(book.id)
            .execute(&self.pool)
            .await?;
        log_untouched(Book::TABLE, "delete", result.rows_affected(), book.id);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM libros ORDER BY libroId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM libros WHERE libroId = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
