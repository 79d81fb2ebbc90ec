//! Loans table access

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{key_param, log_untouched, Dao};
use crate::{
    error::AppResult,
    models::{Book, Entity, Loan, Member},
};

#[derive(Clone)]
pub struct LoanDao {
    pool: SqlitePool,
}

impl LoanDao {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// First loan of `book_id` to `member_id`, if any
    pub async fn get_by_book_and_member(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> AppResult<Option<Loan>> {
        let row = sqlx::query_as::<_, Loan>(
            r#"
            SELECT * FROM prestamos
            WHERE libroId = $1 AND miembroId = $2
            ORDER BY prestamoId
            LIMIT 1
            "#,
        )
        .bind(book_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Books that can be lent, for the book picker
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM libros ORDER BY libroId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Members that can borrow, for the member picker
    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM miembros ORDER BY miembroId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl Dao for LoanDao {
    type Entity = Loan;

    async fn insert_or_replace(&self, loan: &Loan) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO prestamos (prestamoId, libroId, miembroId, fechaPrestamo, fechaDevolucion)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (prestamoId) DO UPDATE SET
                libroId = excluded.libroId,
                miembroId = excluded.miembroId,
                fechaPrestamo = excluded.fechaPrestamo,
                fechaDevolucion = excluded.fechaDevolucion
            RETURNING prestamoId
            "#,
        )
        .bind(key_param(loan.id))
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(&loan.loaned_on)
        .bind(&loan.returned_on)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            "Stored loan {} (book {}, member {})",
            id,
            loan.book_id,
            loan.member_id
        );
        Ok(id)
    }

    async fn update(&self, loan: &Loan) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE prestamos
            SET libroId = $1, miembroId = $2, fechaPrestamo = $3, fechaDevolucion = $4
            WHERE prestamoId = $5
            "#,
        )
        .bind(loan.book_id)
        .bind(loan.member_id)
        .bind(&loan.loaned_on)
        .bind(&loan.returned_on)
        .bind(loan.id)
        .execute(&self.pool)
        .await?;
        log_untouched(Loan::TABLE, "update", result.rows_affected(), loan.id);
        Ok(())
    }

    async fn delete(&self, loan: &Loan) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM prestamos WHERE prestamoId = $1")
            .bind(loan.id)
            .execute(&self.pool)
            .await?;
        log_untouched(Loan::TABLE, "delete", result.rows_affected(), loan.id);
        Ok(())
    }

    async fn get_all(&self) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, Loan>("SELECT * FROM prestamos ORDER BY prestamoId")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Loan>> {
        let row = sqlx::query_as::<_, Loan>("SELECT * FROM prestamos WHERE prestamoId = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
