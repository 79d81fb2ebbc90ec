//! Loan (borrow) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, UNSAVED_ID};

/// Loan row from the `prestamos` table.
///
/// Dates are opaque text. A loan disappears when either its book or its
/// member is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Loan {
    #[sqlx(rename = "prestamoId")]
    pub id: i64,
    #[sqlx(rename = "libroId")]
    pub book_id: i64,
    #[sqlx(rename = "miembroId")]
    pub member_id: i64,
    #[sqlx(rename = "fechaPrestamo")]
    pub loaned_on: String,
    #[sqlx(rename = "fechaDevolucion")]
    pub returned_on: Option<String>,
}

impl Loan {
    pub fn new(
        book_id: i64,
        member_id: i64,
        loaned_on: impl Into<String>,
        returned_on: Option<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            book_id,
            member_id,
            loaned_on: loaned_on.into(),
            returned_on,
        }
    }
}

impl Entity for Loan {
    const TABLE: &'static str = "prestamos";

    fn id(&self) -> i64 {
        self.id
    }
}
