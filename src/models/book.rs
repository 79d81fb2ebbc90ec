//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, UNSAVED_ID};

/// Book row from the `libros` table. Removed together with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    #[sqlx(rename = "libroId")]
    pub id: i64,
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[sqlx(rename = "genero")]
    pub genre: String,
    #[sqlx(rename = "autorId")]
    pub author_id: i64,
}

impl Book {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            genre: genre.into(),
            author_id,
        }
    }
}

impl Entity for Book {
    const TABLE: &'static str = "libros";

    fn id(&self) -> i64 {
        self.id
    }
}
