//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, UNSAVED_ID};

/// Author row from the `autores` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    #[sqlx(rename = "autorId")]
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    #[sqlx(rename = "nacionalidad")]
    pub nationality: String,
}

impl Author {
    /// Build an author that has not been stored yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            nationality: nationality.into(),
        }
    }

    /// "First Last", as shown in pickers and messages
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Author {
    const TABLE: &'static str = "autores";

    fn id(&self) -> i64 {
        self.id
    }
}
