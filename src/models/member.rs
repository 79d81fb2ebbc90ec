//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, UNSAVED_ID};

/// Library member from the `miembros` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    #[sqlx(rename = "miembroId")]
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    /// Registration date, kept as the text the user entered
    #[sqlx(rename = "fechaInscripcion")]
    pub registered_on: String,
}

impl Member {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        registered_on: impl Into<String>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            registered_on: registered_on.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Member {
    const TABLE: &'static str = "miembros";

    fn id(&self) -> i64 {
        self.id
    }
}
