//! Author screen form

use validator::Validate;

use super::{FieldErrors, Form};
use crate::{
    dao::AuthorDao,
    models::{Author, UNSAVED_ID},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
}

#[derive(Debug, Clone)]
pub enum AuthorInput {
    FirstName(String),
    LastName(String),
    Nationality(String),
}

#[derive(Validate)]
struct AuthorDraft {
    #[validate(length(min = 1, message = "First name is required"))]
    first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    last_name: String,
    #[validate(length(min = 1, message = "Nationality is required"))]
    nationality: String,
}

impl Form for AuthorForm {
    type Record = Author;
    type Dao = AuthorDao;
    type Input = AuthorInput;

    const NOUN: &'static str = "author";
    const COLLECTION: &'static str = "authors";

    fn apply(self, input: AuthorInput) -> Self {
        match input {
            AuthorInput::FirstName(first_name) => Self { first_name, ..self },
            AuthorInput::LastName(last_name) => Self { last_name, ..self },
            AuthorInput::Nationality(nationality) => Self {
                nationality,
                ..self
            },
        }
    }

    fn load(self, author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            nationality: author.nationality.clone(),
        }
    }

    fn clear(self) -> Self {
        Self::default()
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::check(&AuthorDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            nationality: self.nationality.trim().to_string(),
        })
    }

    fn build(&self, staged: Option<&Author>) -> Author {
        Author {
            id: staged.map_or(UNSAVED_ID, |author| author.id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            nationality: self.nationality.clone(),
        }
    }

    fn subject(author: &Author) -> String {
        format!("Author {}", author.full_name())
    }
}
