//! Book screen form

use validator::Validate;

use super::{Controller, FieldErrors, Form};
use crate::{
    dao::BookDao,
    models::{Author, Book, UNSAVED_ID},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub genre: String,
    /// Author picked for the book
    pub author: Option<Author>,
    /// Choices offered by the author picker
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone)]
pub enum BookInput {
    Title(String),
    Genre(String),
    Author(Option<Author>),
    AuthorsLoaded(Vec<Author>),
}

#[derive(Validate)]
struct BookDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    title: String,
    #[validate(length(min = 1, message = "Genre is required"))]
    genre: String,
    #[validate(required(message = "An author must be selected"))]
    author_id: Option<i64>,
}

impl Form for BookForm {
    type Record = Book;
    type Dao = BookDao;
    type Input = BookInput;

    const NOUN: &'static str = "book";
    const COLLECTION: &'static str = "books";

    fn apply(self, input: BookInput) -> Self {
        match input {
            BookInput::Title(title) => Self { title, ..self },
            BookInput::Genre(genre) => Self { genre, ..self },
            BookInput::Author(author) => Self { author, ..self },
            BookInput::AuthorsLoaded(authors) => Self { authors, ..self },
        }
    }

    /// The author is looked up among the loaded choices; an unknown author
    /// leaves the picker empty.
    fn load(self, book: &Book) -> Self {
        let author = self
            .authors
            .iter()
            .find(|author| author.id == book.author_id)
            .cloned();
        Self {
            title: book.title.clone(),
            genre: book.genre.clone(),
            author,
            ..self
        }
    }

    fn clear(self) -> Self {
        Self {
            authors: self.authors,
            ..Self::default()
        }
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::check(&BookDraft {
            title: self.title.trim().to_string(),
            genre: self.genre.trim().to_string(),
            author_id: self.author.as_ref().map(|author| author.id),
        })
    }

    fn build(&self, staged: Option<&Book>) -> Book {
        Book {
            id: staged.map_or(UNSAVED_ID, |book| book.id),
            title: self.title.clone(),
            genre: self.genre.clone(),
            author_id: self.author.as_ref().map_or(0, |author| author.id),
        }
    }

    fn subject(book: &Book) -> String {
        format!("Book '{}'", book.title)
    }
}

impl Controller<BookForm> {
    /// Refresh the author picker.
    pub async fn load_authors(&self) {
        match self.repository().get_all_authors().await {
            Ok(authors) => self.input(BookInput::AuthorsLoaded(authors)),
            Err(err) => self.fail("load authors for", &err),
        }
    }
}
