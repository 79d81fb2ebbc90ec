//! Library loan system
//!
//! Authors, books, members and loans kept in an embedded SQLite store, with
//! one view-state controller per screen for the presentation layer to drive.

pub mod config;
pub mod controllers;
pub mod dao;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use db::Database;
pub use error::{AppError, AppResult};

use controllers::{AuthorForm, BookForm, Controller, LoanForm, MemberForm};
use repository::Repositories;

/// Every screen controller, wired to one database
pub struct App {
    pub authors: Controller<AuthorForm>,
    pub books: Controller<BookForm>,
    pub members: Controller<MemberForm>,
    pub loans: Controller<LoanForm>,
}

impl App {
    pub fn new(database: &Database) -> Self {
        let repositories = Repositories::new(database.pool());
        Self {
            authors: Controller::new(repositories.authors),
            books: Controller::new(repositories.books),
            members: Controller::new(repositories.members),
            loans: Controller::new(repositories.loans),
        }
    }

    /// Load every list and picker.
    pub async fn refresh_all(&self) {
        self.authors.refresh().await;
        self.books.refresh().await;
        self.books.load_authors().await;
        self.members.refresh().await;
        self.loans.refresh().await;
        self.loans.load_choices().await;
    }
}
