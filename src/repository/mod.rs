//! Repository layer: per-entity pass-through over the data-access objects.
//!
//! Every method hands back the DAO future for the caller to await. The SQLite
//! driver executes statements on its connection worker thread, so the calling
//! task only suspends and never blocks on I/O.

use sqlx::SqlitePool;

use crate::{
    dao::{AuthorDao, BookDao, Dao, LoanDao, MemberDao},
    error::AppResult,
    models::{Author, Book, Loan, Member},
};

/// Exclusive owner of one data-access object.
#[derive(Clone)]
pub struct Repository<D> {
    dao: D,
}

impl<D: Dao> Repository<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    pub async fn insert(&self, record: &D::Entity) -> AppResult<i64> {
        self.dao.insert_or_replace(record).await
    }

    pub async fn update(&self, record: &D::Entity) -> AppResult<()> {
        self.dao.update(record).await
    }

    pub async fn delete(&self, record: &D::Entity) -> AppResult<()> {
        self.dao.delete(record).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<D::Entity>> {
        self.dao.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<D::Entity>> {
        self.dao.get_by_id(id).await
    }
}

impl Repository<BookDao> {
    pub async fn get_all_authors(&self) -> AppResult<Vec<Author>> {
        self.dao.list_authors().await
    }
}

impl Repository<LoanDao> {
    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.dao.list_books().await
    }

    pub async fn get_all_members(&self) -> AppResult<Vec<Member>> {
        self.dao.list_members().await
    }

    pub async fn get_by_book_and_member(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> AppResult<Option<Loan>> {
        self.dao.get_by_book_and_member(book_id, member_id).await
    }
}

pub type AuthorRepository = Repository<AuthorDao>;
pub type BookRepository = Repository<BookDao>;
pub type MemberRepository = Repository<MemberDao>;
pub type LoanRepository = Repository<LoanDao>;

/// One repository per table, all sharing the same pool
#[derive(Clone)]
pub struct Repositories {
    pub authors: AuthorRepository,
    pub books: BookRepository,
    pub members: MemberRepository,
    pub loans: LoanRepository,
}

impl Repositories {
    /// Create the repositories over the given database pool
    pub fn new(pool: &SqlitePool) -> Self {
        Self {
            authors: Repository::new(AuthorDao::new(pool.clone())),
            books: Repository::new(BookDao::new(pool.clone())),
            members: Repository::new(MemberDao::new(pool.clone())),
            loans: Repository::new(LoanDao::new(pool.clone())),
        }
    }
}

