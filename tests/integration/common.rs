//! Shared fixtures

use library_loans::{
    dao::{AuthorDao, BookDao, Dao, LoanDao, MemberDao},
    models::{Author, Book, Loan, Member},
    Database,
};

pub async fn database() -> Database {
    Database::in_memory()
        .await
        .expect("Failed to open in-memory database")
}

pub struct Daos {
    pub authors: AuthorDao,
    pub books: BookDao,
    pub members: MemberDao,
    pub loans: LoanDao,
}

pub fn daos(db: &Database) -> Daos {
    Daos {
        authors: AuthorDao::new(db.pool().clone()),
        books: BookDao::new(db.pool().clone()),
        members: MemberDao::new(db.pool().clone()),
        loans: LoanDao::new(db.pool().clone()),
    }
}

/// Author, book, member and a loan linking them
pub struct Seeded {
    pub author: Author,
    pub book: Book,
    pub member: Member,
    pub loan: Loan,
}

pub async fn seed(daos: &Daos) -> Seeded {
    let mut author = Author::new("Jane", "Doe", "US");
    author.id = daos.authors.insert_or_replace(&author).await.expect("insert author");

    let mut book = Book::new("X", "Y", author.id);
    book.id = daos.books.insert_or_replace(&book).await.expect("insert book");

    let mut member = Member::new("Luis", "Rojas", "2024-03-01");
    member.id = daos.members.insert_or_replace(&member).await.expect("insert member");

    let mut loan = Loan::new(book.id, member.id, "2024-05-01", Some("2024-05-15".into()));
    loan.id = daos.loans.insert_or_replace(&loan).await.expect("insert loan");

    Seeded {
        author,
        book,
        member,
        loan,
    }
}
