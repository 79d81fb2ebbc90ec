//! Repositories forward to their DAOs unchanged

use library_loans::{
    models::{Author, Book},
    repository::Repositories,
};

use crate::common::database;

#[tokio::test]
async fn repository_round_trip_matches_the_store() {
    let db = database().await;
    let repos = Repositories::new(db.pool());

    let id = repos
        .authors
        .insert(&Author::new("Jane", "Doe", "US"))
        .await
        .unwrap();
    let book_id = repos.books.insert(&Book::new("X", "Y", id)).await.unwrap();

    let book = repos.books.get_by_id(book_id).await.unwrap().unwrap();
    assert_eq!(book.author_id, id);
    assert_eq!(repos.books.get_all_authors().await.unwrap().len(), 1);
    assert_eq!(repos.loans.get_all_books().await.unwrap(), vec![book.clone()]);
    assert!(repos.loans.get_all_members().await.unwrap().is_empty());

    repos.books.delete(&book).await.unwrap();
    assert!(repos.books.get_by_id(book_id).await.unwrap().is_none());
}

#[tokio::test]
async fn listing_twice_without_writes_is_stable() {
    let db = database().await;
    let repos = Repositories::new(db.pool());

    for name in ["Ana", "Bea", "Cai"] {
        repos
            .authors
            .insert(&Author::new(name, "Test", "PE"))
            .await
            .unwrap();
    }

    let first = repos.authors.get_all().await.unwrap();
    let second = repos.authors.get_all().await.unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_calls_share_the_pool() {
    let db = database().await;
    let repos = Repositories::new(db.pool());

    let one = Author::new("One", "A", "PE");
    let two = Author::new("Two", "B", "PE");
    let (a, b) = tokio::join!(repos.authors.insert(&one), repos.authors.insert(&two));
    assert_ne!(a.unwrap(), b.unwrap());
    assert_eq!(repos.authors.get_all().await.unwrap().len(), 2);
}
