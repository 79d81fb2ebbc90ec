//! Data-access behaviour: round trips, replace semantics and cascades

use library_loans::{
    dao::Dao,
    models::{Author, Book, Loan, Member},
};

use crate::common::{daos, database, seed};

#[tokio::test]
async fn insert_assigns_a_key_and_round_trips() {
    let db = database().await;
    let daos = daos(&db);

    let author = Author::new("Jane", "Doe", "US");
    let id = daos.authors.insert_or_replace(&author).await.unwrap();
    assert!(id > 0);

    let stored = daos.authors.get_by_id(id).await.unwrap().expect("author stored");
    assert_eq!(stored, Author { id, ..author });
}

#[tokio::test]
async fn keys_grow_in_insertion_order() {
    let db = database().await;
    let daos = daos(&db);

    let first = daos
        .members
        .insert_or_replace(&Member::new("A", "One", "2024-01-01"))
        .await
        .unwrap();
    let second = daos
        .members
        .insert_or_replace(&Member::new("B", "Two", "2024-01-02"))
        .await
        .unwrap();
    assert!(second > first);

    let names: Vec<_> = daos
        .members
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.first_name)
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn insert_with_existing_key_replaces_the_row() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    let renamed = Author {
        nationality: "UK".into(),
        ..seeded.author.clone()
    };
    let id = daos.authors.insert_or_replace(&renamed).await.unwrap();

    assert_eq!(id, seeded.author.id);
    assert_eq!(daos.authors.get_all().await.unwrap(), vec![renamed]);
    // Replacing a parent must not cascade into its children
    assert_eq!(daos.books.get_all().await.unwrap(), vec![seeded.book]);
}

#[tokio::test]
async fn update_changes_fields_but_not_the_key() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    let edited = Loan {
        returned_on: None,
        loaned_on: "2024-06-01".into(),
        ..seeded.loan.clone()
    };
    daos.loans.update(&edited).await.unwrap();

    let stored = daos.loans.get_by_id(seeded.loan.id).await.unwrap().unwrap();
    assert_eq!(stored, edited);
}

#[tokio::test]
async fn update_of_unknown_key_is_silent() {
    let db = database().await;
    let daos = daos(&db);

    let ghost = Book {
        id: 999,
        ..Book::new("Ghost", "None", 1)
    };
    daos.books.update(&ghost).await.unwrap();
    assert!(daos.books.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn book_must_reference_an_existing_author() {
    let db = database().await;
    let daos = daos(&db);

    let err = daos
        .books
        .insert_or_replace(&Book::new("Orphan", "Drama", 0))
        .await
        .unwrap_err();
    assert!(err.is_foreign_key_violation());
}

#[tokio::test]
async fn loan_must_reference_existing_book_and_member() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    let no_member = Loan::new(seeded.book.id, 999, "2024-05-01", None);
    assert!(daos.loans.insert_or_replace(&no_member).await.is_err());

    let no_book = Loan::new(999, seeded.member.id, "2024-05-01", None);
    assert!(daos.loans.insert_or_replace(&no_book).await.is_err());
}

#[tokio::test]
async fn deleting_an_author_removes_its_books_and_their_loans() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    daos.authors.delete(&seeded.author).await.unwrap();

    assert!(daos.authors.get_by_id(seeded.author.id).await.unwrap().is_none());
    assert!(daos.books.get_all().await.unwrap().is_empty());
    assert!(daos.loans.get_all().await.unwrap().is_empty());
    assert_eq!(daos.members.get_all().await.unwrap(), vec![seeded.member]);
}

#[tokio::test]
async fn deleting_a_book_or_member_removes_their_loans() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    daos.members.delete(&seeded.member).await.unwrap();
    assert!(daos.loans.get_by_id(seeded.loan.id).await.unwrap().is_none());

    let mut member = Member::new("Ana", "Paz", "2024-04-01");
    member.id = daos.members.insert_or_replace(&member).await.unwrap();
    let loan = Loan::new(seeded.book.id, member.id, "2024-05-02", None);
    let loan_id = daos.loans.insert_or_replace(&loan).await.unwrap();

    daos.books.delete(&seeded.book).await.unwrap();
    assert!(daos.loans.get_by_id(loan_id).await.unwrap().is_none());
    assert_eq!(daos.members.get_all().await.unwrap(), vec![member]);
}

#[tokio::test]
async fn delete_of_unknown_key_is_silent() {
    let db = database().await;
    let daos = daos(&db);

    let ghost = Author {
        id: 404,
        ..Author::new("No", "Body", "XX")
    };
    daos.authors.delete(&ghost).await.unwrap();
}

#[tokio::test]
async fn loan_lookup_by_book_and_member() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    let found = daos
        .loans
        .get_by_book_and_member(seeded.book.id, seeded.member.id)
        .await
        .unwrap();
    assert_eq!(found, Some(seeded.loan));

    let missing = daos
        .loans
        .get_by_book_and_member(seeded.book.id, seeded.member.id + 1)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn pickers_list_related_tables() {
    let db = database().await;
    let daos = daos(&db);
    let seeded = seed(&daos).await;

    assert_eq!(daos.books.list_authors().await.unwrap(), vec![seeded.author]);
    assert_eq!(daos.loans.list_books().await.unwrap(), vec![seeded.book]);
    assert_eq!(daos.loans.list_members().await.unwrap(), vec![seeded.member]);
}
