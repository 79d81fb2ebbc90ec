//! Loan screen form

use validator::Validate;

use super::{Controller, FieldErrors, Form};
use crate::{
    dao::LoanDao,
    models::{Book, Loan, Member, UNSAVED_ID},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub loaned_on: String,
    pub returned_on: String,
    pub book: Option<Book>,
    pub member: Option<Member>,
    /// Choices offered by the book picker
    pub books: Vec<Book>,
    /// Choices offered by the member picker
    pub members: Vec<Member>,
}

#[derive(Debug, Clone)]
pub enum LoanInput {
    LoanedOn(String),
    ReturnedOn(String),
    Book(Option<Book>),
    Member(Option<Member>),
    ChoicesLoaded {
        books: Vec<Book>,
        members: Vec<Member>,
    },
}

#[derive(Validate)]
struct LoanDraft {
    #[validate(length(min = 1, message = "Loan date is required"))]
    loaned_on: String,
    #[validate(length(min = 1, message = "Return date is required"))]
    returned_on: String,
    #[validate(required(message = "A book must be selected"))]
    book_id: Option<i64>,
    #[validate(required(message = "A member must be selected"))]
    member_id: Option<i64>,
}

impl Form for LoanForm {
    type Record = Loan;
    type Dao = LoanDao;
    type Input = LoanInput;

    const NOUN: &'static str = "loan";
    const COLLECTION: &'static str = "loans";

    fn apply(self, input: LoanInput) -> Self {
        match input {
            LoanInput::LoanedOn(loaned_on) => Self { loaned_on, ..self },
            LoanInput::ReturnedOn(returned_on) => Self {
                returned_on,
                ..self
            },
            LoanInput::Book(book) => Self { book, ..self },
            LoanInput::Member(member) => Self { member, ..self },
            LoanInput::ChoicesLoaded { books, members } => Self {
                books,
                members,
                ..self
            },
        }
    }

    fn load(self, loan: &Loan) -> Self {
        let book = self.books.iter().find(|book| book.id == loan.book_id).cloned();
        let member = self
            .members
            .iter()
            .find(|member| member.id == loan.member_id)
            .cloned();
        Self {
            loaned_on: loan.loaned_on.clone(),
            returned_on: loan.returned_on.clone().unwrap_or_default(),
            book,
            member,
            ..self
        }
    }

    fn clear(self) -> Self {
        Self {
            books: self.books,
            members: self.members,
            ..Self::default()
        }
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::check(&LoanDraft {
            loaned_on: self.loaned_on.trim().to_string(),
            returned_on: self.returned_on.trim().to_string(),
            book_id: self.book.as_ref().map(|book| book.id),
            member_id: self.member.as_ref().map(|member| member.id),
        })
    }

    fn build(&self, staged: Option<&Loan>) -> Loan {
        let returned_on =
            (!self.returned_on.trim().is_empty()).then(|| self.returned_on.clone());
        Loan {
            id: staged.map_or(UNSAVED_ID, |loan| loan.id),
            book_id: self.book.as_ref().map_or(0, |book| book.id),
            member_id: self.member.as_ref().map_or(0, |member| member.id),
            loaned_on: self.loaned_on.clone(),
            returned_on,
        }
    }

    fn subject(loan: &Loan) -> String {
        format!("Loan of book {} to member {}", loan.book_id, loan.member_id)
    }
}

impl Controller<LoanForm> {
    /// Refresh the book and member pickers.
    pub async fn load_choices(&self) {
        let books = match self.repository().get_all_books().await {
            Ok(books) => books,
            Err(err) => return self.fail("load books for", &err),
        };
        let members = match self.repository().get_all_members().await {
            Ok(members) => members,
            Err(err) => return self.fail("load members for", &err),
        };
        self.input(LoanInput::ChoicesLoaded { books, members });
    }
}
