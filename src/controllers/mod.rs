//! View-state controllers: one per screen, each holding the form being edited,
//! its validation errors, the last status message and the listed records.

pub mod author;
pub mod book;
pub mod controller;
pub mod loan;
pub mod member;
pub mod state;

pub use author::{AuthorForm, AuthorInput};
pub use book::{BookForm, BookInput};
pub use controller::Controller;
pub use loan::{LoanForm, LoanInput};
pub use member::{MemberForm, MemberInput};
pub use state::{Action, FieldErrors, FormMode, Status, ViewState};

use std::fmt;

use crate::{dao::Dao, models::Entity};

/// Field values of one screen and the rules that turn them into a record.
pub trait Form: Clone + Default + fmt::Debug + Send + Sync + 'static {
    type Record: Entity;
    type Dao: Dao<Entity = Self::Record>;
    /// A single user edit
    type Input: fmt::Debug + Send;

    /// Lower-case name used in failure messages, e.g. `author`
    const NOUN: &'static str;
    /// Lower-case plural used when listing fails, e.g. `authors`
    const COLLECTION: &'static str;

    fn apply(self, input: Self::Input) -> Self;

    /// Fill the fields from a stored record about to be edited.
    fn load(self, record: &Self::Record) -> Self;

    /// Blank every field. Picker choices survive.
    fn clear(self) -> Self;

    /// Every failing field at once, never just the first.
    fn validate(&self) -> FieldErrors;

    /// Record built from the current values. `staged` supplies the key to keep
    /// when editing; without it the record is new.
    fn build(&self, staged: Option<&Self::Record>) -> Self::Record;

    /// How messages name a record, e.g. `Author Jane Doe`
    fn subject(record: &Self::Record) -> String;
}
