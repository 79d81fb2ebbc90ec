//! Member screen form

use validator::Validate;

use super::{FieldErrors, Form};
use crate::{
    dao::MemberDao,
    models::{Member, UNSAVED_ID},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub first_name: String,
    pub last_name: String,
    pub registered_on: String,
}

#[derive(Debug, Clone)]
pub enum MemberInput {
    FirstName(String),
    LastName(String),
    RegisteredOn(String),
}

#[derive(Validate)]
struct MemberDraft {
    #[validate(length(min = 1, message = "First name is required"))]
    first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    last_name: String,
    #[validate(length(min = 1, message = "Registration date is required"))]
    registered_on: String,
}

impl Form for MemberForm {
    type Record = Member;
    type Dao = MemberDao;
    type Input = MemberInput;

    const NOUN: &'static str = "member";
    const COLLECTION: &'static str = "members";

    fn apply(self, input: MemberInput) -> Self {
        match input {
            MemberInput::FirstName(first_name) => Self { first_name, ..self },
            MemberInput::LastName(last_name) => Self { last_name, ..self },
            MemberInput::RegisteredOn(registered_on) => Self {
                registered_on,
                ..self
            },
        }
    }

    fn load(self, member: &Member) -> Self {
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            registered_on: member.registered_on.clone(),
        }
    }

    fn clear(self) -> Self {
        Self::default()
    }

    fn validate(&self) -> FieldErrors {
        FieldErrors::check(&MemberDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            registered_on: self.registered_on.trim().to_string(),
        })
    }

    fn build(&self, staged: Option<&Member>) -> Member {
        Member {
            id: staged.map_or(UNSAVED_ID, |member| member.id),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            registered_on: self.registered_on.clone(),
        }
    }

    fn subject(member: &Member) -> String {
        format!("Member {}", member.full_name())
    }
}
