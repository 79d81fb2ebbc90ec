//! Immutable screen state and the reducer that advances it.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use super::Form;
use crate::models::Entity;

/// Whether the next submit creates a record or rewrites a staged one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<T> {
    New,
    Editing(T),
}

impl<T> FormMode<T> {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            FormMode::Editing(record) => Some(record),
            FormMode::New => None,
        }
    }
}

/// Validation message per failing field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Run the `validator` rules of `draft` and collect every message.
    pub fn check(draft: &impl Validate) -> Self {
        match draft.validate() {
            Ok(()) => Self::default(),
            Err(errors) => errors.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .iter()
                    .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
            .collect();
        Self(fields)
    }
}

/// Outcome of the last persistence attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub success: bool,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Everything a screen renders.
#[derive(Debug, Clone)]
pub struct ViewState<F: Form> {
    pub form: F,
    pub errors: FieldErrors,
    pub mode: FormMode<F::Record>,
    pub status: Option<Status>,
    pub items: Vec<F::Record>,
}

impl<F: Form> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            form: F::default(),
            errors: FieldErrors::default(),
            mode: FormMode::New,
            status: None,
            items: Vec::new(),
        }
    }
}

/// State transitions understood by [`ViewState::reduce`].
#[derive(Debug)]
pub enum Action<F: Form> {
    Input(F::Input),
    BeginEdit(F::Record),
    CancelEdit,
    Validated(FieldErrors),
    /// A create or update went through: back to a blank `New` form.
    Saved(String),
    Deleted { id: i64, message: String },
    Failed(String),
    /// Fresh list, replacing the previous one wholesale.
    Loaded(Vec<F::Record>),
}

impl<F: Form> ViewState<F> {
    pub fn reduce(self, action: Action<F>) -> Self {
        match action {
            Action::Input(input) => Self {
                form: self.form.apply(input),
                ..self
            },
            Action::BeginEdit(record) => Self {
                form: self.form.load(&record),
                errors: FieldErrors::default(),
                mode: FormMode::Editing(record),
                ..self
            },
            Action::CancelEdit => self.blank(),
            Action::Validated(errors) => Self { errors, ..self },
            Action::Saved(message) => Self {
                status: Some(Status::success(message)),
                ..self.blank()
            },
            Action::Deleted { id, message } => {
                let staged = self.mode.editing().is_some_and(|record| record.id() == id);
                let next = if staged { self.blank() } else { self };
                Self {
                    status: Some(Status::success(message)),
                    ..next
                }
            }
            Action::Failed(message) => Self {
                status: Some(Status::failure(message)),
                ..self
            },
            Action::Loaded(items) => Self { items, ..self },
        }
    }

    fn blank(self) -> Self {
        Self {
            form: self.form.clear(),
            errors: FieldErrors::default(),
            mode: FormMode::New,
            ..self
        }
    }
}
