//! Screen controller: validates, persists through the repository and
//! republishes the resulting state.

use tokio::sync::watch;

use super::{
    state::{Action, ViewState},
    Form,
};
use crate::{error::AppError, models::Entity, repository::Repository};

/// Drives one screen.
///
/// State lives in a `watch` channel so the presentation layer can either read
/// a snapshot with [`Controller::state`] or follow every change through
/// [`Controller::subscribe`]. Storage failures end up in the state's status
/// and are never returned to the caller.
pub struct Controller<F: Form> {
    repository: Repository<F::Dao>,
    state: watch::Sender<ViewState<F>>,
}

impl<F: Form> Controller<F> {
    pub fn new(repository: Repository<F::Dao>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { repository, state }
    }

    pub fn repository(&self) -> &Repository<F::Dao> {
        &self.repository
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState<F> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<F>> {
        self.state.subscribe()
    }

    /// Replace the state with `state.reduce(action)` and notify subscribers.
    pub fn dispatch(&self, action: Action<F>) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(action);
        });
    }

    pub fn input(&self, input: F::Input) {
        self.dispatch(Action::Input(input));
    }

    /// Load `record` into the form; the next submit updates it.
    pub fn begin_edit(&self, record: F::Record) {
        self.dispatch(Action::BeginEdit(record));
    }

    pub fn cancel_edit(&self) {
        self.dispatch(Action::CancelEdit);
    }

    /// Publish the error of every blank required field. True when there are none.
    pub fn validate(&self) -> bool {
        let errors = self.state.borrow().form.validate();
        let valid = errors.is_empty();
        self.dispatch(Action::Validated(errors));
        valid
    }

    /// Create or update depending on the form mode.
    pub async fn submit(&self) {
        let editing = self.state.borrow().mode.is_editing();
        if editing {
            self.update().await;
        } else {
            self.create().await;
        }
    }

    pub async fn create(&self) {
        if !self.validate() {
            return;
        }

        let record = self.state.borrow().form.build(None);
        match self.repository.insert(&record).await {
            Ok(id) => {
                tracing::info!("Created {} {}", F::NOUN, id);
                let message = format!("{} registered successfully.", F::subject(&record));
                self.dispatch(Action::Saved(message));
                self.refresh().await;
            }
            Err(err) => self.fail("register", &err),
        }
    }

    /// Persist the form over the staged record, keeping its key.
    pub async fn update(&self) {
        let valid = self.validate();
        let staged = self.state.borrow().mode.editing().cloned();
        if !valid {
            return;
        }
        let Some(staged) = staged else {
            tracing::debug!("No {} staged for update", F::NOUN);
            return;
        };

        let record = self.state.borrow().form.build(Some(&staged));
        match self.repository.update(&record).await {
            Ok(()) => {
                tracing::info!("Updated {} {}", F::NOUN, record.id());
                let message = format!("{} updated successfully.", F::subject(&record));
                self.dispatch(Action::Saved(message));
                self.refresh().await;
            }
            Err(err) => self.fail("update", &err),
        }
    }

    pub async fn delete(&self, record: F::Record) {
        match self.repository.delete(&record).await {
            Ok(()) => {
                tracing::info!("Deleted {} {}", F::NOUN, record.id());
                self.dispatch(Action::Deleted {
                    id: record.id(),
                    message: format!("{} deleted successfully.", F::subject(&record)),
                });
                self.refresh().await;
            }
            Err(err) => self.fail("delete", &err),
        }
    }

    /// Re-read every record into the list.
    pub async fn refresh(&self) {
        match self.repository.get_all().await {
            Ok(items) => self.dispatch(Action::Loaded(items)),
            Err(err) => {
                tracing::warn!("Failed to load {}: {}", F::COLLECTION, err);
                self.dispatch(Action::Failed(format!(
                    "Failed to load {}: {}",
                    F::COLLECTION,
                    err
                )));
            }
        }
    }

    pub(crate) fn fail(&self, verb: &str, err: &AppError) {
        tracing::warn!("Failed to {} {}: {}", verb, F::NOUN, err);
        self.dispatch(Action::Failed(format!("Failed to {} {}: {}", verb, F::NOUN, err)));
    }
}
