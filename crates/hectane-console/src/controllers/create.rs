use tracing::{info, warn};

use hectane_client::adapters::CreateRecord;
use hectane_types::Identified;

use crate::dialog::{DialogState, InvalidTransition, Settled, Submission};
use crate::form::Form;
use crate::store::RecordStore;

/// A dialog that creates one record from its form when confirmed.
#[derive(Debug, Clone, Default)]
pub struct CreateDialog<F> {
    state: DialogState,
    pub form: F,
}

impl<F: Form> CreateDialog<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Show the dialog with blank fields.
    pub fn open(&mut self) -> Result<(), InvalidTransition> {
        self.state.open()?;
        self.form = F::default();
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), InvalidTransition> {
        self.state.close()
    }

    /// Save the form through `adapter`. The draft sits in `store` as a
    /// tentative record until the backend answers; it is committed on
    /// success and discarded on failure or if this future is dropped.
    pub async fn confirm<A>(
        &mut self,
        adapter: &A,
        store: &mut RecordStore<F::Draft, A::Record>,
    ) -> Result<Settled, InvalidTransition>
    where
        A: CreateRecord<Draft = F::Draft>,
        A::Record: Identified,
    {
        let submission = Submission::begin(&mut self.state)?;
        let draft = self.form.draft();
        let held = store.hold(draft.clone());

        match adapter.create_record(&draft).await {
            Ok(record) => {
                info!(id = record.id(), "record created");
                held.commit(record);
                submission.resolve();
                Ok(Settled::Succeeded)
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                drop(held);
                submission.reject(e.message());
                Ok(Settled::Failed)
            }
        }
    }
}
