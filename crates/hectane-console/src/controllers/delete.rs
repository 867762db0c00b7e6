use tracing::{info, warn};

use hectane_client::adapters::DeleteRecord;
use hectane_types::Identified;

use crate::dialog::{DialogState, InvalidTransition, Settled, Submission};
use crate::store::RecordStore;

/// Confirmation dialog for deleting one record.
#[derive(Debug, Clone)]
pub struct DeleteDialog<T> {
    state: DialogState,
    target: Option<T>,
}

impl<T> Default for DeleteDialog<T> {
    fn default() -> Self {
        Self {
            state: DialogState::Closed,
            target: None,
        }
    }
}

impl<T: Identified> DeleteDialog<T> {
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

    /// The record awaiting confirmation.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Ask for confirmation before deleting `record`.
    pub fn show(&mut self, record: T) -> Result<(), InvalidTransition> {
        self.state.open()?;
        self.target = Some(record);
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), InvalidTransition> {
        self.state.close()?;
        self.target = None;
        Ok(())
    }

    pub async fn confirm<A, D>(
        &mut self,
        adapter: &A,
        store: &mut RecordStore<D, T>,
    ) -> Result<Settled, InvalidTransition>
    where
        A: DeleteRecord,
    {
        let Some(id) = self.target.as_ref().map(Identified::id) else {
            return Err(InvalidTransition {
                action: "confirm",
                state: "closed",
            });
        };
        let submission = Submission::begin(&mut self.state)?;

        match adapter.delete_record(id).await {
            Ok(()) => {
                info!(id, "record deleted");
                store.remove(id);
                self.target = None;
                submission.resolve();
                Ok(Settled::Succeeded)
            }
            Err(e) => {
                warn!(id, error = %e, "delete failed");
                submission.reject(e.message());
                Ok(Settled::Failed)
            }
        }
    }
}
