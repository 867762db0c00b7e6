use tracing::warn;

use hectane_client::adapters::FindAll;

/// Loading flag and last error of a collection view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    loading: bool,
    error_message: Option<String>,
}

/// Clears the loading flag when the load ends, including when its future
/// is dropped.
struct Loading<'a>(&'a mut ListState);

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.loading = false;
    }
}

impl ListState {
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Fetch the collection. `None` means the load failed and the error
    /// message has been recorded.
    pub async fn load<A: FindAll>(&mut self, adapter: &A) -> Option<Vec<A::Record>> {
        self.error_message = None;
        self.loading = true;
        let loading = Loading(&mut *self);
        let result = adapter.find_all().await;
        drop(loading);

        match result {
            Ok(records) => Some(records),
            Err(e) => {
                warn!(error = %e, "load failed");
                self.error_message = Some(e.message());
                None
            }
        }
    }
}
