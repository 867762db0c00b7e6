use hectane_types::Message;

use super::{FindAll, ListShape};
use crate::ajax::Ajax;
use crate::error::Result;

/// Read-only access to the messages of a folder.
#[derive(Debug, Clone)]
pub struct MessageAdapter {
    ajax: Ajax,
}

impl MessageAdapter {
    pub fn new(ajax: Ajax) -> Self {
        Self { ajax }
    }

    pub fn folder_url(folder_id: i64) -> String {
        format!("/api/folders/{folder_id}/messages")
    }

    /// Newest first, as ordered by the backend.
    pub async fn find_in_folder(&self, folder_id: i64) -> Result<Vec<Message>> {
        let body = self.ajax.get(&Self::folder_url(folder_id)).await?;
        ListShape::Bare.extract(body)
    }

    pub fn in_folder(&self, folder_id: i64) -> FolderMessages {
        FolderMessages {
            adapter: self.clone(),
            folder_id,
        }
    }
}

/// A [`MessageAdapter`] bound to one folder.
#[derive(Debug, Clone)]
pub struct FolderMessages {
    adapter: MessageAdapter,
    folder_id: i64,
}

impl FolderMessages {
    pub fn folder_id(&self) -> i64 {
        self.folder_id
    }
}

impl FindAll for FolderMessages {
    type Record = Message;

    async fn find_all(&self) -> Result<Vec<Message>> {
        self.adapter.find_in_folder(self.folder_id).await
    }
}
