use hectane_types::Message;

use super::ListState;
use crate::context::Context;

/// Message list of the selected folder.
#[derive(Debug, Clone, Default)]
pub struct FolderView {
    pub list: ListState,
    folder_id: Option<i64>,
    messages: Vec<Message>,
}

impl FolderView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder_id(&self) -> Option<i64> {
        self.folder_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_unread).count()
    }

    /// Switch to `folder_id` and fetch its messages. On failure the view is
    /// left empty.
    pub async fn open<A>(&mut self, ctx: &Context<A>, folder_id: i64) -> bool {
        self.folder_id = Some(folder_id);
        self.messages.clear();
        let adapter = ctx.client.messages().in_folder(folder_id);
        match self.list.load(&adapter).await {
            Some(messages) => {
                self.messages = messages;
                true
            }
            None => false,
        }
    }
}
