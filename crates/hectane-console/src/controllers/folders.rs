use hectane_types::Folder;

use super::{CreateDialog, DeleteDialog, ListState};
use crate::context::Context;
use crate::dialog::{InvalidTransition, Settled};
use crate::form::FolderForm;

/// Sidebar listing the user's folders.
#[derive(Debug, Clone, Default)]
pub struct FolderSidebar {
    pub list: ListState,
    pub new_dialog: CreateDialog<FolderForm>,
    pub delete_dialog: DeleteDialog<Folder>,
}

impl FolderSidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A>(&mut self, ctx: &mut Context<A>) -> bool {
        match self.list.load(&ctx.client.folders()).await {
            Some(folders) => {
                ctx.folders.replace_saved(folders);
                true
            }
            None => false,
        }
    }

    pub fn folders<'a, A>(&self, ctx: &'a Context<A>) -> Vec<&'a Folder> {
        ctx.folders.saved().collect()
    }

    pub fn show_new_dialog(&mut self) -> Result<(), InvalidTransition> {
        self.new_dialog.open()
    }

    pub async fn create<A>(&mut self, ctx: &mut Context<A>) -> Result<Settled, InvalidTransition> {
        let adapter = ctx.client.folders();
        self.new_dialog.confirm(&adapter, &mut ctx.folders).await
    }

    pub fn show_delete_dialog(&mut self, folder: Folder) -> Result<(), InvalidTransition> {
        self.delete_dialog.show(folder)
    }

    pub async fn delete<A>(&mut self, ctx: &mut Context<A>) -> Result<Settled, InvalidTransition> {
        let adapter = ctx.client.folders();
        self.delete_dialog.confirm(&adapter, &mut ctx.folders).await
    }
}
