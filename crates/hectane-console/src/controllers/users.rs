use tracing::{info, warn};

use hectane_client::adapters::DeleteRecord;
use hectane_types::User;

use super::{CreateDialog, ListState};
use crate::context::Context;
use crate::dialog::{InvalidTransition, Settled};
use crate::form::UserForm;

/// Admin view of the user accounts. Users are deleted without confirmation.
#[derive(Debug, Clone, Default)]
pub struct UsersController {
    pub list: ListState,
    pub new_dialog: CreateDialog<UserForm>,
    error_message: Option<String>,
}

impl UsersController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A>(&mut self, ctx: &mut Context<A>) -> bool {
        match self.list.load(&ctx.client.users()).await {
            Some(users) => {
                ctx.users.replace_saved(users);
                true
            }
            None => false,
        }
    }

    pub fn users<'a, A>(&self, ctx: &'a Context<A>) -> Vec<&'a User> {
        ctx.users.saved().collect()
    }

    /// Error from the last immediate delete, if it failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn show_new_dialog(&mut self) -> Result<(), InvalidTransition> {
        self.new_dialog.open()
    }

    pub async fn create<A>(&mut self, ctx: &mut Context<A>) -> Result<Settled, InvalidTransition> {
        let adapter = ctx.client.users();
        self.new_dialog.confirm(&adapter, &mut ctx.users).await
    }

    pub async fn delete<A>(&mut self, ctx: &mut Context<A>, id: i64) -> Settled {
        match ctx.client.users().delete_record(id).await {
            Ok(()) => {
                info!(id, "user deleted");
                ctx.users.remove(id);
                self.error_message = None;
                Settled::Succeeded
            }
            Err(e) => {
                warn!(id, error = %e, "user delete failed");
                self.error_message = Some(e.message());
                Settled::Failed
            }
        }
    }
}
