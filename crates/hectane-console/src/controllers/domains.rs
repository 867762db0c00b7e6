use hectane_types::Domain;

use super::{CreateDialog, DeleteDialog, ListState};
use crate::context::Context;
use crate::dialog::{InvalidTransition, Settled};
use crate::form::DomainForm;

#[derive(Debug, Clone, Default)]
pub struct DomainsController {
    pub list: ListState,
    pub new_dialog: CreateDialog<DomainForm>,
    pub delete_dialog: DeleteDialog<Domain>,
}

impl DomainsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A>(&mut self, ctx: &mut Context<A>) -> bool {
        match self.list.load(&ctx.client.domains()).await {
            Some(domains) => {
                ctx.domains.replace_saved(domains);
                true
            }
            None => false,
        }
    }

    pub fn domains<'a, A>(&self, ctx: &'a Context<A>) -> Vec<&'a Domain> {
        ctx.domains.saved().collect()
    }

    pub fn show_new_dialog(&mut self) -> Result<(), InvalidTransition> {
        self.new_dialog.open()
    }

    pub async fn create<A>(&mut self, ctx: &mut Context<A>) -> Result<Settled, InvalidTransition> {
        let adapter = ctx.client.domains();
        self.new_dialog.confirm(&adapter, &mut ctx.domains).await
    }

    pub fn show_delete_dialog(&mut self, domain: Domain) -> Result<(), InvalidTransition> {
        self.delete_dialog.show(domain)
    }

    pub async fn delete<A>(&mut self, ctx: &mut Context<A>) -> Result<Settled, InvalidTransition> {
        let adapter = ctx.client.domains();
        self.delete_dialog.confirm(&adapter, &mut ctx.domains).await
    }
}
