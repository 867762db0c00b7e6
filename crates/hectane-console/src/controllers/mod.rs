//! Controllers behind each screen of the console.

mod create;
mod delete;
mod domains;
mod folders;
mod header;
mod list;
mod login;
mod messages;
mod users;

use hectane_client::{Authenticator, Session};

pub use create::CreateDialog;
pub use delete::DeleteDialog;
pub use domains::DomainsController;
pub use folders::FolderSidebar;
pub use header::Header;
pub use list::ListState;
pub use login::LoginController;
pub use messages::FolderView;
pub use users::UsersController;

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Index,
}

impl Route {
    /// Everything but the login view requires an authenticated session.
    pub fn for_session<A: Authenticator>(session: &Session<A>) -> Self {
        if session.is_authenticated() {
            Route::Index
        } else {
            Route::Login
        }
    }
}
