use hectane_client::{Authenticator, Client, Session, SessionAuthenticator};
use hectane_types::{Domain, Folder, NewDomain, NewFolder, NewUser, User};

use crate::store::RecordStore;

/// Services a controller needs, passed in explicitly on every call.
pub struct Context<A = SessionAuthenticator> {
    pub client: Client,
    pub session: Session<A>,
    pub folders: RecordStore<NewFolder, Folder>,
    pub users: RecordStore<NewUser, User>,
    pub domains: RecordStore<NewDomain, Domain>,
}

impl Context<SessionAuthenticator> {
    pub fn new(client: Client) -> Self {
        let session = client.session();
        Self::with_session(client, session)
    }
}

impl<A: Authenticator> Context<A> {
    pub fn with_session(client: Client, session: Session<A>) -> Self {
        Self {
            client,
            session,
            folders: RecordStore::new(),
            users: RecordStore::new(),
            domains: RecordStore::new(),
        }
    }
}
