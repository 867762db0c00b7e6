use crate::adapters::{DomainAdapter, FolderAdapter, MessageAdapter, UserAdapter};
use crate::ajax::Ajax;
use crate::authenticator::SessionAuthenticator;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::session::Session;

/// Entry point bundling the HTTP handle with the configured endpoints.
///
/// Every adapter and the authenticator handed out share one cookie jar.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    ajax: Ajax,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let ajax = Ajax::new(&config)?;
        Ok(Self { config, ajax })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn ajax(&self) -> &Ajax {
        &self.ajax
    }

    pub fn authenticator(&self) -> SessionAuthenticator {
        SessionAuthenticator::new(self.ajax.clone(), &self.config)
    }

    /// A fresh, unauthenticated session.
    pub fn session(&self) -> Session<SessionAuthenticator> {
        Session::new(self.authenticator())
    }

    pub fn folders(&self) -> FolderAdapter {
        FolderAdapter::folders(self.ajax.clone(), self.config.folder_list)
    }

    pub fn users(&self) -> UserAdapter {
        UserAdapter::users(self.ajax.clone())
    }

    pub fn domains(&self) -> DomainAdapter {
        DomainAdapter::domains(self.ajax.clone())
    }

    pub fn messages(&self) -> MessageAdapter {
        MessageAdapter::new(self.ajax.clone())
    }
}
