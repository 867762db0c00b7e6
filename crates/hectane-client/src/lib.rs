//! HTTP client for the Hectane administration API.
//!
//! [`Client`] hands out the session authenticator and one adapter per
//! resource, all sharing a cookie-carrying [`Ajax`] handle:
//!
//! ```no_run
//! # async fn run() -> hectane_client::Result<()> {
//! use hectane_client::adapters::{CreateRecord, FindAll};
//! use hectane_types::NewFolder;
//!
//! let client = hectane_client::Client::from_env()?;
//! let mut session = client.session();
//! session.authenticate("admin", "secret").await?;
//!
//! let folders = client.folders();
//! folders.create_record(&NewFolder { name: "Invoices".into() }).await?;
//! for folder in folders.find_all().await? {
//!     println!("{} {}", folder.id, folder.name);
//! }
//! session.invalidate().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod ajax;
pub mod authenticator;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use ajax::Ajax;
pub use authenticator::{Authenticator, SessionAuthenticator};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use session::{Session, SessionData};
