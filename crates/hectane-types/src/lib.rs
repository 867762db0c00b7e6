//! Wire types shared by the Hectane client, console and test backend.

pub mod api;
pub mod models;

pub use api::{LoginRequest, NewDomain, NewFolder, NewUser};
pub use models::{Domain, Folder, Identified, Message, User};
