//! Console state for the Hectane administration client.
//!
//! Controllers own the transient state of a screen (form fields, dialog
//! state, loading flag, error message) and drive the adapters from
//! `hectane-client`. Shared services travel in a [`Context`].

pub mod context;
pub mod controllers;
pub mod dialog;
pub mod form;
pub mod store;

pub use context::Context;
pub use controllers::Route;
pub use dialog::{DialogState, InvalidTransition, Settled};
pub use store::RecordStore;
