//! Client side of the A2A task protocol.
//!
//! Discovers skills from the server's agent card and invokes them by posting
//! task envelopes to `/a2a/tasks/send`.

pub mod client;
pub mod config;
pub mod discovery;
pub mod invoker;
pub mod protocol;

pub use client::A2aClient;
pub use config::A2aConfig;
pub use discovery::fetch_catalog;
pub use invoker::A2aInvoker;
