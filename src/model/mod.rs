//! Domain models shared by the data, service and command layers.
//!
//! Models here are plain data: the persisted settings documents, the message
//! shape the relay works on, and the request/response types exchanged with the
//! translation providers.

pub mod channel_registry;
pub mod message;
pub mod settings;
pub mod translation;
