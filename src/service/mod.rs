//! Service layer for relay and administration logic.
//!
//! Services sit between the Discord-facing layers (`bot`, `command`) and the data
//! layer. They are responsible for:
//!
//! - **Relay**: deciding whether a message is translated and producing the reply text
//! - **Administration**: mutating and persisting settings on behalf of the owner
//! - **Translation**: calling the configured provider with a bounded timeout
//! - **Sanitizing**: removing markup the provider cannot handle

pub mod admin;
pub mod relay;
pub mod sanitizer;
pub mod translation;
