//! # Angstrom Core
//!
//! Domain types, the inference provider trait, and error definitions for the
//! Angstrom chat gateway. This crate has **no framework dependencies**: it is
//! the model every other crate implements against.
//!
//! The chat flow is built from three pieces defined here:
//! - [`Message`]: one turn of a caller-owned conversation
//! - [`Mode`]: which persona governs the replies of a conversation
//! - [`Provider`]: the hosted model behind one capability, "given an
//!   instruction and a history, generate text"

pub mod error;
pub mod message;
pub mod mode;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, Result};
pub use message::{Message, Role};
pub use mode::Mode;
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
