//! Conversation dispatch for the Angstrom chat gateway.
//!
//! Each chat turn is routed to one of two personas:
//!
//! 1. **Pinned**: the client already knows the mode, so the turn goes
//!    straight to generation under that mode's instruction
//! 2. **Unpinned**: one classification call on the latest user turn picks
//!    the mode, then generation runs on the full history
//!
//! Inference failures never reach the visitor as errors. They become one of
//! two canned replies, depending on whether the site is misconfigured or
//! the provider is just unavailable.

pub mod dispatcher;
pub mod instructions;

#[cfg(test)]
mod test_helpers;

pub use dispatcher::{
    DispatchError, DispatchRequest, DispatchResult, Dispatcher, Fallback, Reply, Stage,
    resolve_classification,
};
