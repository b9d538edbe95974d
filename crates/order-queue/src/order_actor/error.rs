//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
///
/// An unknown order id is *not* an error: store operations report it as `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The store rejected the request (a hook returned an error).
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The order actor is gone or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

