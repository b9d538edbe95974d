//! # Framework Errors
//!
//! Common error types used throughout the actor framework.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the request reached the actor but named an unknown id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameworkError::NotFound(_))
    }
}
