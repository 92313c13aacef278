//! Narrow interface to the external generative-AI backend.
//!
//! The shell treats generation as a black-box request/response service. Apps
//! talk to [`GenerativeBackend`] only; the default implementation is inert so
//! the desktop works without any API credentials.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by the generative backend.
pub enum BackendError {
    /// No backend is configured for this deployment.
    #[error("generative backend is not configured")]
    Unavailable,
    /// The backend rejected or failed the request.
    #[error("generative request failed: {0}")]
    Request(String),
}

/// Request/response text generation service.
pub trait GenerativeBackend {
    /// Generates a text completion for the given prompt.
    fn generate_text(&self, prompt: &str) -> LocalBoxFuture<'static, Result<String, BackendError>>;
}

/// Backend used when no provider is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertBackend;

impl GenerativeBackend for InertBackend {
    fn generate_text(&self, prompt: &str) -> LocalBoxFuture<'static, Result<String, BackendError>> {
        let _ = prompt;
        Box::pin(async { Err(BackendError::Unavailable) })
    }
}

/// Returns the configured generative backend for this host.
pub fn generative_backend() -> Rc<dyn GenerativeBackend> {
    Rc::new(InertBackend)
}
