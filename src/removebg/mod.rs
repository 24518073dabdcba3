//! Upstream background-removal adapter.
//!
//! DESIGN
//! ======
//! The remove.bg HTTP API is the only party that ever sees the uploaded photo.
//! We always request a transparent-alpha PNG (no `bg_color` directive), so a
//! single upstream artifact stays reusable across every background color the
//! user tries locally. The [`BackgroundRemover`] trait is the seam that lets
//! route tests substitute a mock.

pub mod client;
pub mod types;

pub use client::RemoveBgClient;
pub use types::{RemoveBgError, RemovalOutput, UploadedImage};

/// Async trait for background removal. Enables mocking in tests.
#[async_trait::async_trait]
pub trait BackgroundRemover: Send + Sync {
    /// Send the uploaded image upstream and return the transparent result.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoveBgError`] when the transport fails or the upstream
    /// responds with a non-success status.
    async fn remove_background(&self, upload: &UploadedImage) -> Result<RemovalOutput, RemoveBgError>;
}
