//! Photo-session state machine.
//!
//! DESIGN
//! ======
//! One session per process, mutex-guarded in `AppState`. Transitions are
//! linear (idle → processing → done | error) and reset returns to idle from
//! any state. Exactly one removal operation may be in flight (single-flight);
//! preview recomputes are sequenced by a monotonically increasing token so a
//! stale composite arriving late can never overwrite a newer one.

use crate::specs;

/// Where the session is in the upload → removal flow.
///
/// The original UI never distinguished "uploading" from "processing", so both
/// collapse into [`ProcessingState::Processing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingState {
    Idle,
    Processing,
    Done,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A removal operation is already in flight.
    #[error("a removal operation is already in flight")]
    Busy,
}

/// Token identifying one preview recompute request. Only the most recently
/// issued token may commit its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewToken(u64);

/// Session state for the single current user.
#[derive(Debug)]
pub struct PhotoSession {
    state: ProcessingState,
    /// Data URI of the last successful removal. Superseded wholesale on
    /// re-upload, never mutated in place.
    result: Option<String>,
    /// Flattened preview for the current result + color pair.
    preview: Option<String>,
    error: Option<String>,
    color_id: String,
    size_id: String,
    preview_seq: u64,
}

impl PhotoSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ProcessingState::Idle,
            result: None,
            preview: None,
            error: None,
            color_id: "white".to_owned(),
            size_id: "1inch".to_owned(),
            preview_seq: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> ProcessingState {
        self.state
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn color_id(&self) -> &str {
        &self.color_id
    }

    #[must_use]
    pub fn size_id(&self) -> &str {
        &self.size_id
    }

    /// Begin a removal for a freshly selected file. Any prior result, preview
    /// and error are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Busy`] while another removal is in flight.
    pub fn begin_removal(&mut self) -> Result<(), SessionError> {
        if self.state == ProcessingState::Processing {
            return Err(SessionError::Busy);
        }
        self.result = None;
        self.preview = None;
        self.error = None;
        self.state = ProcessingState::Processing;
        Ok(())
    }

    /// Record the outcome of the in-flight removal.
    pub fn complete_removal(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(data_uri) => {
                self.result = Some(data_uri);
                self.error = None;
                self.state = ProcessingState::Done;
            }
            Err(message) => {
                self.result = None;
                self.error = Some(message);
                self.state = ProcessingState::Error;
            }
        }
    }

    /// Select a background color. Never changes `ProcessingState`; the stored
    /// preview is invalidated because it no longer agrees with the selection.
    pub fn select_color(&mut self, id: &str) -> bool {
        if specs::background_color(id).is_none() {
            return false;
        }
        if self.color_id != id {
            self.color_id = id.to_owned();
            self.preview = None;
        }
        true
    }

    /// Select an output size. Never changes `ProcessingState` and does not
    /// touch the preview (size only affects the next export).
    pub fn select_size(&mut self, id: &str) -> bool {
        if specs::photo_size(id).is_none() {
            return false;
        }
        self.size_id = id.to_owned();
        true
    }

    /// Issue a token for a preview recompute. Issuing supersedes every token
    /// handed out before.
    pub fn begin_preview(&mut self) -> PreviewToken {
        self.preview_seq += 1;
        PreviewToken(self.preview_seq)
    }

    /// Store a computed preview. Returns `false` (and stores nothing) when the
    /// token has been superseded — most-recent-wins.
    pub fn commit_preview(&mut self, token: PreviewToken, data_uri: String) -> bool {
        if token.0 != self.preview_seq {
            return false;
        }
        self.preview = Some(data_uri);
        true
    }

    /// Back to idle: clears result, preview and error.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PhotoSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
