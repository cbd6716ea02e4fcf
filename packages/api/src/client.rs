//! HTTP client for the notes backend.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NotesResponse};

/// Talks to the backend configured in [`ApiConfig`].
///
/// One call is one request: there is no retry and no timeout.
#[derive(Debug, Clone)]
pub struct NotesClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl NotesClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET <base>/allNotes`.
    ///
    /// A response without `content` (or with `content: null`) is a successful,
    /// empty result.
    pub async fn fetch_all_notes(&self) -> Result<Vec<Note>, ApiError> {
        let url = self.config.notes_endpoint();
        tracing::debug!("Fetching notes from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        // Decode by hand so a bad body is reported as such, not as a transport error.
        let body = response.bytes().await?;
        let parsed: NotesResponse = serde_json::from_slice(&body)?;
        let notes = parsed.into_notes();
        tracing::debug!("Fetched {} notes", notes.len());
        Ok(notes)
    }

    /// `POST <base>/addNote` with the draft as JSON.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError> {
        let url = self.config.add_note_endpoint();
        tracing::debug!("Posting note {:?} to {}", draft.title, url);

        let response = self.http.post(&url).json(draft).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
