//! # Load generations
//!
//! A view may start a new load before the previous one has answered (the base
//! URL changed) or may go away while a request is still in flight. Each load
//! therefore carries a [`LoadTicket`] taken from the view's [`LoadGuard`]:
//!
//! - [`LoadGuard::begin`] starts a new generation, which makes every earlier
//!   ticket stale.
//! - [`LoadGuard::retire`] makes every outstanding ticket stale without
//!   starting a new load (teardown).
//! - [`load_notes`] only hands back a collection if its ticket is still current
//!   once the response has arrived.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::client::NotesClient;
use crate::collection::NotesCollection;

/// Generation counter shared by every load of one view.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    generation: Arc<AtomicU64>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. Earlier tickets stop being current.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Invalidate every outstanding ticket.
    pub fn retire(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proof that a load was the latest one when it started.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Fetch all notes for the given ticket.
///
/// Failures become an empty collection. Returns `None` when the ticket went
/// stale while the request was outstanding; the caller must then leave its
/// state alone.
pub async fn load_notes(client: &NotesClient, ticket: LoadTicket) -> Option<NotesCollection> {
    let result = client.fetch_all_notes().await;

    if !ticket.is_current() {
        match &result {
            Ok(notes) => tracing::debug!(
                "Discarding {} notes from superseded load #{} ({})",
                notes.len(),
                ticket.generation(),
                client.config().notes_endpoint()
            ),
            Err(e) => tracing::debug!(
                "Discarding failure from superseded load #{} ({}): {}",
                ticket.generation(),
                client.config().notes_endpoint(),
                e
            ),
        }
        return None;
    }
    Some(NotesCollection::from_fetch(result))
}
