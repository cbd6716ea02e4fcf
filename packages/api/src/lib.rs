//! # API crate — client side of the notes backend
//!
//! Everything the front end needs to talk to the notes backend lives here, kept
//! free of any UI framework so it can be exercised natively in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ApiConfig`]: the backend base URL, loaded from `notes.toml` / `NOTES_*` env natively or baked in at build time on WASM |
//! | [`models`] | [`Note`], the validated [`NotesResponse`] schema and the [`NoteDraft`] submitted by the creation form |
//! | [`client`] | [`NotesClient`]: `GET /allNotes` and `POST /addNote` over `reqwest` |
//! | [`error`] | [`ApiError`]: every way a request can fail |
//! | [`collection`] | [`NotesCollection`]: the displayed snapshot, empty on any failure |
//! | [`loader`] | [`LoadGuard`] / [`LoadTicket`]: generation tokens that discard superseded responses |
//!
//! ## Typical flow
//!
//! ```no_run
//! # async fn run() {
//! use api::{load_notes, ApiConfig, LoadGuard, NotesClient};
//!
//! let guard = LoadGuard::default();
//! let client = NotesClient::new(ApiConfig::new("https://notes.example.com"));
//! if let Some(notes) = load_notes(&client, guard.begin()).await {
//!     println!("{} notes", notes.len());
//! }
//! # }
//! ```

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

pub use client::NotesClient;
pub use collection::NotesCollection;
pub use config::ApiConfig;
pub use error::ApiError;
pub use loader::{load_notes, LoadGuard, LoadTicket};
pub use models::{Note, NoteDraft, NotesResponse};
