//! # Note model
//!
//! The backend owns the full shape of a note; the front end only relies on its
//! identifier. [`Note`] therefore keeps the `_id` as a typed field and every
//! other attribute verbatim in [`Note::fields`], so nothing the backend sends is
//! lost when a note is rendered or passed around.
//!
//! [`Note::title`] and [`Note::description`] are convenience lookups for the two
//! string attributes the note card displays.
//!
//! [`NoteDraft`] is what the creation form submits.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A saved note as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Unique identifier assigned by the backend.
    #[serde(rename = "_id")]
    pub id: String,
    /// Every other attribute, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Note {
    /// A note with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder method to attach an attribute.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.text_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.text_field("description")
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// A note that has not been saved yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// A draft is only worth submitting once it has a title.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
