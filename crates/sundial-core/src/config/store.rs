/// Preference-store contract. The actual persistence mechanism lives with
/// the embedder (browser localStorage, a file, a test fixture); the core only
/// sees load/save of a `Settings` document and treats every failure as
/// recoverable by falling back to defaults.

use thiserror::Error;

use crate::config::settings::Settings;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
    #[error("stored settings malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    /// `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Settings>, StoreError>;
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Load settings, clamping whatever comes back and falling back to defaults
/// on absence or failure. Never fatal; a failed load is logged and forgotten.
pub fn load_or_default(store: &dyn PreferenceStore) -> Settings {
    match store.load() {
        Ok(Some(settings)) => settings.clamped(),
        Ok(None) => Settings::default(),
        Err(err) => {
            log::warn!("settings load failed, using defaults: {err}");
            Settings::default()
        }
    }
}

/// In-memory store holding the serialized JSON document. Used by tests and by
/// the web bridge, which shuttles the document to localStorage as a string.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing serialized document (e.g. read out of localStorage).
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }

    /// The serialized document, for the embedder to persist.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>, StoreError> {
        match &self.document {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.document = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_or_default(&store), Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            work_minutes: 45,
            star_density: 20,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(load_or_default(&store), settings);
    }

    #[test]
    fn malformed_document_falls_back_to_defaults() {
        let store = MemoryStore::with_document("{not json");
        assert_eq!(load_or_default(&store), Settings::default());
    }

    #[test]
    fn out_of_range_document_is_clamped_on_load() {
        let store = MemoryStore::with_document(r#"{"work_minutes": 900, "break_minutes": 0}"#);
        let loaded = load_or_default(&store);
        assert_eq!(loaded.work_minutes, 60);
        assert_eq!(loaded.break_minutes, 1);
    }
}
