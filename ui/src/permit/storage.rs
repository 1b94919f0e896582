use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use serde_json::Value;

use super::types::ApplicationDraft;

/// Keeps the unsaved create-mode draft in `localStorage` across reloads
pub struct DraftStorage {
    storage_key: String,
}

impl DraftStorage {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store_draft(&self, draft: &ApplicationDraft) -> Result<(), StorageError> {
        if draft.is_blank() {
            self.clear_draft();
            return Ok(());
        }
        LocalStorage::set(&self.storage_key, draft)
    }

    /// Stored draft, if any; an unreadable entry is discarded
    pub fn load_draft(&self) -> Option<ApplicationDraft> {
        let raw = match LocalStorage::get::<Value>(&self.storage_key) {
            Ok(raw) => raw,
            Err(StorageError::KeyNotFound(_)) => return None,
            Err(e) => {
                crate::console_warn!("[DRAFT] Discarding unreadable draft: {:?}", e);
                self.clear_draft();
                return None;
            }
        };

        match decode_draft(raw) {
            Ok(draft) => draft,
            Err(e) => {
                crate::console_warn!("[DRAFT] Discarding malformed draft: {}", e);
                self.clear_draft();
                None
            }
        }
    }

    pub fn clear_draft(&self) {
        LocalStorage::delete(&self.storage_key);
    }

    pub fn has_unsaved_draft(&self) -> bool {
        self.load_draft().is_some()
    }
}

/// A stored entry that decodes to a blank draft counts as no draft
fn decode_draft(raw: Value) -> Result<Option<ApplicationDraft>, serde_json::Error> {
    let draft: ApplicationDraft = serde_json::from_value(raw)?;
    Ok((!draft.is_blank()).then_some(draft))
}

/// One-shot message carried across a route change in `sessionStorage`
pub struct FlashStorage {
    storage_key: String,
}

impl FlashStorage {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn store(&self, message: &str) {
        if let Err(e) = SessionStorage::set(&self.storage_key, message) {
            crate::console_warn!("[FLASH] Could not keep message: {:?}", e);
        }
    }

    /// Returns the stored message once, then forgets it
    pub fn take(&self) -> Option<String> {
        let message = SessionStorage::get::<String>(&self.storage_key).ok();
        SessionStorage::delete(&self.storage_key);
        message.filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.applicant.name = "Jo Builder".to_string();
        draft.address = "12 Main Street".to_string();
        draft.storeys = Some(2);
        draft
    }

    #[test]
    fn test_decode_draft_round_trips_stored_value() {
        let stored = serde_json::to_value(draft()).unwrap();
        assert_eq!(decode_draft(stored).unwrap(), Some(draft()));
    }

    #[test]
    fn test_decode_blank_draft_is_no_draft() {
        let stored = serde_json::to_value(ApplicationDraft::default()).unwrap();
        assert_eq!(decode_draft(stored).unwrap(), None);
    }

    #[test]
    fn test_decode_rejects_malformed_entries() {
        assert!(decode_draft(json!("not a draft")).is_err());
        assert!(decode_draft(json!({"address": 12})).is_err());
    }
}
