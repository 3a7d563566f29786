use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::InteractionRecord;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, warn};

pub const USER_HISTORY_KEY: &str = "anoki_user_tool_history";
pub const MAX_HISTORY: usize = 10;

/// Most-recent-first log of tool interactions, capped at [`MAX_HISTORY`].
///
/// A store without a backing medium is *detached*: saves are ignored and
/// reads come back empty. Nothing here returns an error; storage failures
/// are logged and treated as "no history".
pub struct HistoryStore<S> {
    storage: Option<S>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }

    pub fn read_history(&self) -> Vec<InteractionRecord> {
        match self.load_history() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "failed to read tool history");
                Vec::new()
            }
        }
    }

    /// Storage errors surface here; malformed JSON decodes as empty history.
    fn load_history(&self) -> Result<Vec<InteractionRecord>> {
        let Some(storage) = &self.storage else {
            return Ok(Vec::new());
        };

        let Some(raw) = storage.get(USER_HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<InteractionRecord>>(&raw) {
            Ok(records) => Ok(records
                .into_iter()
                .filter(|r| !r.tool_id.is_empty())
                .collect()),
            Err(e) => {
                warn!(error = %e, "ignoring malformed tool history");
                Ok(Vec::new())
            }
        }
    }

    pub fn save_interaction(&mut self, tool_id: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.save_interaction_at(tool_id, timestamp);
    }

    pub fn save_interaction_at(&mut self, tool_id: &str, timestamp: String) {
        if self.storage.is_none() {
            return;
        }

        // Writing after a failed read would replace the stored records.
        let mut history = match self.load_history() {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "skipping tool interaction, history unreadable");
                return;
            }
        };
        history.insert(
            0,
            InteractionRecord {
                tool_id: tool_id.to_string(),
                timestamp,
            },
        );
        history.truncate(MAX_HISTORY);

        let encoded = match serde_json::to_string(&history) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "failed to encode tool history");
                return;
            }
        };

        if let Some(storage) = self.storage.as_mut() {
            match storage.set(USER_HISTORY_KEY, &encoded) {
                Ok(()) => debug!(tool_id, entries = history.len(), "saved tool interaction"),
                Err(e) => warn!(error = %e, "failed to save tool interaction"),
            }
        }
    }
}
