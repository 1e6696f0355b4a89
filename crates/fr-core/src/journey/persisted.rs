//! Persisted journey contract.
//!
//! Storage holds at most two journey keys:
//! - `fact.rip.visited`: the literal `"true"`, or absent. Never `"false"`.
//! - `fact.rip.joined`: an ISO-8601 timestamp string, or absent.
//!
//! The in-memory [`UserJourneyState`] must be re-derivable from these alone.

use super::state::{PartialJourneyState, UserJourneyState};

pub const VISITED_KEY: &str = "fact.rip.visited";
pub const JOINED_TIMESTAMP_KEY: &str = "fact.rip.joined";

/// The only value ever written under [`VISITED_KEY`].
pub const VISITED_FLAG: &str = "true";

/// Journey storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    HasVisited,
    JoinedTimestamp,
}

impl StorageKey {
    pub const ALL: [StorageKey; 2] = [StorageKey::HasVisited, StorageKey::JoinedTimestamp];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::HasVisited => VISITED_KEY,
            StorageKey::JoinedTimestamp => JOINED_TIMESTAMP_KEY,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            VISITED_KEY => Some(StorageKey::HasVisited),
            JOINED_TIMESTAMP_KEY => Some(StorageKey::JoinedTimestamp),
            _ => None,
        }
    }
}

/// The persisted projection of [`UserJourneyState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedJourney {
    pub has_visited: bool,
    pub joined_timestamp: Option<String>,
}

impl PersistedJourney {
    /// Decode from raw storage values.
    ///
    /// Anything other than the exact `"true"` flag reads as "not visited".
    pub fn from_raw(visited: Option<&str>, joined: Option<&str>) -> Self {
        let has_visited = visited == Some(VISITED_FLAG);
        #[cfg(feature = "tracing")]
        if let Some(raw) = visited.filter(|v| *v != VISITED_FLAG) {
            tracing::debug!(key = VISITED_KEY, value = raw, "ignoring unexpected visited flag value");
        }
        Self {
            has_visited,
            joined_timestamp: joined.map(str::to_string),
        }
    }

    /// Encode to raw storage values. `None` means "remove the key".
    pub fn to_raw(&self) -> (Option<&'static str>, Option<&str>) {
        let visited = self.has_visited.then_some(VISITED_FLAG);
        (visited, self.joined_timestamp.as_deref())
    }

    /// Raw value for a single key. `None` means "remove the key".
    pub fn raw_value(&self, key: StorageKey) -> Option<&str> {
        let (visited, joined) = self.to_raw();
        match key {
            StorageKey::HasVisited => visited,
            StorageKey::JoinedTimestamp => joined,
        }
    }

    pub fn from_state(state: &UserJourneyState) -> Self {
        Self {
            has_visited: state.has_visited,
            joined_timestamp: state.joined_timestamp.clone(),
        }
    }

    /// Partial state for an `Initialize` action.
    pub fn into_partial(self) -> PartialJourneyState {
        PartialJourneyState {
            has_visited: Some(self.has_visited),
            joined_timestamp: Some(self.joined_timestamp),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-01-01T00:00:00.000Z";

    #[test]
    fn from_raw_reads_flag_and_timestamp() {
        let persisted = PersistedJourney::from_raw(Some("true"), Some(TS));
        assert!(persisted.has_visited);
        assert_eq!(persisted.joined_timestamp.as_deref(), Some(TS));
    }

    #[test]
    fn from_raw_treats_non_literal_flag_as_absent() {
        for raw in ["false", "TRUE", "1", ""] {
            assert!(!PersistedJourney::from_raw(Some(raw), None).has_visited, "{raw}");
        }
        assert!(!PersistedJourney::from_raw(None, None).has_visited);
    }

    #[test]
    fn to_raw_never_writes_false() {
        let persisted = PersistedJourney::default();
        assert_eq!(persisted.to_raw(), (None, None));
    }

    #[test]
    fn raw_values_survive_storage_round_trip() {
        let cases = [
            PersistedJourney::default(),
            PersistedJourney {
                has_visited: true,
                joined_timestamp: Some(TS.to_string()),
            },
            PersistedJourney {
                has_visited: true,
                joined_timestamp: None,
            },
            PersistedJourney {
                has_visited: false,
                joined_timestamp: Some("2031-12-31T23:59:59.999Z".to_string()),
            },
        ];

        for case in cases {
            let (visited, joined) = case.to_raw();
            assert_eq!(PersistedJourney::from_raw(visited, joined), case);
        }
    }

    #[test]
    fn storage_key_names_are_stable() {
        assert_eq!(StorageKey::HasVisited.as_str(), "fact.rip.visited");
        assert_eq!(StorageKey::JoinedTimestamp.as_str(), "fact.rip.joined");
        assert_eq!(StorageKey::from_key("fact.rip.joined"), Some(StorageKey::JoinedTimestamp));
        assert_eq!(StorageKey::from_key("fact.rip.emergency"), None);
    }
}
