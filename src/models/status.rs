use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// Number of rows sharing one `typing_test_status` value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Frequency map that keeps keys in the order they were first seen.
///
/// Serializes as a JSON object, e.g. `{"passed": 3, "failed": 1}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    entries: Vec<(String, u64)>,
}

impl StatusTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, status: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == status) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((status.to_string(), 1)),
        }
    }

    pub fn get(&self, status: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(key, _)| key == status)
            .map(|(_, count)| *count)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatusTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (status, count) in &self.entries {
            map.serialize_entry(status, count)?;
        }
        map.end()
    }
}
