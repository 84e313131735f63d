use super::types::Character;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Character with id {0} already exists")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
struct StoredCharacter {
    /// Insertion sequence, used to keep `list_all` in creation order.
    seq: u64,
    character: Character,
}

/// In-memory character store keyed by id.
///
/// Each check-then-write runs under the DashMap shard lock for its key, so
/// the store can be shared across request tasks behind an `Arc`.
pub struct CharacterStorage {
    records: DashMap<String, StoredCharacter>,
    next_seq: AtomicU64,
}

impl CharacterStorage {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Inserts a new record. Fails if the id is already taken.
    pub fn create(&self, character: Character) -> Result<Character, StorageError> {
        match self.records.entry(character.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::DuplicateId(character.id)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
                slot.insert(StoredCharacter {
                    seq,
                    character: character.clone(),
                });
                Ok(character)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Character> {
        self.records.get(id).map(|entry| entry.character.clone())
    }

    /// All records, oldest first.
    pub fn list_all(&self) -> Vec<Character> {
        let mut entries: Vec<(u64, Character)> = self
            .records
            .iter()
            .map(|entry| (entry.seq, entry.character.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, character)| character).collect()
    }

    /// Replaces the record stored under `id` wholesale.
    ///
    /// Returns `None` when nothing is stored under `id`. The stored record
    /// always carries `id`, whatever id the replacement had.
    pub fn update(&self, id: &str, mut character: Character) -> Option<Character> {
        let mut entry = self.records.get_mut(id)?;
        character.id = id.to_string();
        entry.character = character.clone();
        Some(character)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.records.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&self) {
        self.records.clear();
    }
}

impl Default for CharacterStorage {
    fn default() -> Self {
        Self::new()
    }
}
