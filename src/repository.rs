//! Repository Layer
//!
//! Whole-collection persistence: every save rewrites the full JSON array
//! under one storage key.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{DRAWINGS_KEY, TASKS_KEY};
use crate::error::Result;
use crate::models::{DrawingRecord, TaskRecord};
use crate::storage::KeyValueStore;

/// A JSON array of `T` stored under a fixed key
pub struct Repository<'a, S, T> {
    store: &'a S,
    key: &'static str,
    _record: PhantomData<T>,
}

pub type TaskRepository<'a, S> = Repository<'a, S, TaskRecord>;
pub type DrawingRepository<'a, S> = Repository<'a, S, DrawingRecord>;

impl<'a, S: KeyValueStore> TaskRepository<'a, S> {
    pub fn tasks(store: &'a S) -> Self {
        Repository::new(store, TASKS_KEY)
    }
}

impl<'a, S: KeyValueStore> DrawingRepository<'a, S> {
    pub fn drawings(store: &'a S) -> Self {
        Repository::new(store, DRAWINGS_KEY)
    }
}

impl<'a, S, T> Repository<'a, S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: &'a S, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    /// Stored records in order. Absent, unreadable or malformed data loads as empty.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Reading '{}' failed, starting empty: {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Stored '{}' is not a valid array, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.store.set_item(self.key, &json)
    }
}
