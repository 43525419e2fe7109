//! Generic in-memory record store.
//!
//! A `MemoryStore` keeps one record type keyed by its ID. It is the
//! storage layer for a single-process deployment: all mutation goes
//! through `&mut self`, so there is one writer by construction.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// A value that can live in a [`MemoryStore`].
pub trait Record {
    /// Entity name used in error messages ("product", "order", ...).
    const ENTITY: &'static str;

    /// The record's unique ID.
    fn record_id(&self) -> String;
}

/// An in-memory store for one record type.
///
/// Records are kept in a `BTreeMap` keyed by ID, so `list` iterates in
/// a stable, deterministic order.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: Record> {
    records: BTreeMap<String, T>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by ID.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Look up a record by ID, erroring if absent.
    pub fn fetch(&self, id: &str) -> Result<&T, StoreError> {
        self.records.get(id).ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })
    }

    /// All records, in ID order.
    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// All records matching a predicate, in ID order.
    pub fn filter<'a>(&'a self, pred: impl Fn(&T) -> bool + 'a) -> impl Iterator<Item = &'a T> {
        self.records.values().filter(move |r| pred(r))
    }

    /// Find the first record matching a predicate.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.values().find(|r| pred(r))
    }

    /// Insert a new record. Errors if the ID is already taken.
    pub fn create(&mut self, record: T) -> Result<(), StoreError> {
        let id = record.record_id();
        if self.records.contains_key(&id) {
            return Err(StoreError::Duplicate {
                entity: T::ENTITY,
                id,
            });
        }
        self.records.insert(id, record);
        Ok(())
    }

    /// Replace an existing record. Errors if the ID is unknown.
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        let id = record.record_id();
        if !self.records.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            });
        }
        self.records.insert(id, record);
        Ok(())
    }

    /// Insert or replace a record.
    pub fn upsert(&mut self, record: T) {
        self.records.insert(record.record_id(), record);
    }

    /// Remove a record by ID, returning it. Errors if absent.
    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        self.records.remove(id).ok_or_else(|| StoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })
    }

    /// Apply a mutation to a record in place. Errors if absent.
    pub fn modify(&mut self, id: &str, f: impl FnOnce(&mut T)) -> Result<&T, StoreError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: T::ENTITY,
                id: id.to_string(),
            })?;
        f(record);
        Ok(record)
    }
}

impl<T: Record> FromIterator<T> for MemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.upsert(record);
        }
        store
    }
}
