//! Entry store - the single owner of the entry collection
//!
//! Callers read through `snapshot()` and change the collection only through
//! the store's methods. Every successful change bumps `version()` and is
//! written to the backing `Storage`.

mod file;

use uuid::Uuid;

use crate::core::{DailyEntry, NewEntry};
use crate::error::{AppError, StoreError};

pub(crate) use file::JsonFileStorage;

/// Durable backing for the entry collection
pub(crate) trait Storage {
    /// Human-readable location, for messages
    fn describe(&self) -> String;

    /// Read all entries; a missing backing file is an empty collection
    fn load(&self) -> Result<Vec<DailyEntry>, AppError>;

    /// Replace the stored collection with `entries`
    fn save(&self, entries: &[DailyEntry]) -> Result<(), AppError>;

    /// Move unreadable stored data out of the way so `save` cannot clobber it;
    /// returns where it went
    fn set_aside(&self) -> Result<String, AppError>;
}

pub(crate) struct EntryStore<S: Storage> {
    storage: S,
    entries: Vec<DailyEntry>,
    version: u64,
    /// Set when `load` failed; cleared once the stored data has been set aside
    unreadable: bool,
}

impl<S: Storage> EntryStore<S> {
    /// Load the collection, starting empty if storage cannot be read
    pub(crate) fn open(storage: S) -> Self {
        let (entries, unreadable) = match storage.load() {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), from = %storage.describe(), "loaded entries");
                (entries, false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load entries, starting with an empty collection");
                (Vec::new(), true)
            }
        };
        Self {
            storage,
            entries,
            version: 0,
            unreadable,
        }
    }

    pub(crate) fn snapshot(&self) -> &[DailyEntry] {
        &self.entries
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn location(&self) -> String {
        self.storage.describe()
    }

    /// Look up an entry by full id or by a unique id prefix
    pub(crate) fn find(&self, id: &str) -> Result<&DailyEntry, AppError> {
        if let Some(entry) = self.entries.iter().find(|e| e.id == id) {
            return Ok(entry);
        }
        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(id));
        match (matches.next(), matches.count()) {
            (Some(entry), 0) if !id.is_empty() => Ok(entry),
            (Some(_), more) if !id.is_empty() => Err(StoreError::Ambiguous {
                prefix: id.to_string(),
                count: more + 1,
            }
            .into()),
            _ => Err(StoreError::NotFound { id: id.to_string() }.into()),
        }
    }

    /// Add a new entry with a freshly minted id
    pub(crate) fn append(&mut self, entry: NewEntry) -> Result<DailyEntry, AppError> {
        let entry = entry.with_id(Uuid::new_v4().to_string());
        self.entries.push(entry.clone());
        self.commit()?;
        Ok(entry)
    }

    /// Replace the entry with the same id; the id itself never changes
    pub(crate) fn update(&mut self, entry: DailyEntry) -> Result<(), AppError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| StoreError::NotFound {
                id: entry.id.clone(),
            })?;
        *slot = entry;
        self.commit()
    }

    pub(crate) fn remove(&mut self, id: &str) -> Result<DailyEntry, AppError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let removed = self.entries.remove(pos);
        self.commit()?;
        Ok(removed)
    }

    /// Swap in a whole new collection (import)
    pub(crate) fn replace(&mut self, entries: Vec<DailyEntry>) -> Result<(), AppError> {
        self.entries = entries;
        self.commit()
    }

    /// Write the current collection without changing it
    ///
    /// If the stored data could not be loaded, it is set aside first; when
    /// that fails nothing is written.
    pub(crate) fn persist(&mut self) -> Result<(), AppError> {
        if self.unreadable {
            let backup = self.storage.set_aside()?;
            tracing::warn!(%backup, "kept unreadable entries file");
            self.unreadable = false;
        }
        self.storage.save(&self.entries)
    }

    fn commit(&mut self) -> Result<(), AppError> {
        self.version += 1;
        tracing::debug!(version = self.version, count = self.entries.len(), "entries changed");
        self.persist()
    }
}
