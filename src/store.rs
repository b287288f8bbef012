//! Flat-file record store backing the notes and accounts collections.
//!
//! The whole data set is one JSON document with two top-level arrays
//! (`notes`, `accounts`). The store keeps an in-memory snapshot behind a
//! single mutex and rewrites the full file on every mutation, so records
//! survive restarts without any external database.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{RecordKind, StoreError};

/// A schema-less record: any JSON object. `id` is the only reserved field
/// and is always an integer managed by the store.
pub type Record = serde_json::Map<String, Value>;

const STATUS_ACTIVE: &str = "active";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    notes: Vec<Record>,
    accounts: Vec<Record>,
}

impl Snapshot {
    fn collection(&self, kind: RecordKind) -> &Vec<Record> {
        match kind {
            RecordKind::Note => &self.notes,
            RecordKind::Account => &self.accounts,
        }
    }

    fn collection_mut(&mut self, kind: RecordKind) -> &mut Vec<Record> {
        match kind {
            RecordKind::Note => &mut self.notes,
            RecordKind::Account => &mut self.accounts,
        }
    }
}

/// Record store wrapping the JSON data file.
///
/// Every operation locks the snapshot for its full read-modify-write-save
/// span, so concurrent requests cannot interleave id assignment or lose
/// updates under actix's multi-worker runtime.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    snapshot: Mutex<Snapshot>,
}

impl RecordStore {
    /// Open the store at `path`, reading the existing data file or starting
    /// with two empty collections when there is none. A file that exists but
    /// does not parse is an error; the caller treats that as fatal rather
    /// than serving (and eventually overwriting) a store it cannot read.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let snapshot = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let snapshot: Snapshot = serde_json::from_str(&raw)?;
            log::info!(
                "Loaded {} notes and {} accounts from {}",
                snapshot.notes.len(),
                snapshot.accounts.len(),
                path.display()
            );
            snapshot
        } else {
            log::info!(
                "No data file at {}, starting with empty collections",
                path.display()
            );
            Snapshot::default()
        };

        Ok(Self {
            path,
            snapshot: Mutex::new(snapshot),
        })
    }

    /// Serialize the full snapshot and overwrite the data file.
    /// Plain overwrite, no atomic rename; a crash mid-write can leave a
    /// truncated file.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Full collection in insertion order. Accounts get a missing `status`
    /// filled to "active" in place; the fill is not saved on its own.
    pub fn list(&self, kind: RecordKind) -> Vec<Record> {
        let mut snapshot = self.snapshot.lock().unwrap();
        if kind == RecordKind::Account {
            fill_default_status(snapshot.collection_mut(kind));
        }
        snapshot.collection(kind).clone()
    }

    /// First record whose `id` matches.
    pub fn get(&self, kind: RecordKind, id: i64) -> Result<Record, StoreError> {
        let snapshot = self.snapshot.lock().unwrap();
        snapshot
            .collection(kind)
            .iter()
            .find(|record| record_id(record) == Some(id))
            .cloned()
            .ok_or(StoreError::NotFound(kind))
    }

    /// Append a new record. Any `id` in the payload is discarded; the new id
    /// is `1 + max(existing ids)`, so deleting the highest-id record makes
    /// that id available again on the next create.
    pub fn create(&self, kind: RecordKind, mut payload: Record) -> Result<Record, StoreError> {
        let mut snapshot = self.snapshot.lock().unwrap();
        let records = snapshot.collection_mut(kind);

        let next_id = 1 + records.iter().filter_map(record_id).max().unwrap_or(0);
        payload.insert("id".to_string(), Value::from(next_id));
        if kind == RecordKind::Account {
            payload
                .entry("status")
                .or_insert_with(|| Value::from(STATUS_ACTIVE));
        }

        records.push(payload.clone());
        self.save(&snapshot)?;
        Ok(payload)
    }

    /// Replace a record wholesale. The stored `id` always wins over whatever
    /// the payload carries.
    pub fn replace(
        &self,
        kind: RecordKind,
        id: i64,
        mut payload: Record,
    ) -> Result<Record, StoreError> {
        let mut snapshot = self.snapshot.lock().unwrap();
        let slot = snapshot
            .collection_mut(kind)
            .iter_mut()
            .find(|record| record_id(record) == Some(id))
            .ok_or(StoreError::NotFound(kind))?;

        payload.insert("id".to_string(), Value::from(id));
        *slot = payload.clone();

        self.save(&snapshot)?;
        Ok(payload)
    }

    /// Shallow-merge payload fields into an existing account. Unlike
    /// `replace`, a payload-supplied `id` overwrites the stored one.
    pub fn patch_account(&self, id: i64, payload: Record) -> Result<Record, StoreError> {
        let mut snapshot = self.snapshot.lock().unwrap();
        let record = snapshot
            .accounts
            .iter_mut()
            .find(|record| record_id(record) == Some(id))
            .ok_or(StoreError::NotFound(RecordKind::Account))?;

        for (field, value) in payload {
            record.insert(field, value);
        }
        let merged = record.clone();

        self.save(&snapshot)?;
        Ok(merged)
    }

    /// Remove the first record whose `id` matches, keeping the relative
    /// order of the rest.
    pub fn delete(&self, kind: RecordKind, id: i64) -> Result<(), StoreError> {
        let mut snapshot = self.snapshot.lock().unwrap();
        let records = snapshot.collection_mut(kind);
        let index = records
            .iter()
            .position(|record| record_id(record) == Some(id))
            .ok_or(StoreError::NotFound(kind))?;
        records.remove(index);

        self.save(&snapshot)?;
        Ok(())
    }

    /// Credential check against the accounts collection. First match in
    /// list order wins; a record with no `status` field counts as active.
    /// Returns the matched account's id and username, never the password.
    pub fn login(&self, username: &str, password: &str) -> Result<(i64, String), StoreError> {
        let snapshot = self.snapshot.lock().unwrap();
        snapshot
            .accounts
            .iter()
            .find(|record| {
                field_str(record, "username") == Some(username)
                    && field_str(record, "password") == Some(password)
                    && effective_status(record) == STATUS_ACTIVE
            })
            .and_then(record_id)
            .map(|id| (id, username.to_string()))
            .ok_or(StoreError::InvalidCredentials)
    }
}

fn record_id(record: &Record) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

fn field_str<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// `status` defaults to "active" only when the field is absent. A present
/// but non-string value never counts as active.
fn effective_status(record: &Record) -> &str {
    match record.get("status") {
        None => STATUS_ACTIVE,
        Some(value) => value.as_str().unwrap_or(""),
    }
}

fn fill_default_status(records: &mut [Record]) {
    for record in records {
        record
            .entry("status")
            .or_insert_with(|| Value::from(STATUS_ACTIVE));
    }
}
