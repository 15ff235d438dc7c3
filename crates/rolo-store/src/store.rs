use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use rolo_types::{Contact, ContactId};

use crate::error::Result;

const ADDED_FILE: &str = "added.json";
const DELETED_FILE: &str = "deleted.json";

/// Outcome of a delete, so callers can phrase the acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// A locally added contact was removed from the added list.
    Added,
    /// A remote-origin id was tombstoned (or already was).
    Tombstoned,
}

/// Persisted local contact state: user additions plus deletion tombstones
/// for remote-origin contacts.
///
/// Two JSON files under the data directory, one per concern, written back
/// synchronously after every mutation. A missing or malformed file loads as
/// empty; load never fails startup.
pub struct LocalStore {
    dir: PathBuf,
    added: Vec<Contact>,
    deleted: BTreeSet<ContactId>,
}

impl LocalStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let added = load_or_default::<Vec<Contact>>(&dir.join(ADDED_FILE));
        let deleted = load_or_default::<BTreeSet<ContactId>>(&dir.join(DELETED_FILE));
        Self {
            dir,
            added,
            deleted,
        }
    }

    /// User-added contacts, newest first.
    pub fn added(&self) -> &[Contact] {
        &self.added
    }

    /// Tombstoned remote-origin ids.
    pub fn deleted(&self) -> &BTreeSet<ContactId> {
        &self.deleted
    }

    /// Prepend a new local contact and persist the added list.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        self.added.insert(0, contact);
        self.persist_added()
    }

    /// Remove a contact by id.
    ///
    /// A locally added id is removed from the added list; any other id is
    /// tombstoned. Tombstoning an already-deleted id is a no-op that still
    /// reports `Removal::Tombstoned`.
    pub fn remove(&mut self, id: &ContactId) -> Result<Removal> {
        if let Some(pos) = self.added.iter().position(|c| &c.id == id) {
            self.added.remove(pos);
            self.persist_added()?;
            return Ok(Removal::Added);
        }

        if self.deleted.insert(id.clone()) {
            self.persist_deleted()?;
        }
        Ok(Removal::Tombstoned)
    }

    fn persist_added(&self) -> Result<()> {
        write_json(&self.dir.join(ADDED_FILE), &self.added)
    }

    fn persist_deleted(&self) -> Result<()> {
        write_json(&self.dir.join(DELETED_FILE), &self.deleted)
    }
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let Ok(content) = fs::read_to_string(path) else {
        return T::default();
    };
    // Corrupt state is discarded, not surfaced.
    serde_json::from_str(&content).unwrap_or_default()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}
