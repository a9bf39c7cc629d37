//! In-memory reference implementation of the storage boundary.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::models::{Document, DocumentRelation};
use super::{FindDocumentError, Repository, SaveDocumentError, StoreError};

/// A [`Repository`] backed by process memory.
///
/// All operations take a single lock, which makes the conditional write in
/// `save` an atomic compare-and-swap.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    documents: HashMap<Uuid, Document>,
    relations: Vec<DocumentRelation>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn lock(&self) -> Result<MutexGuard<Inner>, StoreError> {
        self.inner.lock()
            .map_err(|_| StoreError::new("store mutex poisoned"))
    }
}

impl Repository for MemoryStore {
    fn find(&self, id: Uuid) -> Result<Document, FindDocumentError> {
        self.lock()?
            .documents
            .get(&id)
            .cloned()
            .ok_or(FindDocumentError::NotFound)
    }

    fn save(&self, document: &Document, expected_version: Option<i32>)
    -> Result<Document, SaveDocumentError> {
        let mut inner = self.lock()?;

        let mut stored = document.clone();

        match (inner.documents.get(&document.id()), expected_version) {
            (None, None) => {}
            (None, Some(_)) => return Err(SaveDocumentError::Stale),
            (Some(current), None) =>
                stored.set_lock_version(current.lock_version() + 1),
            (Some(current), Some(expected)) => {
                if current.lock_version() != expected {
                    return Err(SaveDocumentError::Stale);
                }
                stored.set_lock_version(expected + 1);
            }
        }

        inner.documents.insert(stored.id(), stored.clone());

        Ok(stored)
    }

    fn relations_of(&self, document: Uuid)
    -> Result<Vec<DocumentRelation>, StoreError> {
        Ok(self.lock()?
            .relations
            .iter()
            .filter(|relation| {
                relation.document == document
                    || relation.related_document == document
            })
            .cloned()
            .collect())
    }

    fn add_relation(&self, relation: DocumentRelation)
    -> Result<(), StoreError> {
        self.lock()?.relations.push(relation);
        Ok(())
    }

    fn in_organisation(&self, organisation: Uuid)
    -> Result<Vec<Document>, StoreError> {
        let mut documents = self.lock()?
            .documents
            .values()
            .filter(|document| document.organisations().contains(&organisation))
            .cloned()
            .collect::<Vec<_>>();
        documents.sort_by(|a, b| a.slug().cmp(b.slug()));
        Ok(documents)
    }
}
