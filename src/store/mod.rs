//! Storage boundary.
//!
//! Persistence mechanics live behind [`Repository`]; the engine only relies
//! on the contracts below. The one non-negotiable guarantee is the
//! conditional write in [`Repository::save`]: of two writers racing from the
//! same version, exactly one succeeds and the other observes
//! [`SaveDocumentError::Stale`].

mod memory;

pub use self::memory::MemoryStore;

use failure::Fail;
use uuid::Uuid;

use crate::models::{Document, DocumentRelation};

pub trait Repository {
    /// Find a document by ID.
    fn find(&self, id: Uuid) -> Result<Document, FindDocumentError>;

    /// Write a document.
    ///
    /// With `expected_version` set the write is conditional: it succeeds
    /// only if the stored version still equals `expected_version`, in which
    /// case the stored version becomes `expected_version + 1`. Without it
    /// the write is unconditional (insert, or last-write-wins update).
    ///
    /// Returns the document as stored, carrying the new version.
    fn save(&self, document: &Document, expected_version: Option<i32>)
    -> Result<Document, SaveDocumentError>;

    /// All relation edges touching a document, in either direction.
    fn relations_of(&self, document: Uuid)
    -> Result<Vec<DocumentRelation>, StoreError>;

    /// Record a new relation edge.
    fn add_relation(&self, relation: DocumentRelation)
    -> Result<(), StoreError>;

    /// Documents associated with an organisation.
    fn in_organisation(&self, organisation: Uuid)
    -> Result<Vec<Document>, StoreError>;
}

/// Failure of the storage backend itself.
#[derive(Debug, Fail)]
#[fail(display = "document store error: {}", _0)]
pub struct StoreError(String);

impl StoreError {
    pub fn new<S>(message: S) -> StoreError
    where
        S: Into<String>,
    {
        StoreError(message.into())
    }
}

#[derive(Debug, Fail)]
pub enum FindDocumentError {
    /// Store error.
    #[fail(display = "{}", _0)]
    Store(#[cause] StoreError),
    /// No document found matching given criteria.
    #[fail(display = "No such document")]
    NotFound,
}

impl_from! { for FindDocumentError ;
    StoreError => |e| FindDocumentError::Store(e),
}

#[derive(Debug, Fail)]
pub enum SaveDocumentError {
    /// Store error.
    #[fail(display = "{}", _0)]
    Store(#[cause] StoreError),
    /// The stored version no longer matches the expected one.
    #[fail(display = "Document version is stale")]
    Stale,
}

impl_from! { for SaveDocumentError ;
    StoreError => |e| SaveDocumentError::Store(e),
}
