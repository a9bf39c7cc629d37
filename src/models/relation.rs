//! Directed relations between documents.

use uuid::Uuid;

/// A directed edge from one document to another.
///
/// The storage layer does not deduplicate edges between the same pair of
/// documents; [`Document::related_documents`] collapses duplicates when
/// reading.
///
/// [`Document::related_documents`]: ../document/struct.Document.html#method.related_documents
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DocumentRelation {
    /// Source of the edge.
    pub document: Uuid,
    /// Target of the edge.
    pub related_document: Uuid,
}

impl DocumentRelation {
    pub fn new(document: Uuid, related_document: Uuid) -> DocumentRelation {
        DocumentRelation { document, related_document }
    }
}
