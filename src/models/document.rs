//! The document aggregate and its publication workflow.

use chrono::{DateTime, Utc};
use failure::Fail;
use serde_json::json;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use uuid::Uuid;

use crate::{
    access::AccessGate,
    audit,
    capabilities::{Capability, CapabilityBits, DocumentKind, MissingCapability},
    store::{FindDocumentError, Repository, SaveDocumentError, StoreError},
};
use super::{DocumentRelation, User};

/// A content item moving through the authoring, review, and publication
/// lifecycle.
///
/// Associations gated by a capability are `None` for kinds lacking the
/// capability; they are never represented as an empty collection on a kind
/// that cannot carry them.
#[derive(Clone, Debug)]
pub struct Document {
    id: Uuid,
    slug: String,
    kind: DocumentKind,
    title: String,
    summary: String,
    body: String,
    author: Uuid,
    state: State,
    submitted: bool,
    lock_version: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    scheduled_at: Option<DateTime<Utc>>,
    organisations: Vec<Uuid>,
    topics: Option<Vec<String>>,
    ministerial_roles: Option<Vec<String>>,
    inapplicable_nations: Option<Vec<String>>,
    attachment: Option<Attachment>,
    supporting_documents: Option<Vec<SupportingDocument>>,
    errors: ValidationErrors,
}

/// Lifecycle state of a document.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    /// Being written. The only state in which content is edited.
    Draft,
    /// Sitting with a reviewer.
    Submitted,
    /// Live. Further changes require deriving a new draft.
    Published,
    /// Sent back by a reviewer for correction.
    Rejected,
    /// Queued for timed publication. The timer itself runs outside this
    /// crate; [`Document::publish`] completes the transition.
    Scheduled,
    /// Withdrawn from the live site after publication.
    Archived,
    /// Discarded. No further transitions.
    Deleted,
}

impl State {
    /// States from which a document can move forward to publication.
    pub fn publishable(self) -> bool {
        match self {
            State::Draft | State::Submitted
            | State::Rejected | State::Scheduled => true,
            State::Published | State::Archived | State::Deleted => false,
        }
    }

    pub fn archivable(self) -> bool {
        self == State::Published
    }

    pub fn deletable(self) -> bool {
        self.publishable()
    }

    pub fn schedulable(self) -> bool {
        self == State::Draft
    }
}

impl fmt::Display for State {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(match *self {
            State::Draft => "draft",
            State::Submitted => "submitted",
            State::Published => "published",
            State::Rejected => "rejected",
            State::Scheduled => "scheduled",
            State::Archived => "archived",
            State::Deleted => "deleted",
        })
    }
}

/// An owned child document supplementing its parent.
#[derive(Clone, Debug)]
pub struct SupportingDocument {
    id: Uuid,
    document: Uuid,
    title: String,
    body: String,
}

impl SupportingDocument {
    fn new(document: Uuid, title: String, body: String) -> SupportingDocument {
        SupportingDocument {
            id: Uuid::new_v4(),
            document,
            title,
            body,
        }
    }

    /// Copy this child's attributes into a fresh child of another document.
    fn reparent(&self, document: Uuid) -> SupportingDocument {
        SupportingDocument::new(document, self.title.clone(), self.body.clone())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// ID of the owning document.
    pub fn document(&self) -> Uuid {
        self.document
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Attachment {
    pub title: String,
    pub filename: String,
}

/// Field-level validation errors carried on an entity, so an invalid entity
/// can be handed back to the caller for correction instead of being thrown
/// away.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ValidationErrors {
    base: Vec<String>,
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn add<M>(&mut self, field: &'static str, message: M)
    where
        M: Into<String>,
    {
        self.fields.entry(field).or_insert_with(Vec::new).push(message.into());
    }

    /// Record an error not tied to any particular field.
    pub fn add_base<M>(&mut self, message: M)
    where
        M: Into<String>,
    {
        self.base.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.fields.is_empty()
    }

    pub fn base(&self) -> &[String] {
        &self.base
    }

    pub fn on(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A subset of a document's data that can safely be publicly exposed, in
/// the shape a downstream payload builder consumes.
#[derive(Debug, Serialize)]
pub struct PublicData {
    pub id: Uuid,
    pub slug: String,
    pub kind: DocumentKind,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub state: State,
    pub submitted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub organisations: Vec<Uuid>,
    pub related_documents: Vec<Uuid>,
}

impl Document {
    /// Author a new document of the given kind.
    ///
    /// Capability-gated associations start empty for kinds which carry
    /// them, and absent for kinds which do not.
    pub fn new(
        kind: DocumentKind,
        slug: &str,
        title: &str,
        body: &str,
        author: &User,
    ) -> Document {
        let capabilities = kind.capabilities();
        let now = Utc::now();

        Document {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            kind,
            title: title.to_string(),
            summary: String::new(),
            body: body.to_string(),
            author: author.id,
            state: State::Draft,
            submitted: false,
            lock_version: 0,
            created_at: now,
            updated_at: now,
            scheduled_at: None,
            organisations: Vec::new(),
            topics: gated_field(capabilities, CapabilityBits::TOPICS),
            ministerial_roles: gated_field(capabilities, CapabilityBits::MINISTERS),
            inapplicable_nations:
                gated_field(capabilities, CapabilityBits::INAPPLICABLE_NATIONS),
            attachment: None,
            supporting_documents: if capabilities
                .contains(CapabilityBits::SUPPORTING_DOCUMENTS)
            {
                Some(Vec::new())
            } else {
                None
            },
            errors: ValidationErrors::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> Uuid {
        self.author
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Has this document been sent for review?
    ///
    /// Independent of [`Document::state`]: submission is a flag, not a
    /// state transition.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn lock_version(&self) -> i32 {
        self.lock_version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    pub fn organisations(&self) -> &[Uuid] {
        &self.organisations
    }

    pub fn topics(&self) -> Option<&[String]> {
        self.topics.as_ref().map(Vec::as_slice)
    }

    pub fn ministerial_roles(&self) -> Option<&[String]> {
        self.ministerial_roles.as_ref().map(Vec::as_slice)
    }

    pub fn inapplicable_nations(&self) -> Option<&[String]> {
        self.inapplicable_nations.as_ref().map(Vec::as_slice)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn supporting_documents(&self) -> Option<&[SupportingDocument]> {
        self.supporting_documents.as_ref().map(Vec::as_slice)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Does this document's kind carry the given capability?
    pub fn supports<C>(&self) -> bool
    where
        C: Capability,
    {
        self.kind.supports(C::bits())
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary = summary.to_string();
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
    }

    pub fn set_organisations(&mut self, organisations: Vec<Uuid>) {
        self.organisations = organisations;
    }

    pub fn set_topics(&mut self, topics: Vec<String>)
    -> Result<(), MissingCapability> {
        self.kind.capabilities().require(CapabilityBits::TOPICS)?;
        self.topics = Some(topics);
        Ok(())
    }

    pub fn set_ministerial_roles(&mut self, roles: Vec<String>)
    -> Result<(), MissingCapability> {
        self.kind.capabilities().require(CapabilityBits::MINISTERS)?;
        self.ministerial_roles = Some(roles);
        Ok(())
    }

    pub fn set_inapplicable_nations(&mut self, nations: Vec<String>)
    -> Result<(), MissingCapability> {
        self.kind.capabilities()
            .require(CapabilityBits::INAPPLICABLE_NATIONS)?;
        self.inapplicable_nations = Some(nations);
        Ok(())
    }

    pub fn set_attachment(&mut self, attachment: Attachment)
    -> Result<(), MissingCapability> {
        self.kind.capabilities().require(CapabilityBits::ATTACHMENT)?;
        self.attachment = Some(attachment);
        Ok(())
    }

    pub fn add_supporting_document(&mut self, title: &str, body: &str)
    -> Result<(), MissingCapability> {
        self.kind.capabilities()
            .require(CapabilityBits::SUPPORTING_DOCUMENTS)?;
        let child =
            SupportingDocument::new(self.id, title.to_string(), body.to_string());
        self.supporting_documents
            .get_or_insert_with(Vec::new)
            .push(child);
        Ok(())
    }

    /// Check domain validity.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.add("title", "can't be blank");
        }
        if self.body.trim().is_empty() {
            errors.add("body", "can't be blank");
        }

        errors
    }

    /// Title annotated with the document's effective workflow position.
    ///
    /// A draft that has been sent for review reads as submitted even though
    /// its state is still `draft`.
    pub fn title_with_state(&self) -> String {
        let label = if self.state == State::Draft && self.submitted {
            "submitted".to_string()
        } else {
            self.state.to_string()
        };
        format!("{} ({})", self.title, label)
    }

    /// Send this document for review.
    ///
    /// Sets the submission flag unconditionally; submitting an already
    /// submitted document is a no-op success. The state is not changed, and
    /// no access policy is consulted.
    pub fn submit(&mut self, store: &dyn Repository, user: &User)
    -> Result<(), SubmitError> {
        self.submitted = true;
        self.touch();

        let saved = store.save(self, None)?;
        self.lock_version = saved.lock_version;

        audit::log_actor(user.id, "documents", self.id, "submit", json!({
            "slug": &self.slug,
        }));

        Ok(())
    }

    /// Publish this document.
    ///
    /// The decision whether `user` may publish belongs to the access gate;
    /// a denial is returned with the gate's reason and also attached to the
    /// document's error set, leaving the stored document untouched.
    ///
    /// The write is conditioned on the stored version still equalling
    /// `expected_version` (the document's own version when `None`), so of
    /// two publishers racing from the same version exactly one succeeds and
    /// the other observes [`PublishError::Stale`].
    pub fn publish(
        &mut self,
        store: &dyn Repository,
        gate: &dyn AccessGate,
        user: &User,
        expected_version: Option<i32>,
    ) -> Result<(), PublishError> {
        let expected = expected_version.unwrap_or(self.lock_version);

        if !self.state.publishable() {
            return Err(TransitionError {
                from: self.state,
                to: State::Published,
            }.into());
        }

        if !gate.publishable_by(self, user) {
            let reason = gate.denial_reason(self, user);
            self.errors.add_base(reason.clone());
            return Err(PublishError::Denied(reason));
        }

        let previous_state = self.state;
        let previous_version = self.lock_version;

        self.lock_version = expected;
        self.state = State::Published;
        self.touch();

        let saved = match store.save(self, Some(expected)) {
            Ok(saved) => saved,
            Err(err) => {
                self.state = previous_state;
                self.lock_version = previous_version;
                return Err(err.into());
            }
        };
        self.lock_version = saved.lock_version;

        audit::log_actor(user.id, "documents", self.id, "publish", json!({
            "slug": &self.slug,
            "version": self.lock_version,
        }));
        info!("document {} published by {}", self.slug, user.name);

        Ok(())
    }

    /// Derive a new draft from this document.
    ///
    /// The new document copies the content fields, organisations, and the
    /// associations its kind is capable of carrying, and starts its own
    /// lifecycle as an unsubmitted draft owned by `user`. Relation edges
    /// are copied by value in both directions, pointing at the same
    /// counterpart documents. This document is left untouched, preserving
    /// the edition history.
    ///
    /// An invalid copy is returned unsaved with its error set populated and
    /// supporting-document cloning skipped, so the caller can hand it back
    /// for correction.
    pub fn create_draft(&self, store: &dyn Repository, user: &User)
    -> Result<Document, CreateDraftError> {
        let capabilities = self.kind.capabilities();
        let now = Utc::now();

        let mut draft = Document {
            id: Uuid::new_v4(),
            slug: self.slug.clone(),
            kind: self.kind,
            title: self.title.clone(),
            summary: self.summary.clone(),
            body: self.body.clone(),
            author: user.id,
            state: State::Draft,
            submitted: false,
            lock_version: 0,
            created_at: now,
            updated_at: now,
            scheduled_at: None,
            organisations: self.organisations.clone(),
            topics: if capabilities.contains(CapabilityBits::TOPICS) {
                self.topics.clone()
            } else {
                None
            },
            ministerial_roles:
                if capabilities.contains(CapabilityBits::MINISTERS) {
                    self.ministerial_roles.clone()
                } else {
                    None
                },
            inapplicable_nations:
                if capabilities.contains(CapabilityBits::INAPPLICABLE_NATIONS) {
                    self.inapplicable_nations.clone()
                } else {
                    None
                },
            attachment: None,
            supporting_documents: if capabilities
                .contains(CapabilityBits::SUPPORTING_DOCUMENTS)
            {
                Some(Vec::new())
            } else {
                None
            },
            errors: ValidationErrors::default(),
        };

        draft.errors = draft.validate();
        if !draft.errors.is_empty() {
            return Ok(draft);
        }

        if capabilities.contains(CapabilityBits::SUPPORTING_DOCUMENTS) {
            if let Some(children) = self.supporting_documents.as_ref() {
                draft.supporting_documents = Some(children.iter()
                    .map(|child| child.reparent(draft.id))
                    .collect());
            }
        }

        let saved = store.save(&draft, None)?;
        draft.lock_version = saved.lock_version;

        for edge in store.relations_of(self.id)? {
            let copy = if edge.document == self.id {
                DocumentRelation::new(draft.id, edge.related_document)
            } else {
                DocumentRelation::new(edge.document, draft.id)
            };
            store.add_relation(copy)?;
        }

        audit::log_actor(user.id, "documents", draft.id, "create-draft", json!({
            "source": self.id,
        }));

        Ok(draft)
    }

    /// Documents related to this one, in either direction.
    ///
    /// Targets of outgoing edges come first, then sources of incoming
    /// edges, deduplicated by identity in first-seen order.
    pub fn related_documents(&self, store: &dyn Repository)
    -> Result<Vec<Document>, RelatedDocumentsError> {
        let mut documents = Vec::new();

        for id in self.related_document_ids(store)? {
            documents.push(store.find(id)?);
        }

        Ok(documents)
    }

    fn related_document_ids(&self, store: &dyn Repository)
    -> Result<Vec<Uuid>, StoreError> {
        let edges = store.relations_of(self.id)?;

        let outgoing = edges.iter()
            .filter(|edge| edge.document == self.id)
            .map(|edge| edge.related_document);
        let incoming = edges.iter()
            .filter(|edge| edge.related_document == self.id)
            .map(|edge| edge.document);

        let mut seen = HashSet::new();
        Ok(outgoing.chain(incoming)
            .filter(|id| seen.insert(*id))
            .collect())
    }

    /// Withdraw this document from the live site.
    pub fn archive(&mut self, store: &dyn Repository, user: &User)
    -> Result<(), UpdateStateError> {
        self.transition_to(store, user, State::Archived, "archive")
    }

    /// Discard this document.
    ///
    /// A terminal state transition; the entity itself is never removed by
    /// this crate.
    pub fn delete(&mut self, store: &dyn Repository, user: &User)
    -> Result<(), UpdateStateError> {
        self.transition_to(store, user, State::Deleted, "delete")
    }

    /// Queue this draft for timed publication.
    pub fn schedule(
        &mut self,
        store: &dyn Repository,
        user: &User,
        at: DateTime<Utc>,
    ) -> Result<(), UpdateStateError> {
        if !self.state.schedulable() {
            return Err(TransitionError {
                from: self.state,
                to: State::Scheduled,
            }.into());
        }

        self.scheduled_at = Some(at);
        let result = self.transition_to(store, user, State::Scheduled, "schedule");
        if result.is_err() {
            self.scheduled_at = None;
        }
        result
    }

    fn transition_to(
        &mut self,
        store: &dyn Repository,
        user: &User,
        to: State,
        action: &str,
    ) -> Result<(), UpdateStateError> {
        let allowed = match to {
            State::Archived => self.state.archivable(),
            State::Deleted => self.state.deletable(),
            State::Scheduled => self.state.schedulable(),
            _ => false,
        };
        if !allowed {
            return Err(TransitionError { from: self.state, to }.into());
        }

        let previous = self.state;
        self.state = to;
        self.touch();

        match store.save(self, None) {
            Ok(saved) => self.lock_version = saved.lock_version,
            Err(err) => {
                self.state = previous;
                return Err(err.into());
            }
        }

        audit::log_actor(user.id, "documents", self.id, action, json!({
            "slug": &self.slug,
        }));

        Ok(())
    }

    /// Get the public portion of this document's data.
    pub fn get_public(&self, store: &dyn Repository)
    -> Result<PublicData, StoreError> {
        Ok(PublicData {
            id: self.id,
            slug: self.slug.clone(),
            kind: self.kind,
            title: self.title.clone(),
            summary: self.summary.clone(),
            body: self.body.clone(),
            state: self.state,
            submitted: self.submitted,
            created_at: self.created_at,
            updated_at: self.updated_at,
            organisations: self.organisations.clone(),
            related_documents: self.related_document_ids(store)?,
        })
    }

    pub(crate) fn set_lock_version(&mut self, version: i32) {
        self.lock_version = version;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn gated_field(capabilities: CapabilityBits, required: CapabilityBits)
-> Option<Vec<String>> {
    if capabilities.contains(required) {
        Some(Vec::new())
    } else {
        None
    }
}

/// An illegal lifecycle move.
#[derive(Debug, Fail)]
#[fail(display = "cannot move a {} document to {}", from, to)]
pub struct TransitionError {
    pub from: State,
    pub to: State,
}

#[derive(Debug, Fail)]
pub enum SubmitError {
    /// Store error.
    #[fail(display = "{}", _0)]
    Save(#[cause] SaveDocumentError),
}

impl_from! { for SubmitError ;
    SaveDocumentError => |e| SubmitError::Save(e),
}

#[derive(Debug, Fail)]
pub enum PublishError {
    /// The access gate refused publication.
    #[fail(display = "{}", _0)]
    Denied(String),
    /// The document was modified by someone else since it was read.
    #[fail(display = "Document was modified concurrently")]
    Stale,
    /// Publication is not a legal move from the current state.
    #[fail(display = "{}", _0)]
    Transition(#[cause] TransitionError),
    /// Store error.
    #[fail(display = "{}", _0)]
    Save(#[cause] SaveDocumentError),
}

impl_from! { for PublishError ;
    TransitionError => |e| PublishError::Transition(e),
    SaveDocumentError => |e| match e {
        SaveDocumentError::Stale => PublishError::Stale,
        other => PublishError::Save(other),
    },
}

#[derive(Debug, Fail)]
pub enum CreateDraftError {
    /// Store error while writing the new draft.
    #[fail(display = "{}", _0)]
    Save(#[cause] SaveDocumentError),
    /// Store error while copying relations.
    #[fail(display = "{}", _0)]
    Store(#[cause] StoreError),
}

impl_from! { for CreateDraftError ;
    SaveDocumentError => |e| CreateDraftError::Save(e),
    StoreError => |e| CreateDraftError::Store(e),
}

#[derive(Debug, Fail)]
pub enum RelatedDocumentsError {
    /// Store error.
    #[fail(display = "{}", _0)]
    Store(#[cause] StoreError),
    /// A related document could not be loaded.
    #[fail(display = "{}", _0)]
    Find(#[cause] FindDocumentError),
}

impl_from! { for RelatedDocumentsError ;
    StoreError => |e| RelatedDocumentsError::Store(e),
    FindDocumentError => |e| RelatedDocumentsError::Find(e),
}

#[derive(Debug, Fail)]
pub enum UpdateStateError {
    /// The requested move is not legal from the current state.
    #[fail(display = "{}", _0)]
    Transition(#[cause] TransitionError),
    /// Store error.
    #[fail(display = "{}", _0)]
    Save(#[cause] SaveDocumentError),
}

impl_from! { for UpdateStateError ;
    TransitionError => |e| UpdateStateError::Transition(e),
    SaveDocumentError => |e| UpdateStateError::Save(e),
}

#[cfg(test)]
mod tests {
    use crate::capabilities::Topics;
    use super::*;

    fn author() -> User {
        User::new("Test author")
    }

    #[test]
    fn title_with_state_reads_submission_flag() {
        let author = author();
        let mut document = Document::new(
            DocumentKind::CaseStudy,
            "beech-restoration",
            "Beech restoration",
            "Body",
            &author,
        );

        assert_eq!(document.title_with_state(), "Beech restoration (draft)");

        document.submitted = true;
        assert_eq!(document.title_with_state(), "Beech restoration (submitted)");

        document.state = State::Published;
        assert_eq!(document.title_with_state(), "Beech restoration (published)");
    }

    #[test]
    fn validation_requires_title_and_body() {
        let author = author();
        let mut document = Document::new(
            DocumentKind::CaseStudy, "a-case", "A case", "Body", &author);
        assert!(document.validate().is_empty());

        document.set_body("  ");
        document.set_title("");
        let errors = document.validate();
        assert_eq!(errors.on("title"), ["can't be blank"]);
        assert_eq!(errors.on("body"), ["can't be blank"]);
        assert!(errors.base().is_empty());
    }

    #[test]
    fn gated_mutators_respect_the_kind() {
        let author = author();
        let mut speech = Document::new(
            DocumentKind::Speech, "a-speech", "A speech", "Body", &author);

        assert!(speech.set_ministerial_roles(vec!["chancellor".into()]).is_ok());
        assert!(speech.set_topics(vec!["economy".into()]).is_err());
        assert!(speech.topics().is_none());
        assert!(!speech.supports::<Topics>());
    }

    #[test]
    fn unsupported_associations_are_absent_not_empty() {
        let author = author();
        let speech = Document::new(
            DocumentKind::Speech, "a-speech", "A speech", "Body", &author);
        let guide = Document::new(
            DocumentKind::DetailedGuide, "a-guide", "A guide", "Body", &author);

        assert!(speech.topics().is_none());
        assert!(speech.supporting_documents().is_none());
        assert_eq!(guide.topics().map(<[_]>::len), Some(0));
        assert_eq!(guide.supporting_documents().map(<[_]>::len), Some(0));
    }

    #[test]
    fn state_predicates() {
        assert!(State::Draft.publishable());
        assert!(State::Rejected.publishable());
        assert!(State::Scheduled.publishable());
        assert!(!State::Published.publishable());
        assert!(!State::Deleted.publishable());
        assert!(State::Published.archivable());
        assert!(!State::Draft.archivable());
        assert!(!State::Published.deletable());
        assert!(State::Draft.schedulable());
        assert!(!State::Submitted.schedulable());
    }
}
