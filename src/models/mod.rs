//! Data and behaviours modelled as objects.

pub mod document;
pub mod relation;
pub mod user;

pub use self::{
    document::{Attachment, Document, State, SupportingDocument, ValidationErrors},
    relation::DocumentRelation,
    user::User,
};
