//! Access-control boundary.
//!
//! Deciding *whether* a user may publish a document is policy owned by an
//! external component. The engine only consumes the verdict and, when
//! denied, a human-readable reason.

use crate::models::{Document, User};

pub trait AccessGate {
    /// May `user` publish `document`?
    fn publishable_by(&self, document: &Document, user: &User) -> bool;

    /// Why `user` may not publish `document`.
    ///
    /// Only consulted after [`AccessGate::publishable_by`] returned `false`.
    fn denial_reason(&self, document: &Document, user: &User) -> String;
}
