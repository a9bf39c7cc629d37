//! Audit trail of actions performed on documents.
//!
//! Entries are emitted through the [`log`] facade under the `audit` target
//! as single-line JSON records; the hosting service decides where that
//! target is shipped. Storage of the trail is not this crate's concern.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::Cell;
use uuid::Uuid;

std::thread_local! {
    static ACTOR: Cell<Option<Actor>> = Cell::new(None);
}

/// Entity responsible for an action.
#[derive(Clone, Copy, Debug)]
pub enum Actor {
    /// System. This actor is used for actions carried automatically by the
    /// system, such as completing a timed publication.
    System,
    /// A user.
    User(Uuid),
}

impl Actor {
    fn id(&self) -> Option<Uuid> {
        match *self {
            Actor::System => None,
            Actor::User(id) => Some(id),
        }
    }
}

impl From<Uuid> for Actor {
    fn from(id: Uuid) -> Self {
        Actor::User(id)
    }
}

/// Set actor associated with the current thread, returning the previous
/// one, if any.
pub fn set_actor<A>(actor: A) -> Option<Actor>
where
    Option<Actor>: From<A>,
{
    let actor = Option::from(actor);
    ACTOR.with(|c| c.replace(actor))
}

/// Get actor associated with the current thread.
///
/// ## Panics
///
/// This function will panic if the current thread has no actor associated
/// with it (see [`set_actor()`]).
pub fn get_actor() -> Actor {
    ACTOR.with(Cell::get)
        .expect("no audit actor registered on current thread")
}

/// Run closure in such context that all actions it causes are attributed to
/// the specified actor.
pub fn with_actor<A, F, R>(actor: A, f: F) -> R
where
    Option<Actor>: From<A>,
    F: FnOnce() -> R,
{
    let old = set_actor(actor);
    let r = f();
    set_actor::<Option<Actor>>(old);
    r
}

/// Record an action in the audit trail, attributed to the actor bound to
/// the current thread.
///
/// ## Panics
///
/// This function will panic if the current thread has no actor associated
/// with it (see [`set_actor()`]). For a version taking an explicit actor
/// see [`log_actor()`].
pub fn log<D>(context: &str, context_id: Uuid, kind: &str, data: D)
where
    D: Serialize,
{
    log_actor(get_actor(), context, context_id, kind, data);
}

/// Record an action in the audit trail, attributed to an explicit actor.
pub fn log_actor<A, D>(
    actor: A,
    context: &str,
    context_id: Uuid,
    kind: &str,
    data: D,
)
where
    Actor: From<A>,
    D: Serialize,
{
    match entry(Actor::from(actor), context, context_id, kind, data) {
        Ok(line) => info!(target: "audit", "{}", line),
        Err(err) => error!("could not serialize audit entry: {}", err),
    }
}

fn entry<D>(
    actor: Actor,
    context: &str,
    context_id: Uuid,
    kind: &str,
    data: D,
) -> Result<String, serde_json::Error>
where
    D: Serialize,
{
    serde_json::to_string(&Entry {
        actor: actor.id(),
        context,
        context_id,
        kind,
        timestamp: Utc::now(),
        data,
    })
}

#[derive(Serialize)]
struct Entry<'a, D> {
    actor: Option<Uuid>,
    context: &'a str,
    context_id: Uuid,
    kind: &'a str,
    timestamp: DateTime<Utc>,
    data: D,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use super::*;

    #[test]
    fn thread_actor_binding() {
        let user = Uuid::new_v4();

        let seen = with_actor(user, || get_actor());
        match seen {
            Actor::User(id) => assert_eq!(id, user),
            Actor::System => panic!("expected the bound user"),
        }

        assert!(ACTOR.with(Cell::get).is_none());
    }

    #[test]
    fn entries_carry_actor_and_payload() {
        let user = Uuid::new_v4();
        let document = Uuid::new_v4();

        let line = entry(
            Actor::from(user),
            "documents",
            document,
            "publish",
            json!({ "version": 4 }),
        ).unwrap();

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["actor"], json!(user.to_string()));
        assert_eq!(value["context"], json!("documents"));
        assert_eq!(value["kind"], json!("publish"));
        assert_eq!(value["data"]["version"], json!(4));
    }

    #[test]
    fn system_actor_has_no_id() {
        let line = entry(Actor::System, "documents", Uuid::new_v4(), "publish",
            json!({})).unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["actor"], Value::Null);
    }
}
