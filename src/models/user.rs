//! Platform users, referenced by documents as authors and actors.

use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

/// A subset of a user's data that can safely be publicly exposed.
#[derive(Debug, Serialize)]
pub struct PublicData {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new<N>(name: N) -> User
    where
        N: Into<String>,
    {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Get the public portion of this user's data.
    pub fn get_public(&self) -> PublicData {
        PublicData {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
