#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The currently signed-in user as returned by the session endpoint.
///
/// Immutable once fetched; replaced wholesale by a re-fetch or a fresh
/// login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Absolute URL of the profile photo, if one was uploaded.
    #[serde(default)]
    pub profile_photo: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Account role assigned by the backend.
///
/// Self-registered accounts receive `Parent`; the other roles are
/// provisioned by an administrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Parent,
    Student,
}

/// Credentials submitted by the login form. Ephemeral, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Fields submitted by the registration form. Ephemeral, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}
