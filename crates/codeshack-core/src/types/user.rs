//! Signed-in users

use super::populated::{HasId, Populated};
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Role string the backend assigns to administrators
pub const ADMIN_ROLE: &str = "admin";

/// A user record kept by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    /// Questions the user authored or looked at, most recent last
    #[serde(default)]
    pub history: Vec<Populated<Question>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

impl HasId for User {
    fn id(&self) -> &str {
        &self.id
    }
}
