//! Registered users

use serde::{Deserialize, Serialize};

/// Entry of the users document. Stored as entered, without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        User {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}
