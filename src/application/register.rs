//! Register user use case

use crate::domain::User;
use crate::error::Result;
use crate::infrastructure::collections::{self, USERS_KEY};
use crate::infrastructure::KeyValueStore;
use log::info;

/// Append `user` to the users document.
///
/// Users are stored as entered; existing entries are not checked.
pub fn register<S: KeyValueStore + ?Sized>(store: &S, user: User) -> Result<usize> {
    let mut users: Vec<User> = collections::load_or_empty(store, USERS_KEY)?;
    users.push(user);
    collections::save(store, USERS_KEY, &users)?;

    info!("event=register users={}", users.len());
    Ok(users.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn test_register_appends_user() {
        let store = MemoryStore::new();
        collections::save(&store, USERS_KEY, &[User::new("Guest", "guest@example.org", "guest")])
            .unwrap();

        let count = register(&store, User::new("Anna Schmidt", "anna@example.org", "pw")).unwrap();
        assert_eq!(count, 2);

        let users: Vec<User> = collections::load(&store, USERS_KEY).unwrap();
        assert_eq!(users[1].name, "Anna Schmidt");
        assert_eq!(users[1].password, "pw");
    }

    #[test]
    fn test_register_on_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(register(&store, User::new("a", "b", "c")).unwrap(), 1);
    }

    #[test]
    fn test_register_allows_duplicates() {
        let store = MemoryStore::new();
        register(&store, User::new("a", "a@x", "1")).unwrap();
        assert_eq!(register(&store, User::new("a", "a@x", "1")).unwrap(), 2);
    }
}
