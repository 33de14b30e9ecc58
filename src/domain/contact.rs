//! Contacts that tasks can be assigned to

use serde::{Deserialize, Serialize};

/// A contact record as stored inside a task's `assignedTo` list.
///
/// Two contacts are the same contact only when all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub color: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: &str, color: &str, email: &str, phone: &str) -> Self {
        Contact {
            name: name.to_string(),
            color: color.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First letter of the first two words of a name.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Built-in address book
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Nicole", "#0223CF", "nicole@gmail.com", "+49 12345678"),
        Contact::new("Beck", "#CB02CF", "beck@hotmail", "+49 12345678"),
        Contact::new("Max", "#CB02CF", "max@hotmail", "+49 12345678"),
        Contact::new("John", "#0223CF", "john@gmail.com", "+49 12345678"),
        Contact::new("Jack", "#FF7A00", "jack@hotmail", "+49 12345678"),
        Contact::new("Johan", "#1FD7C1", "johan@hotmail", "+49 12345678"),
    ]
}

/// Look up a contact by name, ignoring case.
pub fn find_contact<'a>(contacts: &'a [Contact], name: &str) -> Option<&'a Contact> {
    let wanted = name.trim().to_lowercase();
    contacts.iter().find(|c| c.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Anna Schmidt"), "AS");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("Nicole"), "N");
    }

    #[test]
    fn test_initials_ignores_third_word() {
        assert_eq!(initials("Anna Maria Schmidt"), "AM");
    }

    #[test]
    fn test_initials_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials(" Bob"), "B");
    }

    #[test]
    fn test_find_contact_case_insensitive() {
        let contacts = seed_contacts();
        let found = find_contact(&contacts, "johan").unwrap();
        assert_eq!(found.email, "johan@hotmail");
        assert!(find_contact(&contacts, "Nobody").is_none());
    }

    #[test]
    fn test_contact_identity_uses_all_fields() {
        let a = Contact::new("Max", "#CB02CF", "max@hotmail", "+49 12345678");
        let mut b = a.clone();
        assert_eq!(a, b);
        b.phone = "+49 0".to_string();
        assert_ne!(a, b);
    }
}
