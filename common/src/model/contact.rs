use regex::Regex;
use serde::{Deserialize, Serialize};

/// The in-progress values of the contact form.
///
/// A draft is mutated field by field while the user types and is only
/// turned into a [`StoredContact`] (or handed to a submit handler) once it
/// passes [`ContactDraft::validate`]. The `tag` field is free-form and
/// never validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub tag: String,
}

/// Per-field advisory messages produced by [`ContactDraft::validate`].
///
/// An empty string means the field is valid. The whole set is recomputed on
/// every submission attempt, so stale messages never survive a re-check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ValidationErrors {
    /// True when no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

impl ContactDraft {
    /// Checks the three required fields and returns the full error set.
    ///
    /// Rules:
    /// - `name` must be non-empty after trimming.
    /// - `phone` must be non-empty after trimming and at least 7 characters long.
    /// - `email` must be non-empty after trimming and contain something of
    ///   the shape `x@y.z` with no whitespace inside.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.name = "El nombre es obligatorio.".to_string();
        }

        if self.phone.trim().is_empty() {
            errors.phone = "El teléfono es obligatorio.".to_string();
        } else if self.phone.trim().chars().count() < 7 {
            errors.phone = "El teléfono debe tener mínimo 7 caracteres.".to_string();
        }

        if self.email.trim().is_empty() {
            errors.email = "El correo es obligatorio.".to_string();
        } else if !Regex::new(r"\S+@\S+\.\S+").unwrap().is_match(&self.email) {
            errors.email = "El correo no tiene un formato válido.".to_string();
        }

        errors
    }
}

/// A contact as persisted in the local fallback store: the draft fields
/// plus a timestamp-based identifier assigned at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredContact {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub tag: String,
}

impl StoredContact {
    pub fn from_draft(draft: ContactDraft, id: u64) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            tag: draft.tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Ana".to_string(),
            phone: "1234567".to_string(),
            email: "ana@test.com".to_string(),
            tag: String::new(),
        }
    }

    #[test]
    fn test_empty_draft_fails_all_required_fields() {
        let errors = ContactDraft::default().validate();
        assert_eq!(errors.name, "El nombre es obligatorio.");
        assert_eq!(errors.phone, "El teléfono es obligatorio.");
        assert_eq!(errors.email, "El correo es obligatorio.");
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = valid_draft().validate();
        assert_eq!(errors, ValidationErrors::default());
        assert!(errors.is_valid());
    }

    #[test]
    fn test_whitespace_name_is_required() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = draft.validate();
        assert_eq!(errors.name, "El nombre es obligatorio.");
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_phone_shorter_than_seven_characters() {
        for phone in ["1", "123", "123456"] {
            let mut draft = valid_draft();
            draft.phone = phone.to_string();
            let errors = draft.validate();
            assert_eq!(errors.phone, "El teléfono debe tener mínimo 7 caracteres.");
        }
    }

    #[test]
    fn test_phone_length_counts_trimmed_value() {
        let mut draft = valid_draft();
        draft.phone = "  123456  ".to_string();
        assert!(!draft.validate().is_valid());

        draft.phone = "  1234567  ".to_string();
        assert!(draft.validate().is_valid());
    }

    #[test]
    fn test_email_format() {
        let cases = [
            ("a@b.c", true),
            ("ana@test.com", true),
            ("user.name+tag@example.co.uk", true),
            ("bad", false),
            ("user@domain", false),
            ("a.b@domain", false),
            ("@example.com", false),
            ("user@ example.com", false),
        ];
        for (email, ok) in cases {
            let mut draft = valid_draft();
            draft.email = email.to_string();
            let errors = draft.validate();
            assert_eq!(
                errors.email.is_empty(),
                ok,
                "unexpected verdict for {email:?}: {:?}",
                errors.email
            );
        }
    }

    #[test]
    fn test_invalid_email_message() {
        let mut draft = valid_draft();
        draft.email = "bad".to_string();
        assert_eq!(
            draft.validate().email,
            "El correo no tiene un formato válido."
        );
    }

    #[test]
    fn test_tag_is_never_validated() {
        let mut draft = valid_draft();
        draft.tag = "   whatever goes here   ".to_string();
        assert!(draft.validate().is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let draft = ContactDraft {
            name: String::new(),
            phone: "123".to_string(),
            email: "bad".to_string(),
            tag: String::new(),
        };
        assert_eq!(draft.validate(), draft.validate());
    }

    #[test]
    fn test_stored_contact_keeps_draft_fields() {
        let contact = StoredContact::from_draft(valid_draft(), 1700000000000);
        assert_eq!(contact.id, 1700000000000);
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.phone, "1234567");
        assert_eq!(contact.email, "ana@test.com");
        assert_eq!(contact.tag, "");
    }

    #[test]
    fn test_stored_contact_serialization() {
        let contact = StoredContact::from_draft(valid_draft(), 42);
        let json = serde_json::to_string(&contact).unwrap();
        let back: StoredContact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contact);
        assert!(json.contains("\"id\":42"));
    }
}
