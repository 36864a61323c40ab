use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::sanitize;

/// Contact details captured at the final step only. Kept in volatile
/// memory — never written into a session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Validate shape before submission. Mirrors the backend's contract:
    /// name 2–100 chars, well-formed email, phone (when given) at least
    /// ten digit-class characters.
    pub fn validate(&self) -> Result<(), CoreError> {
        let name = self.name.trim();
        let name_chars = name.chars().count();
        if name_chars < 2 || name_chars > 100 {
            return Err(CoreError::InvalidField {
                field: "name".into(),
                reason: "must be 2-100 characters".into(),
            });
        }
        if sanitize::sanitize_email(&self.email).is_empty() {
            return Err(CoreError::InvalidField {
                field: "email".into(),
                reason: "not a valid email address".into(),
            });
        }
        if let Some(phone) = &self.phone
            && !sanitize::is_valid_phone(phone)
        {
            return Err(CoreError::InvalidField {
                field: "phone".into(),
                reason: "not a valid phone number".into(),
            });
        }
        Ok(())
    }

    /// Return a copy with normalized email and phone.
    pub fn normalized(&self) -> ContactInfo {
        ContactInfo {
            name: self.name.trim().to_string(),
            email: sanitize::sanitize_email(&self.email),
            phone: self.phone.as_deref().and_then(sanitize::sanitize_phone),
        }
    }
}
