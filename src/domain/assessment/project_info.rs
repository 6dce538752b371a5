//! Free-form metadata attached to an assessment run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Who ran the assessment and for which project. Never scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub user_name: String,
    pub project_name: String,
    pub organization: String,
    pub email: String,
    pub phone: String,
}

impl ProjectInfo {
    /// Checks that every field is filled and that email and phone are well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("user_name", &self.user_name),
            ("project_name", &self.project_name),
            ("organization", &self.organization),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(name));
            }
        }

        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld without spaces",
            ));
        }
        if !is_valid_phone(self.phone.trim()) {
            return Err(ValidationError::invalid_format(
                "phone",
                "expected an optional '+' followed by 7 to 15 digits",
            ));
        }
        Ok(())
    }
}

/// `local@host.tld`: one '@', no whitespace, a dot inside the host part with
/// text on both sides.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, host)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || host.contains('@') {
        return false;
    }
    match host.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < host.len(),
        None => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> ProjectInfo {
        ProjectInfo {
            user_name: "سارة".to_string(),
            project_name: "بوابة الخدمات".to_string(),
            organization: "الهيئة".to_string(),
            email: "sara@example.sa".to_string(),
            phone: "+966500000000".to_string(),
        }
    }

    #[test]
    fn complete_info_is_valid() {
        assert!(info().validate().is_ok());
    }

    #[test]
    fn blank_field_is_rejected() {
        let mut i = info();
        i.organization = "   ".to_string();
        assert_eq!(
            i.validate().unwrap_err(),
            ValidationError::empty_field("organization")
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["ab.co", "a@bco", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@b@c.de"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn phone_shapes() {
        for ok in ["0501234", "+966500000000", "123456789012345"] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in ["050123", "1234567890123456", "+96650-000", "++9665000000", "phone"] {
            assert!(!is_valid_phone(bad), "{bad}");
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(info()).unwrap();
        assert!(json.get("userName").is_some());
        assert!(json.get("projectName").is_some());
    }
}
