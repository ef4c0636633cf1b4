/**
 * Request Payload Validation
 *
 * Validation rules for the signup, signin, and update payloads.
 *
 * Failures carry an internal description for logging, but every
 * validation error renders the same generic client message (see
 * `ApiError::client_message`), so a caller cannot learn which field
 * failed or whether a username is taken.
 */

use crate::auth::handlers::types::{SigninRequest, SignupRequest, UpdateRequest};
use crate::error::ApiError;

/// Check email syntax
///
/// Deliberately loose: one `@` separating a non-empty local part from a
/// domain that contains a dot, with no whitespace anywhere. Full RFC 5322
/// parsing is not the goal; the username just has to look like an email.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Validate a signup payload: email-syntax username, all fields non-empty
pub fn validate_signup(request: &SignupRequest) -> Result<(), ApiError> {
    if !is_valid_email(&request.username) {
        return Err(ApiError::InvalidInput("username is not an email".into()));
    }
    if request.first_name.is_empty() {
        return Err(ApiError::InvalidInput("firstName is empty".into()));
    }
    if request.last_name.is_empty() {
        return Err(ApiError::InvalidInput("lastName is empty".into()));
    }
    if request.password.is_empty() {
        return Err(ApiError::InvalidInput("password is empty".into()));
    }
    Ok(())
}

/// Validate a signin payload
pub fn validate_signin(request: &SigninRequest) -> Result<(), ApiError> {
    if !is_valid_email(&request.username) {
        return Err(ApiError::InvalidInput("username is not an email".into()));
    }
    if request.password.is_empty() {
        return Err(ApiError::InvalidInput("password is empty".into()));
    }
    Ok(())
}

/// Validate an update payload: every field optional, present fields non-empty
pub fn validate_update(request: &UpdateRequest) -> Result<(), ApiError> {
    if request.password.as_deref() == Some("") {
        return Err(ApiError::InvalidInput("password is empty".into()));
    }
    if request.first_name.as_deref() == Some("") {
        return Err(ApiError::InvalidInput("firstName is empty".into()));
    }
    if request.last_name.as_deref() == Some("") {
        return Err(ApiError::InvalidInput("lastName is empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, first: &str, last: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@ex@ample.com"));
    }

    #[test]
    fn test_valid_signup_accepted() {
        assert!(validate_signup(&signup("a@b.com", "A", "B", "pw123456")).is_ok());
    }

    #[test]
    fn test_signup_rejects_bad_fields() {
        assert!(validate_signup(&signup("not-an-email", "A", "B", "pw")).is_err());
        assert!(validate_signup(&signup("a@b.com", "", "B", "pw")).is_err());
        assert!(validate_signup(&signup("a@b.com", "A", "", "pw")).is_err());
        assert!(validate_signup(&signup("a@b.com", "A", "B", "")).is_err());
    }

    #[test]
    fn test_signin_rules() {
        let ok = SigninRequest {
            username: "a@b.com".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(validate_signin(&ok).is_ok());

        let bad_user = SigninRequest {
            username: "nope".to_string(),
            password: "pw123456".to_string(),
        };
        assert!(validate_signin(&bad_user).is_err());

        let empty_password = SigninRequest {
            username: "a@b.com".to_string(),
            password: String::new(),
        };
        assert!(validate_signin(&empty_password).is_err());
    }

    #[test]
    fn test_update_fields_optional_but_non_empty() {
        let none = UpdateRequest {
            password: None,
            first_name: None,
            last_name: None,
        };
        assert!(validate_update(&none).is_ok());

        let some = UpdateRequest {
            password: Some("newpass".to_string()),
            first_name: Some("New".to_string()),
            last_name: None,
        };
        assert!(validate_update(&some).is_ok());

        let empty = UpdateRequest {
            password: None,
            first_name: Some(String::new()),
            last_name: None,
        };
        assert!(validate_update(&empty).is_err());
    }
}
