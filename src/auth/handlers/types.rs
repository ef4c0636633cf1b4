/**
 * Handler Request/Response Types
 *
 * Wire types for the user endpoints. Field names on the wire are
 * camelCase; responses never carry the password hash.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::PublicUser;

/// Signup request body
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Login handle; must be a syntactically valid email
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Raw password; hashed before storage
    pub password: String,
}

/// Signin request body
#[derive(Debug, Deserialize, Serialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Profile update request body; all fields optional
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Signup response: confirmation message plus a session token
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub msg: String,
    pub token: String,
}

/// Signin response
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
}

/// Update response
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub msg: String,
}

/// Search response
///
/// The list key is `user`, matching the wire contract of the original
/// client.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub user: Vec<PublicUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signup_request_uses_camel_case() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"username":"a@b.com","firstName":"A","lastName":"B","password":"pw123456"}"#,
        )
        .unwrap();

        assert_eq!(request.username, "a@b.com");
        assert_eq!(request.first_name, "A");
        assert_eq!(request.last_name, "B");
    }

    #[test]
    fn test_update_request_fields_default_to_none() {
        let request: UpdateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.password.is_none());
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());

        let partial: UpdateRequest =
            serde_json::from_str(r#"{"firstName":"New"}"#).unwrap();
        assert_eq!(partial.first_name.as_deref(), Some("New"));
        assert!(partial.last_name.is_none());
    }

    #[test]
    fn test_update_request_ignores_client_supplied_identity() {
        // The update handler scopes the write by the id resolved from the
        // bearer token; an id smuggled into the body must not survive
        // deserialization, let alone reach the query.
        let request: UpdateRequest = serde_json::from_str(
            r#"{"id":"123e4567-e89b-12d3-a456-426614174000","userId":"x","firstName":"New"}"#,
        )
        .unwrap();
        assert_eq!(request.first_name.as_deref(), Some("New"));
    }

    #[test]
    fn test_search_response_shape() {
        let response = SearchResponse { user: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"user":[]}"#);
    }
}
