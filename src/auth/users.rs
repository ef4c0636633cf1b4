/**
 * User Model and Database Operations
 *
 * Queries against the `users` table. User creation runs on a caller-owned
 * transaction so signup can commit the user and its wallet account
 * together; the unique index on `username` is the authoritative duplicate
 * check, surfaced via `is_unique_violation`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Login handle; syntactically an email address, unique
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Projection of a user that is safe to return to clients
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update applied to a user row
///
/// `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Create a new user on an open transaction
///
/// # Arguments
/// * `tx` - Open transaction, committed by the caller
/// * `username` - Login handle (validated upstream)
/// * `first_name` / `last_name` - Profile names
/// * `password_hash` - bcrypt digest, never the raw password
///
/// # Returns
/// Created user or error; a duplicate username surfaces as a database
/// error matched by `is_unique_violation`.
pub async fn create_user(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    first_name: &str,
    last_name: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, first_name, last_name, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, password_hash, first_name, last_name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .bind(now)
    .bind(now)
    .fetch_one(&mut **tx)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Apply a partial update to exactly one user row
///
/// The row is selected by `id` only. Handlers pass the id resolved by the
/// auth middleware, never one supplied in a request body, so a caller can
/// only ever update their own record.
///
/// # Returns
/// Number of rows affected (0 if the user no longer exists).
pub async fn update_user(
    pool: &PgPool,
    id: Uuid,
    changes: &UserChanges,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = COALESCE($1, password_hash),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            updated_at = $4
        WHERE id = $5
        "#,
    )
    .bind(changes.password_hash.as_deref())
    .bind(changes.first_name.as_deref())
    .bind(changes.last_name.as_deref())
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Search users by name substring
///
/// Case-sensitive substring match against first or last name. An empty
/// filter matches every user. Only public fields are selected; the
/// password hash never leaves the database here.
pub async fn search_users(pool: &PgPool, filter: &str) -> Result<Vec<PublicUser>, sqlx::Error> {
    let users = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, username, first_name, last_name
        FROM users
        WHERE first_name LIKE '%' || $1 || '%'
           OR last_name LIKE '%' || $1 || '%'
        ORDER BY created_at ASC
        "#,
    )
    .bind(filter)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// True if the error is a unique-constraint violation
///
/// Used by signup to translate a duplicate username into a conflict
/// instead of trusting the pre-insert existence check.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_serializes_camel_case_without_hash() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            username: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"lastName\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
