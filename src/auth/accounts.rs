/**
 * Account Model and Provisioning
 *
 * Every user owns exactly one wallet account, created in the same
 * transaction as the user row during signup with a randomized starting
 * balance.
 */

use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Inclusive lower bound of the starting balance
const INITIAL_BALANCE_MIN: f64 = 1.0;

/// Exclusive upper bound of the starting balance
const INITIAL_BALANCE_MAX: f64 = 10_000.0;

/// Account struct representing a row in the `accounts` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Owning user (one-to-one)
    pub user_id: Uuid,
    /// Current balance
    pub balance: f64,
}

/// Draw a starting balance uniformly from [1, 10000)
pub fn random_initial_balance() -> f64 {
    rand::thread_rng().gen_range(INITIAL_BALANCE_MIN..INITIAL_BALANCE_MAX)
}

/// Create the account row for a freshly created user
///
/// Runs on the signup transaction so the user and account commit
/// atomically; a failure here rolls both back.
pub async fn create_account(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    balance: f64,
) -> Result<Account, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (user_id, balance)
        VALUES ($1, $2)
        RETURNING user_id, balance
        "#,
    )
    .bind(user_id)
    .bind(balance)
    .fetch_one(&mut **tx)
    .await?;

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_balance_in_range() {
        for _ in 0..1000 {
            let balance = random_initial_balance();
            assert!(balance >= INITIAL_BALANCE_MIN);
            assert!(balance < INITIAL_BALANCE_MAX);
        }
    }
}
