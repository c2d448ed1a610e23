//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use kernel::id::{Id, UserId};
use kernel::page::{Page, Paged};
use kernel::principal::RoleSet;
use platform::password::HashedPassword;

use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Username;
use crate::error::{AccountsError, AccountsResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = r#"
    user_id,
    username,
    username_canonical,
    display_name,
    password_hash,
    roles,
    created_at,
    updated_at
"#;

impl UserRepository for PgAccountsRepository {
    async fn create(&self, user: &NewUser) -> AccountsResult<User> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                username,
                username_canonical,
                display_name,
                password_hash,
                roles,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                user_id,
                username,
                username_canonical,
                display_name,
                password_hash,
                roles,
                created_at,
                updated_at
            "#,
        )
        .bind(user.username.original())
        .bind(user.username.canonical())
        .bind(&user.display_name)
        .bind(user.password_hash.as_phc_string())
        .bind(user.roles.codes())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AccountsError::UsernameTaken
            } else {
                AccountsError::Database(e)
            }
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username_canonical = $1"
        ))
        .bind(username.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &Username) -> AccountsResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username_canonical = $1)",
        )
        .bind(username.canonical())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn list(&self, page: Page) -> AccountsResult<Paged<User>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|r| r.into_user())
            .collect::<AccountsResult<Vec<_>>>()?;

        Ok(Paged::new(users, total, page))
    }

    async fn update(&self, user: &User) -> AccountsResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                display_name = $2,
                roles = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.value())
        .bind(&user.display_name)
        .bind(user.roles.codes())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AccountsError::UserNotFound);
        }

        Ok(())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        hash: &HashedPassword,
    ) -> AccountsResult<()> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = $3 WHERE user_id = $1",
        )
        .bind(user_id.value())
        .bind(hash.as_phc_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AccountsError::UserNotFound);
        }

        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> AccountsResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AccountsError::HasAuthoredContent
                } else {
                    AccountsError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AccountsError::UserNotFound);
        }

        Ok(())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    username_canonical: String,
    display_name: String,
    password_hash: String,
    roles: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountsResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AccountsError::Internal(format!("Invalid password hash: {}", e)))?;

        let roles = RoleSet::from_codes(self.roles.iter().map(String::as_str))
            .map_err(|code| AccountsError::Internal(format!("Invalid role code: {}", code)))?;

        Ok(User {
            user_id: Id::from_i64(self.user_id),
            username: Username::from_db(self.username, self.username_canonical),
            display_name: self.display_name,
            password_hash,
            roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
