//! User repository.

use chrono::Utc;
use spark_core::entities::User;

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

const PREFIX_USER: &str = "usr";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<String>(0)?,
        username: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        display_name: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl SparkDb {
    /// Create a user row. Username and email uniqueness is enforced by the
    /// schema; violations surface as `DatabaseError::LibSql`.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_USER).await?;

        self.conn()
            .execute(
                "INSERT INTO users (id, username, email, display_name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    username,
                    email,
                    display_name,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            display_name: display_name.map(String::from),
            created_at: now,
        })
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the id is unknown.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, username, email, display_name, created_at FROM users WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Delete a user; saved decks cascade via the schema foreign key.
    pub async fn delete_user(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::SparkDb;
    use crate::error::DatabaseError;

    #[tokio::test]
    async fn create_user_round_trip() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        let user = db
            .create_user("alice", "alice@example.com", Some("Alice"))
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        let fetched = db.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.username, "alice");
        assert_eq!(fetched.display_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        db.create_user("alice", "a@example.com", None).await.unwrap();

        let duplicate = db.create_user("alice", "b@example.com", None).await;
        assert!(matches!(duplicate, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn delete_user_removes_row() {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        let user = db.create_user("alice", "a@example.com", None).await.unwrap();

        db.delete_user(&user.id).await.unwrap();
        assert!(matches!(
            db.get_user(&user.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
