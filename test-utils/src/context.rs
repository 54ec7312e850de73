use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment: an in-memory SQLite database and a session
/// backed by it.
///
/// Both fields start out as `None` and are created on first access, so a
/// test only pays for what it touches. They live as long as the context.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting to a fresh in-memory
    /// SQLite instance on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The connection
    /// - `Err(TestError::Database)` - Connecting failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the given CREATE TABLE statements against the test
    /// database. Called by `TestBuilder::build()`; tests rarely need it
    /// directly.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(db.get_database_backend().build(&stmt)).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating it on first call.
    ///
    /// The session is stored in the same in-memory database as everything
    /// else; the first call migrates the session table and builds a
    /// session with the 7-day inactivity expiry the server uses.
    ///
    /// # Returns
    /// - `Ok(&Session)` - The session
    /// - `Err(TestError::Database)` - Database or store setup failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Returns both the database and the session, initializing whichever
    /// is missing. One call avoids the borrow conflicts of calling
    /// `database()` and `session()` back to back.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both handles
    /// - `Err(TestError::Database)` - Initialization failed
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
