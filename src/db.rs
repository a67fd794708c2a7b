use anyhow::Context;
use sqlx::{error::ErrorKind, migrate::Migrator, postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections())
        .connect_with(options)
        .await
        .context("connect to database")?;
    tracing::info!("postgresql connection pool established");
    Ok(pool)
}

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies pending migrations; the server must not start on a partial schema.
pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    MIGRATOR.run(pool).await.context("run migrations")?;
    tracing::info!("migrations applied");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
}

/// A unique or foreign-key violation reported by Postgres, with the name of
/// the constraint that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub kind: ConstraintKind,
    pub constraint: String,
}

impl ConstraintViolation {
    pub fn of(err: &sqlx::Error) -> Option<Self> {
        let db_err = err.as_database_error()?;
        let kind = match db_err.kind() {
            ErrorKind::UniqueViolation => ConstraintKind::Unique,
            ErrorKind::ForeignKeyViolation => ConstraintKind::ForeignKey,
            _ => return None,
        };
        let constraint = db_err.constraint()?.to_owned();
        Some(Self { kind, constraint })
    }

    pub fn is_unique(&self, name: &str) -> bool {
        self.kind == ConstraintKind::Unique && self.constraint == name
    }

    pub fn is_foreign_key(&self, name: &str) -> bool {
        self.kind == ConstraintKind::ForeignKey && self.constraint == name
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{borrow::Cow, error::Error as StdError, fmt};

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Stand-in for a driver error so constraint mapping can be tested
    /// without a server.
    #[derive(Debug)]
    pub struct FakeDbError {
        pub code: &'static str,
        pub constraint: &'static str,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "violates constraint \"{}\"", self.constraint)
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            Some(self.constraint)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    pub fn unique(constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code: "23505", constraint }))
    }

    pub fn foreign_key(constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code: "23503", constraint }))
    }

    pub fn other(constraint: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code: "23502", constraint }))
    }
}
