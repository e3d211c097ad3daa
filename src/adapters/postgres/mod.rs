//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresQuestionRepository` - Questions and their initial choices
//! - `PostgresChoiceRepository` - Question-scoped choice access
//! - `PostgresVoteRepository` - Votes, backed by a unique (user, question) constraint
//! - `PostgresPollReader` - Published-only queries and tallies
//!
//! Schema lives in `migrations/` and is applied by [`run_migrations`].

mod choice_repository;
mod poll_reader;
mod question_repository;
mod rows;
mod vote_repository;

pub use choice_repository::PostgresChoiceRepository;
pub use poll_reader::PostgresPollReader;
pub use question_repository::PostgresQuestionRepository;
pub use vote_repository::PostgresVoteRepository;

use sqlx::PgPool;

/// Applies pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
