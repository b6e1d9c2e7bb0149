use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::domain::auth::errors::RepositoryError;

use super::character_repository::CharacterRepository;
use super::genre_repository::GenreRepository;
use super::movie_repository::MovieRepository;

/// Aggregation of catalog repositories sharing one commit boundary.
///
/// `begin` opens a single database transaction; every repository handle
/// obtained from this unit of work runs on that transaction. `complete`
/// commits once and reports how many rows were written since `begin`.
/// Dropping the unit of work without calling `complete` rolls everything
/// back.
pub struct UnitOfWork {
  pub(super) tx: Transaction<'static, Sqlite>,
  pub(super) rows_affected: u64,
}

impl UnitOfWork {
  /// Opens a transaction on the pool
  pub async fn begin(pool: &SqlitePool) -> Result<Self, RepositoryError> {
    let tx = pool.begin().await?;
    Ok(Self {
      tx,
      rows_affected: 0,
    })
  }

  /// Repository handle for the Genre aggregate
  pub fn genres(&mut self) -> GenreRepository<'_> {
    GenreRepository::new(self)
  }

  /// Repository handle for the Movie aggregate
  pub fn movies(&mut self) -> MovieRepository<'_> {
    MovieRepository::new(self)
  }

  /// Repository handle for the Character aggregate
  pub fn characters(&mut self) -> CharacterRepository<'_> {
    CharacterRepository::new(self)
  }

  /// Commits all pending changes, returning the affected row count
  pub async fn complete(self) -> Result<u64, RepositoryError> {
    self.tx.commit().await?;
    Ok(self.rows_affected)
  }
}
