use async_trait::async_trait;

use crate::domain::auth::errors::RepositoryError;

/// Generic repository contract shared by every catalog aggregate.
///
/// All operations are thin pass-throughs to the underlying store; no caching
/// or custom indexing is layered on top. Store failures propagate as
/// `RepositoryError` and are translated at the HTTP boundary.
#[async_trait]
pub trait Repository<T: Send>: Send {
  /// Inserts the entity and returns it with its generated identifier
  async fn add(&mut self, entity: T) -> Result<T, RepositoryError>;

  /// Looks up an entity by identifier
  async fn find_by_id(&mut self, id: i64) -> Result<Option<T>, RepositoryError>;

  /// Returns all entities
  async fn find_all(&mut self) -> Result<Vec<T>, RepositoryError>;

  /// Writes the entity's current state, returning the affected row count
  async fn update(&mut self, entity: &T) -> Result<u64, RepositoryError>;

  /// Deletes an entity by identifier, returning the deleted entity if it existed
  async fn delete_by_id(&mut self, id: i64) -> Result<Option<T>, RepositoryError>;

  /// Finds the first entity matching the predicate.
  ///
  /// Loads all rows and applies the predicate in memory; callers use this
  /// for identifier equality on small tables.
  async fn find_where<P>(&mut self, predicate: P) -> Result<Option<T>, RepositoryError>
  where
    P: Fn(&T) -> bool + Send + 'static,
  {
    let all = self.find_all().await?;
    Ok(all.into_iter().find(|entity| predicate(entity)))
  }
}
