use async_trait::async_trait;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::catalog::entities::Genre;
use crate::domain::catalog::ports::Repository;

use super::unit_of_work::UnitOfWork;

/// Repository for the Genre aggregate, bound to a unit-of-work transaction
pub struct GenreRepository<'a> {
  uow: &'a mut UnitOfWork,
}

impl<'a> GenreRepository<'a> {
  pub(super) fn new(uow: &'a mut UnitOfWork) -> Self {
    Self { uow }
  }
}

#[async_trait]
impl Repository<Genre> for GenreRepository<'_> {
  async fn add(&mut self, entity: Genre) -> Result<Genre, RepositoryError> {
    let created = sqlx::query_as::<_, Genre>(
      "INSERT INTO genres (name) VALUES (?) RETURNING id, name",
    )
    .bind(&entity.name)
    .fetch_one(&mut *self.uow.tx)
    .await?;

    self.uow.rows_affected += 1;
    Ok(created)
  }

  async fn find_by_id(&mut self, id: i64) -> Result<Option<Genre>, RepositoryError> {
    let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?")
      .bind(id)
      .fetch_optional(&mut *self.uow.tx)
      .await?;

    Ok(genre)
  }

  async fn find_all(&mut self) -> Result<Vec<Genre>, RepositoryError> {
    let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
      .fetch_all(&mut *self.uow.tx)
      .await?;

    Ok(genres)
  }

  async fn update(&mut self, entity: &Genre) -> Result<u64, RepositoryError> {
    let result = sqlx::query("UPDATE genres SET name = ? WHERE id = ?")
      .bind(&entity.name)
      .bind(entity.id)
      .execute(&mut *self.uow.tx)
      .await?;

    self.uow.rows_affected += result.rows_affected();
    Ok(result.rows_affected())
  }

  async fn delete_by_id(&mut self, id: i64) -> Result<Option<Genre>, RepositoryError> {
    let genre = self.find_by_id(id).await?;

    if genre.is_some() {
      let result = sqlx::query("DELETE FROM genres WHERE id = ?")
        .bind(id)
        .execute(&mut *self.uow.tx)
        .await?;
      self.uow.rows_affected += result.rows_affected();
    }

    Ok(genre)
  }
}
