use async_trait::async_trait;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::catalog::entities::Movie;
use crate::domain::catalog::ports::Repository;

use super::unit_of_work::UnitOfWork;

/// Repository for the Movie aggregate, bound to a unit-of-work transaction
pub struct MovieRepository<'a> {
  uow: &'a mut UnitOfWork,
}

impl<'a> MovieRepository<'a> {
  pub(super) fn new(uow: &'a mut UnitOfWork) -> Self {
    Self { uow }
  }
}

#[async_trait]
impl Repository<Movie> for MovieRepository<'_> {
  async fn add(&mut self, entity: Movie) -> Result<Movie, RepositoryError> {
    let created = sqlx::query_as::<_, Movie>(
      r#"
      INSERT INTO movies (title, year, rate, storyline, genre_id)
      VALUES (?, ?, ?, ?, ?)
      RETURNING id, title, year, rate, storyline, genre_id
      "#,
    )
    .bind(&entity.title)
    .bind(entity.year)
    .bind(entity.rate)
    .bind(&entity.storyline)
    .bind(entity.genre_id)
    .fetch_one(&mut *self.uow.tx)
    .await?;

    self.uow.rows_affected += 1;
    Ok(created)
  }

  async fn find_by_id(&mut self, id: i64) -> Result<Option<Movie>, RepositoryError> {
    let movie = sqlx::query_as::<_, Movie>(
      "SELECT id, title, year, rate, storyline, genre_id FROM movies WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *self.uow.tx)
    .await?;

    Ok(movie)
  }

  async fn find_all(&mut self) -> Result<Vec<Movie>, RepositoryError> {
    let movies = sqlx::query_as::<_, Movie>(
      "SELECT id, title, year, rate, storyline, genre_id FROM movies ORDER BY id",
    )
    .fetch_all(&mut *self.uow.tx)
    .await?;

    Ok(movies)
  }

  async fn update(&mut self, entity: &Movie) -> Result<u64, RepositoryError> {
    let result = sqlx::query(
      "UPDATE movies SET title = ?, year = ?, rate = ?, storyline = ?, genre_id = ? WHERE id = ?",
    )
    .bind(&entity.title)
    .bind(entity.year)
    .bind(entity.rate)
    .bind(&entity.storyline)
    .bind(entity.genre_id)
    .bind(entity.id)
    .execute(&mut *self.uow.tx)
    .await?;

    self.uow.rows_affected += result.rows_affected();
    Ok(result.rows_affected())
  }

  async fn delete_by_id(&mut self, id: i64) -> Result<Option<Movie>, RepositoryError> {
    let movie = self.find_by_id(id).await?;

    if movie.is_some() {
      let result = sqlx::query("DELETE FROM movies WHERE id = ?")
        .bind(id)
        .execute(&mut *self.uow.tx)
        .await?;
      self.uow.rows_affected += result.rows_affected();
    }

    Ok(movie)
  }
}
