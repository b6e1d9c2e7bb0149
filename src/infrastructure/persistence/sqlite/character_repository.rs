use async_trait::async_trait;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::catalog::entities::Character;
use crate::domain::catalog::ports::Repository;

use super::unit_of_work::UnitOfWork;

/// Repository for the Character aggregate, bound to a unit-of-work transaction
pub struct CharacterRepository<'a> {
  uow: &'a mut UnitOfWork,
}

impl<'a> CharacterRepository<'a> {
  pub(super) fn new(uow: &'a mut UnitOfWork) -> Self {
    Self { uow }
  }
}

#[async_trait]
impl Repository<Character> for CharacterRepository<'_> {
  async fn add(&mut self, entity: Character) -> Result<Character, RepositoryError> {
    let created = sqlx::query_as::<_, Character>(
      "INSERT INTO characters (name, movie_id) VALUES (?, ?) RETURNING id, name, movie_id",
    )
    .bind(&entity.name)
    .bind(entity.movie_id)
    .fetch_one(&mut *self.uow.tx)
    .await?;

    self.uow.rows_affected += 1;
    Ok(created)
  }

  async fn find_by_id(&mut self, id: i64) -> Result<Option<Character>, RepositoryError> {
    let character =
      sqlx::query_as::<_, Character>("SELECT id, name, movie_id FROM characters WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *self.uow.tx)
        .await?;

    Ok(character)
  }

  async fn find_all(&mut self) -> Result<Vec<Character>, RepositoryError> {
    let characters =
      sqlx::query_as::<_, Character>("SELECT id, name, movie_id FROM characters ORDER BY id")
        .fetch_all(&mut *self.uow.tx)
        .await?;

    Ok(characters)
  }

  async fn update(&mut self, entity: &Character) -> Result<u64, RepositoryError> {
    let result = sqlx::query("UPDATE characters SET name = ?, movie_id = ? WHERE id = ?")
      .bind(&entity.name)
      .bind(entity.movie_id)
      .bind(entity.id)
      .execute(&mut *self.uow.tx)
      .await?;

    self.uow.rows_affected += result.rows_affected();
    Ok(result.rows_affected())
  }

  async fn delete_by_id(&mut self, id: i64) -> Result<Option<Character>, RepositoryError> {
    let character = self.find_by_id(id).await?;

    if character.is_some() {
      let result = sqlx::query("DELETE FROM characters WHERE id = ?")
        .bind(id)
        .execute(&mut *self.uow.tx)
        .await?;
      self.uow.rows_affected += result.rows_affected();
    }

    Ok(character)
  }
}
