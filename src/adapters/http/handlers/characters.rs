use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::adapters::http::dtos::CharacterRequest;
use crate::adapters::http::envelope::ResponseEnvelope;
use crate::adapters::http::errors::ApiError;
use crate::domain::catalog::entities::{Character, Movie};
use crate::domain::catalog::ports::Repository;
use crate::infrastructure::persistence::sqlite::UnitOfWork;

fn requested_name(request: &CharacterRequest) -> &str {
  request.name.as_deref().unwrap_or("").trim()
}

/// Handler for listing all characters
///
/// GET /api/characters
pub async fn get_all(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
  let mut uow = UnitOfWork::begin(&pool).await?;
  let characters = uow.characters().find_all().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success(200, characters)))
}

/// Handler for creating a character
///
/// POST /api/characters
/// Response: 400 when the name is empty, 404 when the referenced movie does
/// not exist, 201 with the created entity otherwise.
pub async fn create(
  pool: web::Data<SqlitePool>,
  request: web::Json<CharacterRequest>,
) -> Result<HttpResponse, ApiError> {
  let name = requested_name(&request);
  if name.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Character>::failure(
        400,
        "You should provide a name for the character",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;

  let movie_id = request.movie_id;
  let movie = uow
    .movies()
    .find_where(move |m: &Movie| m.id == movie_id)
    .await?;
  if movie.is_none() {
    return Ok(
      HttpResponse::NotFound().json(ResponseEnvelope::<Character>::failure(
        404,
        format!("There is no movie with id {}", movie_id),
      )),
    );
  }

  let created = uow
    .characters()
    .add(Character::new(name.to_string(), movie_id))
    .await?;
  uow.complete().await?;

  Ok(
    HttpResponse::Created().json(ResponseEnvelope::success_with_message(
      201,
      "Character created successfully",
      created,
    )),
  )
}

/// Handler for updating a character
///
/// PUT /api/characters/{id}
pub async fn update(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
  request: web::Json<CharacterRequest>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let name = requested_name(&request);
  if name.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Character>::failure(
        400,
        "You should provide a character name for the update",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;
  let character = uow
    .characters()
    .find_where(move |c: &Character| c.id == id)
    .await?;

  let mut character = match character {
    Some(character) => character,
    None => {
      return Ok(
        HttpResponse::NotFound().json(ResponseEnvelope::<Character>::failure(
          404,
          format!("There is no character with id {}", id),
        )),
      );
    }
  };

  let movie_id = request.movie_id;
  let movie = uow
    .movies()
    .find_where(move |m: &Movie| m.id == movie_id)
    .await?;
  if movie.is_none() {
    return Ok(
      HttpResponse::NotFound().json(ResponseEnvelope::<Character>::failure(
        404,
        format!("There is no movie with id {}", movie_id),
      )),
    );
  }

  character.name = name.to_string();
  character.movie_id = movie_id;

  uow.characters().update(&character).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    format!("Character with id {} updated successfully", id),
    character,
  )))
}

/// Handler for deleting a character
///
/// DELETE /api/characters/{id}
/// Response: 404 when the id is unknown; 200 with an envelope carrying the
/// deleted entity.
pub async fn delete(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let mut uow = UnitOfWork::begin(&pool).await?;
  let character = uow
    .characters()
    .find_where(move |c: &Character| c.id == id)
    .await?;

  let character = match character {
    Some(character) => character,
    None => {
      return Ok(
        HttpResponse::NotFound().json(ResponseEnvelope::<Character>::failure(
          404,
          format!("Cannot find character with id {}", id),
        )),
      );
    }
  };

  uow.characters().delete_by_id(id).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    "Character deleted successfully",
    character,
  )))
}
