use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::adapters::http::dtos::MovieRequest;
use crate::adapters::http::envelope::ResponseEnvelope;
use crate::adapters::http::errors::ApiError;
use crate::domain::catalog::entities::{Genre, Movie};
use crate::domain::catalog::ports::Repository;
use crate::infrastructure::persistence::sqlite::UnitOfWork;

fn requested_title(request: &MovieRequest) -> &str {
  request.title.as_deref().unwrap_or("").trim()
}

/// Handler for listing all movies
///
/// GET /api/movies
pub async fn get_all(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
  let mut uow = UnitOfWork::begin(&pool).await?;
  let movies = uow.movies().find_all().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success(200, movies)))
}

/// Handler for creating a movie
///
/// POST /api/movies
/// Response: 400 when the title is empty, 404 when the referenced genre
/// does not exist, 201 with the created entity otherwise.
pub async fn create(
  pool: web::Data<SqlitePool>,
  request: web::Json<MovieRequest>,
) -> Result<HttpResponse, ApiError> {
  let title = requested_title(&request);
  if title.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Movie>::failure(
        400,
        "You should provide a title for the movie",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;

  let genre_id = request.genre_id;
  let genre = uow
    .genres()
    .find_where(move |g: &Genre| g.id == genre_id)
    .await?;
  if genre.is_none() {
    return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Movie>::failure(
      404,
      format!("There is no genre with id {}", genre_id),
    )));
  }

  let movie = Movie::new(
    title.to_string(),
    request.year,
    request.rate,
    request.storyline.clone(),
    genre_id,
  );
  let created = uow.movies().add(movie).await?;
  uow.complete().await?;

  Ok(
    HttpResponse::Created().json(ResponseEnvelope::success_with_message(
      201,
      "Movie created successfully",
      created,
    )),
  )
}

/// Handler for updating a movie
///
/// PUT /api/movies/{id}
pub async fn update(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
  request: web::Json<MovieRequest>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let title = requested_title(&request);
  if title.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Movie>::failure(
        400,
        "You should provide a movie title for the update",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;
  let movie = uow.movies().find_where(move |m: &Movie| m.id == id).await?;

  let mut movie = match movie {
    Some(movie) => movie,
    None => {
      return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Movie>::failure(
        404,
        format!("There is no movie with id {}", id),
      )));
    }
  };

  let genre_id = request.genre_id;
  let genre = uow
    .genres()
    .find_where(move |g: &Genre| g.id == genre_id)
    .await?;
  if genre.is_none() {
    return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Movie>::failure(
      404,
      format!("There is no genre with id {}", genre_id),
    )));
  }

  movie.title = title.to_string();
  movie.year = request.year;
  movie.rate = request.rate;
  movie.storyline = request.storyline.clone();
  movie.genre_id = genre_id;

  uow.movies().update(&movie).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    format!("Movie with id {} updated successfully", id),
    movie,
  )))
}

/// Handler for deleting a movie
///
/// DELETE /api/movies/{id}
/// Response: 404 when the id is unknown; 200 with an envelope carrying the
/// deleted entity.
pub async fn delete(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let mut uow = UnitOfWork::begin(&pool).await?;
  let movie = uow.movies().find_where(move |m: &Movie| m.id == id).await?;

  let movie = match movie {
    Some(movie) => movie,
    None => {
      return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Movie>::failure(
        404,
        format!("Cannot find movie with id {}", id),
      )));
    }
  };

  uow.movies().delete_by_id(id).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    "Movie deleted successfully",
    movie,
  )))
}
