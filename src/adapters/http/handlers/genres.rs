use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::adapters::http::dtos::GenreRequest;
use crate::adapters::http::envelope::ResponseEnvelope;
use crate::adapters::http::errors::ApiError;
use crate::domain::catalog::entities::Genre;
use crate::domain::catalog::ports::Repository;
use crate::infrastructure::persistence::sqlite::UnitOfWork;

fn requested_name(request: &GenreRequest) -> &str {
  request.name.as_deref().unwrap_or("").trim()
}

/// Handler for listing all genres
///
/// GET /api/genres
/// Response: 200 with a list envelope; any store failure becomes an opaque
/// 400 with no body (see `ApiError::Repository`).
pub async fn get_all(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
  let mut uow = UnitOfWork::begin(&pool).await?;
  let genres = uow.genres().find_all().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success(200, genres)))
}

/// Handler for creating a genre
///
/// POST /api/genres
/// Response: 400 failure envelope when the name is empty, 201 with the
/// created entity otherwise.
pub async fn create(
  pool: web::Data<SqlitePool>,
  request: web::Json<GenreRequest>,
) -> Result<HttpResponse, ApiError> {
  let name = requested_name(&request);
  if name.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Genre>::failure(
        400,
        "You should provide a name for the genre",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;
  let created = uow.genres().add(Genre::new(name.to_string())).await?;
  uow.complete().await?;

  Ok(
    HttpResponse::Created().json(ResponseEnvelope::success_with_message(
      201,
      "Genre created successfully",
      created,
    )),
  )
}

/// Handler for updating a genre
///
/// PUT /api/genres/{id}
/// Response: 400 when the name is empty, 404 when the id is unknown, 200
/// with the updated entity otherwise.
pub async fn update(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
  request: web::Json<GenreRequest>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let name = requested_name(&request);
  if name.is_empty() {
    return Ok(
      HttpResponse::BadRequest().json(ResponseEnvelope::<Genre>::failure(
        400,
        "You should provide a genre name for the update",
      )),
    );
  }

  let mut uow = UnitOfWork::begin(&pool).await?;
  let genre = uow.genres().find_where(move |g: &Genre| g.id == id).await?;

  let mut genre = match genre {
    Some(genre) => genre,
    None => {
      return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Genre>::failure(
        404,
        format!("There is no genre with id {}", id),
      )));
    }
  };

  genre.name = name.to_string();
  uow.genres().update(&genre).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    format!("Genre with id {} updated successfully", id),
    genre,
  )))
}

/// Handler for deleting a genre
///
/// DELETE /api/genres/{id}
/// Response: 404 when the id is unknown; 200 with an envelope carrying the
/// deleted entity (deliberate contract, not 204).
pub async fn delete(
  pool: web::Data<SqlitePool>,
  path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
  let id = path.into_inner();

  let mut uow = UnitOfWork::begin(&pool).await?;
  let genre = uow.genres().find_where(move |g: &Genre| g.id == id).await?;

  let genre = match genre {
    Some(genre) => genre,
    None => {
      return Ok(HttpResponse::NotFound().json(ResponseEnvelope::<Genre>::failure(
        404,
        format!("Cannot find genre with id {}", id),
      )));
    }
  };

  uow.genres().delete_by_id(id).await?;
  uow.complete().await?;

  Ok(HttpResponse::Ok().json(ResponseEnvelope::success_with_message(
    200,
    "Genre deleted successfully",
    genre,
  )))
}

#[cfg(test)]
mod tests {
  use crate::adapters::http::routes::configure_genre_routes;
  use actix_web::{App, test, web};
  use serde_json::{Value, json};
  use sqlx::SqlitePool;
  use sqlx::sqlite::SqlitePoolOptions;

  async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .connect("sqlite::memory:")
      .await
      .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
      .run(&pool)
      .await
      .expect("Failed to run migrations");

    pool
  }

  macro_rules! genre_app {
    ($pool:expr) => {
      test::init_service(
        App::new()
          .app_data(web::Data::new($pool.clone()))
          .service(web::scope("/api/genres").configure(configure_genre_routes)),
      )
      .await
    };
  }

  #[actix_web::test]
  async fn test_list_with_zero_genres_returns_empty_data() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::get().uri("/api/genres").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(true));
    assert_eq!(body["statusCode"], json!(200));
    assert_eq!(body["data"], json!([]));
  }

  #[actix_web::test]
  async fn test_list_when_store_fails_returns_400_with_no_data() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    pool.close().await;

    let req = test::TestRequest::get().uri("/api/genres").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
  }

  #[actix_web::test]
  async fn test_create_with_empty_name_returns_400_failure_envelope() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::post()
      .uri("/api/genres")
      .set_json(json!({ "name": "" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
    assert!(!body["message"].as_str().unwrap().is_empty());
    assert_eq!(body["data"], json!(null));
  }

  #[actix_web::test]
  async fn test_create_with_missing_name_returns_400() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::post()
      .uri("/api/genres")
      .set_json(json!({}))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
  }

  #[actix_web::test]
  async fn test_create_valid_genre_returns_201_with_entity() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::post()
      .uri("/api/genres")
      .set_json(json!({ "name": "Foo" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(true));
    assert_eq!(body["statusCode"], json!(201));
    assert_eq!(body["data"]["name"], json!("Foo"));
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
  }

  #[actix_web::test]
  async fn test_update_unknown_id_returns_404() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::put()
      .uri("/api/genres/999")
      .set_json(json!({ "name": "Renamed" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
  }

  #[actix_web::test]
  async fn test_update_with_empty_name_returns_400() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::put()
      .uri("/api/genres/1")
      .set_json(json!({ "name": " " }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
  }

  #[actix_web::test]
  async fn test_update_existing_genre_returns_updated_entity() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::post()
      .uri("/api/genres")
      .set_json(json!({ "name": "Drma" }))
      .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
      .uri(&format!("/api/genres/{}", id))
      .set_json(json!({ "name": "Drama" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], json!("Drama"));
  }

  #[actix_web::test]
  async fn test_delete_unknown_id_returns_404() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::delete()
      .uri("/api/genres/999")
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
  }

  #[actix_web::test]
  async fn test_delete_returns_200_with_deleted_entity() {
    let pool = test_pool().await;
    let app = genre_app!(pool);

    let req = test::TestRequest::post()
      .uri("/api/genres")
      .set_json(json!({ "name": "Western" }))
      .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
      .uri(&format!("/api/genres/{}", id))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], json!("Western"));

    let req = test::TestRequest::get().uri("/api/genres").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["data"], json!([]));
  }
}
