use serde::{Deserialize, Serialize};

/// Movie genre aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Genre {
  /// Database identifier (0 before the row is persisted)
  pub id: i64,
  pub name: String,
}

impl Genre {
  pub fn new(name: String) -> Self {
    Self { id: 0, name }
  }
}

/// Movie aggregate root, linked to a genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
  pub id: i64,
  pub title: String,
  pub year: i64,
  pub rate: f64,
  pub storyline: String,
  pub genre_id: i64,
}

impl Movie {
  pub fn new(title: String, year: i64, rate: f64, storyline: String, genre_id: i64) -> Self {
    Self {
      id: 0,
      title,
      year,
      rate,
      storyline,
      genre_id,
    }
  }
}

/// Movie character, linked to a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Character {
  pub id: i64,
  pub name: String,
  pub movie_id: i64,
}

impl Character {
  pub fn new(name: String, movie_id: i64) -> Self {
    Self { id: 0, name, movie_id }
  }
}
