pub mod auth;
pub mod characters;
pub mod genres;
pub mod movies;
