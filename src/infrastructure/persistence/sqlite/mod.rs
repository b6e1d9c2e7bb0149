pub mod character_repository;
pub mod genre_repository;
pub mod movie_repository;
pub mod refresh_token_repository;
pub mod unit_of_work;
pub mod user_repository;

pub use character_repository::CharacterRepository;
pub use genre_repository::GenreRepository;
pub use movie_repository::MovieRepository;
pub use refresh_token_repository::SqliteRefreshTokenRepository;
pub use unit_of_work::UnitOfWork;
pub use user_repository::SqliteUserRepository;
