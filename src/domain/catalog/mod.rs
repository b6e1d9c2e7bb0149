pub mod entities;
pub mod ports;

pub use entities::{Character, Genre, Movie};
pub use ports::Repository;
