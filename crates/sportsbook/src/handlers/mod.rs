pub mod error;
pub mod events;
pub mod health;
pub mod races;

pub use error::AppError;
