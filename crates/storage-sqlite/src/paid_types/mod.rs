//! SQLite storage implementation for paid types.

mod model;
mod repository;

pub use model::PaidTypeDB;
pub use repository::PaidTypeRepository;
