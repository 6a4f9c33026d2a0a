//! SQLite storage implementation for statuses.

mod model;
mod repository;

pub use model::StatusDB;
pub(crate) use repository::ensure_known_status;
pub use repository::StatusRepository;
