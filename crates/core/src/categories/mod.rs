//! Budget categories and their monthly planned amounts.

mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_model::{
    Category, CategoryDraft, CategoryOverview, CategoryUpdate, CreatedCategory, NewCategory,
};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
