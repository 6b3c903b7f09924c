//! Categories for classifying transactions and budgets.

mod core;
mod create;
mod delete;
mod edit;

pub use core::{
    Category, CategoryForm, CategoryId, CategoryName, create_category, create_category_table,
    delete_category, get_all_categories, get_category, update_category,
};
pub(crate) use core::ensure_category_exists;
pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub(crate) use edit::category_form_view;
pub use edit::{get_edit_category_page, update_category_endpoint};
