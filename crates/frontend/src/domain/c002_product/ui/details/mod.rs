//! Product dialog
//!
//! - model.rs: category lookup (fetch, options, labels)
//! - view.rs: Leptos component

pub mod model;
mod view;

pub use model::CategoryLookup;
pub use view::ProductDialog;
