//! UI Components
//!
//! Leptos components of the item widget.

mod count_badge;
mod error_panel;
mod item_row;
mod item_list;
mod new_item_form;
mod category_autocomplete;

pub use count_badge::CountBadge;
pub use error_panel::ErrorPanel;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use category_autocomplete::CategoryAutocomplete;
