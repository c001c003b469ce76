//! UI Components
//!
//! Presentational Leptos components for the phonebook page.

mod confirm_dialog;
mod filter_input;
mod notification_area;
mod person_form;
mod person_list;
mod person_row;

pub use confirm_dialog::ConfirmDialog;
pub use filter_input::FilterInput;
pub use notification_area::NotificationArea;
pub use person_form::PersonForm;
pub use person_list::PersonList;
pub use person_row::PersonRow;
