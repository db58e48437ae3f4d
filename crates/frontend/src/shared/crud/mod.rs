//! Generic record manager: state machine, request flows and the Leptos view model
//!
//! - state.rs: dialog/list state machine (pure)
//! - service.rs: REST round trips over a `Transport`
//! - view_model.rs: signals, spawning, notifications

mod service;
mod state;
mod view_model;

#[cfg(test)]
mod tests;

pub use service::{CrudService, StateSlot};
pub use state::{
    outcome_notification, CrudAction, CrudState, DeleteCommand, DialogMode, DraftDialog,
    Rejection, SaveCommand, SaveTicket,
};
pub use view_model::CrudViewModel;
