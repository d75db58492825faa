//! Team Settings Form
//!
//! MVVM split:
//! - model.rs: `TeamGateway` seam and its HTTP implementation
//! - state.rs: `TeamEditor`, the form state machine (no reactive runtime)
//! - view_model.rs: signals, commands and side effects
//! - view.rs: Leptos component (pure UI)

#[cfg(test)]
mod fake;
mod model;
mod state;
mod view;
mod view_model;

pub use model::{HttpTeamGateway, TeamGateway};
pub use state::{
    FieldErrors, PendingSubmit, SubmitError, SubmitOutcome, TeamEditor, TeamFormLayout,
    TeamFormOptions, TeamFormValues,
};
pub use view::TeamEditForm;
pub use view_model::TeamEditViewModel;
