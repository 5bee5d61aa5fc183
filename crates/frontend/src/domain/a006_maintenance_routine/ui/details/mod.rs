//! Maintenance Routine Details (MVVM)

pub mod model;
mod view;
mod view_model;

pub use view::RoutineDetails;
pub use view_model::RoutineDetailsViewModel;
