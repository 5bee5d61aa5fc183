pub mod model;
mod view;
mod view_model;

pub use view::ContractDetails;
pub use view_model::ContractDetailsViewModel;
