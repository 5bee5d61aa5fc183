pub mod model;
mod view;
mod view_model;

pub use view::PartnerDetails;
pub use view_model::PartnerDetailsViewModel;
