//! Asset Details UI Module
//!
//! MVVM:
//! - model.rs: API-клиент коллекции `asset`
//! - view_model.rs: состояние формы и команды
//! - view.rs: Leptos-компонент

pub mod model;
mod view;
mod view_model;

pub use view::AssetDetails;
pub use view_model::AssetDetailsViewModel;
