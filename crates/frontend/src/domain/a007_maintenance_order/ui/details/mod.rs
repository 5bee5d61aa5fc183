//! Maintenance Order Details
//!
//! Открывается вкладкой, а не модальным окном: заказ редактируется долго,
//! параллельно с канбаном и календарём.
//! - model.rs: API-клиент заказов (CRUD, статус, материалы, печать)
//! - view_model.rs: состояние формы, списков выбора и строки добавления материала
//! - view.rs: компонент вкладки

pub mod model;
mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
