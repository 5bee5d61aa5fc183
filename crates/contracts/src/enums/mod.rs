pub mod order_status;
pub mod order_type;
pub mod priority;

pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use priority::Priority;
