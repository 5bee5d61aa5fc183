pub mod aggregate;

pub use aggregate::{Partner, PartnerDto, PartnerId, PartnerKind};
