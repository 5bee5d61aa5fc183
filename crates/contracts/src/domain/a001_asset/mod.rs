pub mod aggregate;

pub use aggregate::{Asset, AssetDto, AssetId, AssetStatus, Criticality};
