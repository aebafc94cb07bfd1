pub mod allocation;
pub mod asset;
pub mod snapshot;
pub mod values;
