pub mod model;
pub mod traits;

pub use model::allocation::Allocation;
pub use model::asset::{Asset, ParseAssetError};
pub use model::snapshot::{Phase, SimulationSnapshot};
pub use model::values::AssetValues;
pub use traits::random_source::RandomSource;
