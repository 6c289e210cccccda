//! The classification rule components.

pub mod aridity;
pub mod ice_free;
pub mod liquid_water;
pub mod multicellular;
pub mod observed;
pub mod temperature_water;

pub use aridity::{AridityClassifier, AridityScheme};
pub use ice_free::IceFreeClassifier;
pub use liquid_water::{LiquidWaterClassifier, LiquidWaterPrecipClassifier};
pub use multicellular::MulticellularClassifier;
pub use observed::ObservedClassifier;
pub use temperature_water::TemperatureWaterClassifier;
