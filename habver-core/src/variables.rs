//! Standard variable definitions for habitability classification.
//!
//! Input fields are keyed by the CMIP-style short names used throughout the
//! climate modelling ecosystem (`tas`, `pr`, ...). Classifiers look their
//! inputs up by these names, so the constants here are the single source of
//! truth for what a classifier expects to receive.

/// Metadata for a named input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Short name used to key input fields
    pub name: &'static str,
    /// Canonical unit for the variable
    pub unit: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

impl VariableDefinition {
    pub const fn new(name: &'static str, unit: &'static str, description: &'static str) -> Self {
        Self {
            name,
            unit,
            description,
        }
    }
}

/// Near-surface air temperature
pub const VAR_SURFACE_TEMPERATURE: VariableDefinition =
    VariableDefinition::new("tas", "K", "Near-surface air temperature");

/// Precipitation mass flux
pub const VAR_PRECIPITATION: VariableDefinition =
    VariableDefinition::new("pr", "kg m^-2 s^-1", "Precipitation flux");

/// Evapotranspiration mass flux
pub const VAR_EVAPOTRANSPIRATION: VariableDefinition = VariableDefinition::new(
    "evspsbl",
    "kg m^-2 s^-1",
    "Evaporation including sublimation and transpiration",
);

/// Sea-ice area fraction
pub const VAR_SEA_ICE_CONCENTRATION: VariableDefinition =
    VariableDefinition::new("siconc", "1", "Sea-ice area fraction");

/// Aridity index (ratio-based dryness indicator)
pub const VAR_ARIDITY_INDEX: VariableDefinition =
    VariableDefinition::new("ai", "1", "Aridity index");

/// Normalised difference vegetation index
pub const VAR_VEGETATION_INDEX: VariableDefinition =
    VariableDefinition::new("ndvi", "1", "Normalised difference vegetation index");

/// Sea-surface chlorophyll-a concentration
pub const VAR_CHLOROPHYLL: VariableDefinition =
    VariableDefinition::new("chla", "mg m^-3", "Sea-surface chlorophyll-a concentration");

/// Every standard variable, for lookup and introspection.
pub const ALL_VARIABLES: [VariableDefinition; 7] = [
    VAR_SURFACE_TEMPERATURE,
    VAR_PRECIPITATION,
    VAR_EVAPOTRANSPIRATION,
    VAR_SEA_ICE_CONCENTRATION,
    VAR_ARIDITY_INDEX,
    VAR_VEGETATION_INDEX,
    VAR_CHLOROPHYLL,
];

/// Look up a standard variable by its short name.
pub fn lookup(name: &str) -> Option<&'static VariableDefinition> {
    ALL_VARIABLES.iter().find(|v| v.name == name)
}
