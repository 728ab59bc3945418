//! The build aggregate — tank, equipment, substrate, and selected livestock.
//!
//! An [`AquariumBuild`] is the snapshot the engine evaluates. It aggregates
//! catalog entities by value (no ownership hierarchy between entities) plus
//! the *last computed* compatibility output, which consumers read back from
//! the build rather than re-deriving. The cached fields are engine output,
//! never engine input.

use serde::{Deserialize, Serialize};

use crate::issue::CompatibilityIssue;
use crate::range::Range;
use crate::species::{Inhabitant, Plant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TankShape {
    Rectangular,
    Cube,
    BowFront,
    Cylinder,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TankMaterial {
    Glass,
    Acrylic,
}

/// Outer dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

/// An aquarium tank. `volume_gallons` is the sole capacity reference for
/// stocking and equipment sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub dimensions: TankDimensions,
    pub volume_gallons: f32,
    pub volume_liters: f32,
    pub shape: TankShape,
    pub material: TankMaterial,
    pub price: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Filter,
    Heater,
    Light,
    Co2,
    AirPump,
    Other,
}

/// A piece of equipment. Capacity specs are category-specific, so every
/// spec field is optional and absent fields simply contribute nothing to
/// adequacy checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub category: EquipmentCategory,
    pub price: f32,
    /// Smallest tank the item is rated for (gallons).
    pub min_tank_gallons: Option<f32>,
    /// Largest tank the item is rated for (gallons). Filters.
    pub max_tank_gallons: Option<f32>,
    /// Flow rate in gallons per hour. Filters and pumps.
    pub flow_rate_gph: Option<f32>,
    /// Power rating. Heaters and lights.
    pub watts: Option<f32>,
    pub lumens: Option<f32>,
    pub length_inches: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstrateType {
    Sand,
    Gravel,
    Soil,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub substrate_type: SubstrateType,
    pub nutrient_rich: bool,
    pub buffers_ph: bool,
    /// pH the substrate buffers toward, when it buffers at all.
    pub buffers_to: Option<f32>,
    /// Recommended pounds per gallon of tank for a typical 2-inch bed.
    pub pounds_per_gallon: f32,
    pub bag_size_pounds: f32,
    pub price: f32,
}

/// One catalog item plus how many of it the build contains.
///
/// `quantity` is always at least 1; a quantity driven to zero means the
/// item is removed from the build, not present with a zero count. The
/// build store enforces this on mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildItem<T> {
    pub item: T,
    pub quantity: u32,
}

impl<T> BuildItem<T> {
    pub fn new(item: T, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// One equipment slot per category; `other` holds everything uncategorized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSlots {
    pub filter: Option<Equipment>,
    pub heater: Option<Equipment>,
    pub light: Option<Equipment>,
    pub co2: Option<Equipment>,
    pub air_pump: Option<Equipment>,
    pub other: Vec<Equipment>,
}

/// The water-chemistry envelope a keeper should maintain: per axis, the
/// intersection of every inhabitant's tolerance, or `None` when no common
/// value exists (or nothing is stocked).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetParams {
    pub temp: Option<Range>,
    pub ph: Option<Range>,
    pub hardness: Option<Range>,
}

/// A complete aquarium build snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquariumBuild {
    pub id: String,
    pub name: String,
    pub tank: Option<Tank>,
    pub fish: Vec<BuildItem<Inhabitant>>,
    pub inverts: Vec<BuildItem<Inhabitant>>,
    pub plants: Vec<BuildItem<Plant>>,
    pub equipment: EquipmentSlots,
    pub substrate: Option<Substrate>,
    pub substrate_bags: u32,

    // Cached engine output, refreshed by the build store after every
    // mutation. Never read by the engine itself.
    pub total_cost: f32,
    pub stocking_level: u32,
    pub warnings: Vec<CompatibilityIssue>,
    pub target_params: TargetParams,
}

impl AquariumBuild {
    /// An empty, unnamed build with nothing selected.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tank: None,
            fish: Vec::new(),
            inverts: Vec::new(),
            plants: Vec::new(),
            equipment: EquipmentSlots::default(),
            substrate: None,
            substrate_bags: 0,
            total_cost: 0.0,
            stocking_level: 0,
            warnings: Vec::new(),
            target_params: TargetParams::default(),
        }
    }

    /// Fish and invertebrate items pooled into one list of social actors.
    pub fn livestock(&self) -> Vec<&BuildItem<Inhabitant>> {
        self.fish.iter().chain(self.inverts.iter()).collect()
    }

    pub fn has_livestock(&self) -> bool {
        !self.fish.is_empty() || !self.inverts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_build_is_empty() {
        let b = AquariumBuild::new("b1", "My Aquarium");
        assert!(b.tank.is_none());
        assert!(!b.has_livestock());
        assert!(b.livestock().is_empty());
        assert_eq!(b.stocking_level, 0);
        assert_eq!(b.target_params, TargetParams::default());
    }
}
