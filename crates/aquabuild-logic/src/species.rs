//! Livestock and plant catalog entities.
//!
//! All entities here are immutable value objects produced by catalog loading.
//! The engine only ever reads them; it never mutates or owns catalog state.
//!
//! Fish and invertebrates share almost every field, so both are modeled as a
//! single [`Inhabitant`] with an [`InhabitantKind`] variant carrying the few
//! kind-specific flags. Schooling and pairwise aggression logic can then
//! operate over one uniform list without casts.

use serde::{Deserialize, Serialize};

use crate::range::Range;

/// Tolerated water chemistry for a living inhabitant.
///
/// Closed ranges in °F, pH units, and degrees of general hardness (dGH).
/// Catalog data is expected to satisfy `min <= max` on every axis; the
/// engine does not validate this and a violated invariant yields a
/// nonsensical (but non-panicking) empty overlap downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterParams {
    pub temp_min: f32,
    pub temp_max: f32,
    pub ph_min: f32,
    pub ph_max: f32,
    pub hardness_min: f32,
    pub hardness_max: f32,
}

impl WaterParams {
    pub fn temp(&self) -> Range {
        Range::new(self.temp_min, self.temp_max)
    }

    pub fn ph(&self) -> Range {
        Range::new(self.ph_min, self.ph_max)
    }

    pub fn hardness(&self) -> Range {
        Range::new(self.hardness_min, self.hardness_max)
    }
}

/// Plant tolerance — plants carry no hardness requirement in this model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantTolerance {
    pub temp_min: f32,
    pub temp_max: f32,
    pub ph_min: f32,
    pub ph_max: f32,
}

impl PlantTolerance {
    pub fn temp(&self) -> Range {
        Range::new(self.temp_min, self.temp_max)
    }

    pub fn ph(&self) -> Range {
        Range::new(self.ph_min, self.ph_max)
    }
}

/// Preferred vertical zone of the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwimmingLevel {
    Top,
    Middle,
    Bottom,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperament {
    Peaceful,
    SemiAggressive,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareLevel {
    Beginner,
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

/// Waste-output tier for invertebrates, which produce far less waste per
/// inch of body length than fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BioloadTier {
    Minimal,
    Low,
    Medium,
}

/// A reference to other livestock in a relationship set.
///
/// Catalog relationships name either a concrete species id ("fish-2") or a
/// whole taxonomic category ("Cichlid"). The two are distinct variants so
/// matching is unambiguous at the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesRef {
    Id(String),
    Category(String),
}

/// Kind-specific fields of a living inhabitant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InhabitantKind {
    Fish {
        /// Known to nip at the fins of slower tankmates.
        nips_at_fins: bool,
        /// Carries long, flowing fins that attract nipping.
        long_finned: bool,
        /// Stressed or aggressive around long-finned tankmates.
        incompatible_with_long_finned: bool,
    },
    Invertebrate {
        bioload: BioloadTier,
        /// Copper-based medications are lethal to this species.
        copper_sensitive: bool,
        /// Will not eat or uproot live plants.
        plant_safe: bool,
    },
}

/// A fish or invertebrate species as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inhabitant {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    /// Taxonomic/trade category, e.g. "Tetra" or "Cichlid". Relationship
    /// sets may match against this.
    pub category: String,
    pub adult_size_inches: f32,
    pub min_tank_gallons: f32,
    pub swimming_level: SwimmingLevel,
    pub water: WaterParams,
    pub temperament: Temperament,
    /// Minimum healthy group size; 1 means solitary.
    pub schooling_size: u32,
    /// Defended-space requirement in inches; 0 for non-territorial species.
    pub territorial_radius: f32,
    pub incompatible_with: Vec<SpeciesRef>,
    pub predator_of: Vec<SpeciesRef>,
    pub prey_to: Vec<SpeciesRef>,
    pub care_level: CareLevel,
    pub diet: Diet,
    pub price: f32,
    pub kind: InhabitantKind,
}

impl Inhabitant {
    pub fn is_fish(&self) -> bool {
        matches!(self.kind, InhabitantKind::Fish { .. })
    }

    pub fn nips_at_fins(&self) -> bool {
        matches!(self.kind, InhabitantKind::Fish { nips_at_fins: true, .. })
    }

    pub fn is_long_finned(&self) -> bool {
        matches!(self.kind, InhabitantKind::Fish { long_finned: true, .. })
    }

    /// Waste tier for invertebrates; `None` for fish, whose bioload is
    /// derived from adult size instead.
    pub fn bioload_tier(&self) -> Option<BioloadTier> {
        match self.kind {
            InhabitantKind::Invertebrate { bioload, .. } => Some(bioload),
            InhabitantKind::Fish { .. } => None,
        }
    }

    /// Whether this species is named by `reference`, either directly by id
    /// or through its taxonomic category.
    pub fn is_referenced_by(&self, reference: &SpeciesRef) -> bool {
        match reference {
            SpeciesRef::Id(id) => *id == self.id,
            SpeciesRef::Category(category) => *category == self.category,
        }
    }
}

/// How much light a plant needs to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightRequirement {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    Slow,
    Medium,
    Fast,
}

/// Where in the aquascape a plant is typically placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantPlacement {
    Foreground,
    Midground,
    Background,
    Floating,
}

/// Substrate a plant will root in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantSubstrate {
    Any,
    NutrientRich,
    Sand,
    Gravel,
    WoodOrRock,
}

/// An aquatic plant species. Plants contribute to the water-parameter
/// envelope but not to stocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub common_name: String,
    pub scientific_name: String,
    pub category: String,
    pub light_requirement: LightRequirement,
    pub co2_required: bool,
    pub co2_recommended: bool,
    pub substrate: PlantSubstrate,
    pub tolerance: PlantTolerance,
    pub growth_rate: GrowthRate,
    pub max_height_inches: f32,
    pub placement: PlantPlacement,
    pub price: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetra() -> Inhabitant {
        Inhabitant {
            id: "fish-1".to_string(),
            common_name: "Neon Tetra".to_string(),
            scientific_name: "Paracheirodon innesi".to_string(),
            category: "Tetra".to_string(),
            adult_size_inches: 1.5,
            min_tank_gallons: 10.0,
            swimming_level: SwimmingLevel::Middle,
            water: WaterParams {
                temp_min: 70.0,
                temp_max: 81.0,
                ph_min: 6.0,
                ph_max: 7.5,
                hardness_min: 2.0,
                hardness_max: 10.0,
            },
            temperament: Temperament::Peaceful,
            schooling_size: 6,
            territorial_radius: 0.0,
            incompatible_with: vec![],
            predator_of: vec![],
            prey_to: vec![SpeciesRef::Id("fish-3".to_string())],
            care_level: CareLevel::Beginner,
            diet: Diet::Omnivore,
            price: 3.99,
            kind: InhabitantKind::Fish {
                nips_at_fins: false,
                long_finned: false,
                incompatible_with_long_finned: false,
            },
        }
    }

    #[test]
    fn test_reference_matching_by_id() {
        let f = tetra();
        assert!(f.is_referenced_by(&SpeciesRef::Id("fish-1".to_string())));
        assert!(!f.is_referenced_by(&SpeciesRef::Id("fish-2".to_string())));
    }

    #[test]
    fn test_reference_matching_by_category() {
        let f = tetra();
        assert!(f.is_referenced_by(&SpeciesRef::Category("Tetra".to_string())));
        assert!(!f.is_referenced_by(&SpeciesRef::Category("Cichlid".to_string())));
        // A category string never matches an id, even when equal.
        assert!(!f.is_referenced_by(&SpeciesRef::Category("fish-1".to_string())));
    }

    #[test]
    fn test_fish_has_no_bioload_tier() {
        assert_eq!(tetra().bioload_tier(), None);
        assert!(tetra().is_fish());
    }

    #[test]
    fn test_water_params_as_ranges() {
        let w = tetra().water;
        assert_eq!(w.temp().min, 70.0);
        assert_eq!(w.ph().max, 7.5);
        assert_eq!(w.hardness().width(), 8.0);
    }
}
