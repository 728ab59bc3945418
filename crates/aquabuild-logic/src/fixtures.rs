//! Shared test fixtures — minimal catalog entries that individual tests
//! specialize through struct-update syntax.

use crate::build::{
    Equipment, EquipmentCategory, Tank, TankDimensions, TankMaterial, TankShape,
};
use crate::species::{
    BioloadTier, CareLevel, Diet, GrowthRate, Inhabitant, InhabitantKind, LightRequirement,
    Plant, PlantPlacement, PlantSubstrate, PlantTolerance, SwimmingLevel, Temperament,
    WaterParams,
};

/// A small, peaceful, hardy community fish with wide tolerances.
pub fn fish(id: &str, name: &str) -> Inhabitant {
    Inhabitant {
        id: id.to_string(),
        common_name: name.to_string(),
        scientific_name: String::new(),
        category: "Community".to_string(),
        adult_size_inches: 2.0,
        min_tank_gallons: 5.0,
        swimming_level: SwimmingLevel::Middle,
        water: WaterParams {
            temp_min: 68.0,
            temp_max: 82.0,
            ph_min: 6.0,
            ph_max: 8.0,
            hardness_min: 2.0,
            hardness_max: 20.0,
        },
        temperament: Temperament::Peaceful,
        schooling_size: 1,
        territorial_radius: 0.0,
        incompatible_with: vec![],
        predator_of: vec![],
        prey_to: vec![],
        care_level: CareLevel::Beginner,
        diet: Diet::Omnivore,
        price: 4.99,
        kind: InhabitantKind::Fish {
            nips_at_fins: false,
            long_finned: false,
            incompatible_with_long_finned: false,
        },
    }
}

/// A small invertebrate at the given waste tier.
pub fn invert(id: &str, name: &str, bioload: BioloadTier) -> Inhabitant {
    Inhabitant {
        kind: InhabitantKind::Invertebrate {
            bioload,
            copper_sensitive: true,
            plant_safe: true,
        },
        adult_size_inches: 1.0,
        category: "Shrimp".to_string(),
        ..fish(id, name)
    }
}

/// An undemanding low-light plant.
pub fn plant(id: &str, name: &str) -> Plant {
    Plant {
        id: id.to_string(),
        common_name: name.to_string(),
        scientific_name: String::new(),
        category: "Fern".to_string(),
        light_requirement: LightRequirement::Low,
        co2_required: false,
        co2_recommended: false,
        substrate: PlantSubstrate::WoodOrRock,
        tolerance: PlantTolerance {
            temp_min: 60.0,
            temp_max: 83.0,
            ph_min: 6.0,
            ph_max: 7.5,
        },
        growth_rate: GrowthRate::Slow,
        max_height_inches: 13.0,
        placement: PlantPlacement::Midground,
        price: 8.99,
    }
}

/// A rectangular glass tank of the given volume.
pub fn tank(volume_gallons: f32) -> Tank {
    Tank {
        id: "tank-test".to_string(),
        name: format!("{volume_gallons} Gallon Test Tank"),
        brand: None,
        dimensions: TankDimensions {
            length: 24.0,
            width: 12.0,
            height: 16.0,
        },
        volume_gallons,
        volume_liters: volume_gallons * 3.785,
        shape: TankShape::Rectangular,
        material: TankMaterial::Glass,
        price: 49.99,
    }
}

/// A filter rated up to `max_tank_gallons`.
pub fn filter(max_tank_gallons: f32) -> Equipment {
    Equipment {
        id: "filter-test".to_string(),
        name: "Test Filter".to_string(),
        brand: None,
        category: EquipmentCategory::Filter,
        price: 29.99,
        min_tank_gallons: None,
        max_tank_gallons: Some(max_tank_gallons),
        flow_rate_gph: Some(150.0),
        watts: None,
        lumens: None,
        length_inches: None,
    }
}

/// A heater of the given wattage.
pub fn heater(watts: f32) -> Equipment {
    Equipment {
        id: "heater-test".to_string(),
        name: "Test Heater".to_string(),
        brand: None,
        category: EquipmentCategory::Heater,
        price: 19.99,
        min_tank_gallons: None,
        max_tank_gallons: None,
        flow_rate_gph: None,
        watts: Some(watts),
        lumens: None,
        length_inches: None,
    }
}
