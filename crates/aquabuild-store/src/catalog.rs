//! Built-in sample catalog.
//!
//! A handful of representative entries for demos, the headless harness, and
//! tests. This is fixture data, not a retrieval layer — real catalogs come
//! from outside and only need to produce the same entity shapes.

use aquabuild_logic::build::{
    Equipment, EquipmentCategory, Substrate, SubstrateType, Tank, TankDimensions, TankMaterial,
    TankShape,
};
use aquabuild_logic::species::{
    BioloadTier, CareLevel, Diet, GrowthRate, Inhabitant, InhabitantKind, LightRequirement,
    Plant, PlantPlacement, PlantSubstrate, PlantTolerance, SpeciesRef, SwimmingLevel,
    Temperament, WaterParams,
};

pub fn sample_tanks() -> Vec<Tank> {
    vec![
        Tank {
            id: "tank-1".to_string(),
            name: "Standard 20 Gallon High".to_string(),
            brand: Some("Aqueon".to_string()),
            dimensions: TankDimensions {
                length: 24.0,
                width: 12.0,
                height: 16.0,
            },
            volume_gallons: 20.0,
            volume_liters: 75.0,
            shape: TankShape::Rectangular,
            material: TankMaterial::Glass,
            price: 49.99,
        },
        Tank {
            id: "tank-2".to_string(),
            name: "Fluval Flex 32.5".to_string(),
            brand: Some("Fluval".to_string()),
            dimensions: TankDimensions {
                length: 32.5,
                width: 15.7,
                height: 15.4,
            },
            volume_gallons: 32.5,
            volume_liters: 123.0,
            shape: TankShape::BowFront,
            material: TankMaterial::Glass,
            price: 349.99,
        },
    ]
}

/// Neon Tetra, Betta, and Angelfish — enough of a relationship graph to
/// exercise schooling, mutual-Betta incompatibility, and predation.
pub fn sample_fish() -> Vec<Inhabitant> {
    vec![
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
        },
        Inhabitant {
            id: "fish-2".to_string(),
            common_name: "Betta".to_string(),
            scientific_name: "Betta splendens".to_string(),
            category: "Labyrinth".to_string(),
            adult_size_inches: 2.5,
            min_tank_gallons: 5.0,
            swimming_level: SwimmingLevel::Top,
            water: WaterParams {
                temp_min: 75.0,
                temp_max: 82.0,
                ph_min: 6.5,
                ph_max: 7.5,
                hardness_min: 5.0,
                hardness_max: 20.0,
            },
            temperament: Temperament::SemiAggressive,
            schooling_size: 1,
            territorial_radius: 12.0,
            // Male bettas fight each other on sight.
            incompatible_with: vec![SpeciesRef::Id("fish-2".to_string())],
            predator_of: vec![],
            prey_to: vec![],
            care_level: CareLevel::Beginner,
            diet: Diet::Carnivore,
            price: 9.99,
            kind: InhabitantKind::Fish {
                nips_at_fins: false,
                long_finned: true,
                incompatible_with_long_finned: false,
            },
        },
        Inhabitant {
            id: "fish-3".to_string(),
            common_name: "Angelfish".to_string(),
            scientific_name: "Pterophyllum scalare".to_string(),
            category: "Cichlid".to_string(),
            adult_size_inches: 6.0,
            min_tank_gallons: 29.0,
            swimming_level: SwimmingLevel::Middle,
            water: WaterParams {
                temp_min: 76.0,
                temp_max: 82.0,
                ph_min: 6.5,
                ph_max: 7.5,
                hardness_min: 5.0,
                hardness_max: 12.0,
            },
            temperament: Temperament::SemiAggressive,
            schooling_size: 1,
            territorial_radius: 18.0,
            incompatible_with: vec![],
            predator_of: vec![SpeciesRef::Id("fish-1".to_string())],
            prey_to: vec![],
            care_level: CareLevel::Intermediate,
            diet: Diet::Omnivore,
            price: 14.99,
            kind: InhabitantKind::Fish {
                nips_at_fins: false,
                long_finned: false,
                incompatible_with_long_finned: false,
            },
        },
    ]
}

pub fn sample_inverts() -> Vec<Inhabitant> {
    vec![
        Inhabitant {
            id: "invert-1".to_string(),
            common_name: "Cherry Shrimp".to_string(),
            scientific_name: "Neocaridina davidi".to_string(),
            category: "Shrimp".to_string(),
            adult_size_inches: 1.5,
            min_tank_gallons: 5.0,
            swimming_level: SwimmingLevel::Bottom,
            water: WaterParams {
                temp_min: 65.0,
                temp_max: 80.0,
                ph_min: 6.5,
                ph_max: 8.0,
                hardness_min: 4.0,
                hardness_max: 14.0,
            },
            temperament: Temperament::Peaceful,
            schooling_size: 1,
            territorial_radius: 0.0,
            incompatible_with: vec![],
            predator_of: vec![],
            prey_to: vec![SpeciesRef::Category("Cichlid".to_string())],
            care_level: CareLevel::Beginner,
            diet: Diet::Omnivore,
            price: 4.99,
            kind: InhabitantKind::Invertebrate {
                bioload: BioloadTier::Minimal,
                copper_sensitive: true,
                plant_safe: true,
            },
        },
        Inhabitant {
            id: "invert-2".to_string(),
            common_name: "Nerite Snail".to_string(),
            scientific_name: "Neritina natalensis".to_string(),
            category: "Snail".to_string(),
            adult_size_inches: 1.0,
            min_tank_gallons: 5.0,
            swimming_level: SwimmingLevel::All,
            water: WaterParams {
                temp_min: 72.0,
                temp_max: 82.0,
                ph_min: 7.0,
                ph_max: 8.5,
                hardness_min: 6.0,
                hardness_max: 18.0,
            },
            temperament: Temperament::Peaceful,
            schooling_size: 1,
            territorial_radius: 0.0,
            incompatible_with: vec![],
            predator_of: vec![],
            prey_to: vec![],
            care_level: CareLevel::Beginner,
            diet: Diet::Herbivore,
            price: 3.49,
            kind: InhabitantKind::Invertebrate {
                bioload: BioloadTier::Low,
                copper_sensitive: true,
                plant_safe: true,
            },
        },
    ]
}

pub fn sample_plants() -> Vec<Plant> {
    vec![Plant {
        id: "plant-1".to_string(),
        common_name: "Java Fern".to_string(),
        scientific_name: "Microsorum pteropus".to_string(),
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
    }]
}

pub fn sample_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "equip-1".to_string(),
            name: "AquaClear 50 Power Filter".to_string(),
            brand: Some("Fluval".to_string()),
            category: EquipmentCategory::Filter,
            price: 44.99,
            min_tank_gallons: Some(20.0),
            max_tank_gallons: Some(50.0),
            flow_rate_gph: Some(200.0),
            watts: None,
            lumens: None,
            length_inches: None,
        },
        Equipment {
            id: "equip-2".to_string(),
            name: "Jager 100W Heater".to_string(),
            brand: Some("Eheim".to_string()),
            category: EquipmentCategory::Heater,
            price: 34.99,
            min_tank_gallons: None,
            max_tank_gallons: Some(26.0),
            flow_rate_gph: None,
            watts: Some(100.0),
            lumens: None,
            length_inches: None,
        },
        Equipment {
            id: "equip-3".to_string(),
            name: "Plant 3.0 LED".to_string(),
            brand: Some("Fluval".to_string()),
            category: EquipmentCategory::Light,
            price: 159.99,
            min_tank_gallons: None,
            max_tank_gallons: None,
            flow_rate_gph: None,
            watts: Some(32.0),
            lumens: Some(2350.0),
            length_inches: Some(24.0),
        },
    ]
}

pub fn sample_substrates() -> Vec<Substrate> {
    vec![Substrate {
        id: "substrate-1".to_string(),
        name: "Super Naturals Aquarium Sand".to_string(),
        brand: Some("CaribSea".to_string()),
        substrate_type: SubstrateType::Sand,
        nutrient_rich: false,
        buffers_ph: false,
        buffers_to: None,
        pounds_per_gallon: 1.5,
        bag_size_pounds: 20.0,
        price: 24.99,
    }]
}
