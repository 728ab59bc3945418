//! The build store — one mutable [`AquariumBuild`] plus automatic
//! re-evaluation.
//!
//! Quantity semantics follow the build model: adding an already-present
//! species merges quantities, and driving a quantity to zero removes the
//! item entirely. The cached compatibility output on the build is refreshed
//! after every mutation, so it is never stale relative to the contents.

use log::debug;
use thiserror::Error;

use aquabuild_logic::build::{
    AquariumBuild, BuildItem, Equipment, EquipmentCategory, Substrate, Tank,
};
use aquabuild_logic::evaluate::evaluate;
use aquabuild_logic::species::{Inhabitant, Plant};

/// Store mutations that reference build contents can miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item with this id is currently in the build.
    #[error("no item with id `{0}` in the build")]
    UnknownItem(String),
}

/// Owns one aquarium build and keeps its cached evaluation current.
#[derive(Debug, Clone)]
pub struct BuildStore {
    build: AquariumBuild,
}

impl BuildStore {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            build: AquariumBuild::new(id, name),
        }
    }

    /// The current snapshot, with cached evaluation output up to date.
    pub fn build(&self) -> &AquariumBuild {
        &self.build
    }

    pub fn set_tank(&mut self, tank: Tank) {
        debug!("set tank {} ({} gal)", tank.id, tank.volume_gallons);
        self.build.tank = Some(tank);
        self.recalculate();
    }

    pub fn add_fish(&mut self, fish: Inhabitant, quantity: u32) {
        debug!("add fish {} x{}", fish.id, quantity);
        upsert(&mut self.build.fish, fish, quantity);
        self.recalculate();
    }

    pub fn remove_fish(&mut self, id: &str) -> Result<(), StoreError> {
        remove(&mut self.build.fish, id)?;
        self.recalculate();
        Ok(())
    }

    pub fn set_fish_quantity(&mut self, id: &str, quantity: u32) -> Result<(), StoreError> {
        set_quantity(&mut self.build.fish, id, quantity)?;
        self.recalculate();
        Ok(())
    }

    pub fn add_invert(&mut self, invert: Inhabitant, quantity: u32) {
        debug!("add invert {} x{}", invert.id, quantity);
        upsert(&mut self.build.inverts, invert, quantity);
        self.recalculate();
    }

    pub fn remove_invert(&mut self, id: &str) -> Result<(), StoreError> {
        remove(&mut self.build.inverts, id)?;
        self.recalculate();
        Ok(())
    }

    pub fn set_invert_quantity(&mut self, id: &str, quantity: u32) -> Result<(), StoreError> {
        set_quantity(&mut self.build.inverts, id, quantity)?;
        self.recalculate();
        Ok(())
    }

    pub fn add_plant(&mut self, plant: Plant, quantity: u32) {
        debug!("add plant {} x{}", plant.id, quantity);
        upsert_by(&mut self.build.plants, plant, quantity, |p| &p.id);
        self.recalculate();
    }

    pub fn remove_plant(&mut self, id: &str) -> Result<(), StoreError> {
        remove_by(&mut self.build.plants, id, |p| &p.id)?;
        self.recalculate();
        Ok(())
    }

    pub fn set_plant_quantity(&mut self, id: &str, quantity: u32) -> Result<(), StoreError> {
        set_quantity_by(&mut self.build.plants, id, quantity, |p| &p.id)?;
        self.recalculate();
        Ok(())
    }

    /// Place equipment into its category slot. `Other` items accumulate in
    /// a list; every named category holds at most one item and a new
    /// selection replaces the old one.
    pub fn set_equipment(&mut self, item: Equipment) {
        debug!("set equipment {} ({:?})", item.id, item.category);
        let slots = &mut self.build.equipment;
        match item.category {
            EquipmentCategory::Filter => slots.filter = Some(item),
            EquipmentCategory::Heater => slots.heater = Some(item),
            EquipmentCategory::Light => slots.light = Some(item),
            EquipmentCategory::Co2 => slots.co2 = Some(item),
            EquipmentCategory::AirPump => slots.air_pump = Some(item),
            EquipmentCategory::Other => slots.other.push(item),
        }
        self.recalculate();
    }

    pub fn set_substrate(&mut self, substrate: Substrate) {
        debug!("set substrate {}", substrate.id);
        self.build.substrate = Some(substrate);
        self.recalculate();
    }

    /// Clear everything but the build's identity.
    pub fn reset(&mut self) {
        debug!("reset build {}", self.build.id);
        let id = std::mem::take(&mut self.build.id);
        let name = std::mem::take(&mut self.build.name);
        self.build = AquariumBuild::new(id, name);
    }

    /// Re-run the engine and refresh every cached field. Substrate bag
    /// count is re-derived here too, so a later tank swap can never leave
    /// it stale.
    fn recalculate(&mut self) {
        let report = evaluate(&self.build);
        self.build.stocking_level = report.stocking_level;
        self.build.warnings = report.issues;
        self.build.target_params = report.target_params;
        self.build.substrate_bags = self.substrate_bags_needed();
        self.build.total_cost = self.total_cost();
    }

    /// Bags required for a ~2 inch bed: recommended pounds per gallon times
    /// tank volume, divided into bags, rounded up.
    fn substrate_bags_needed(&self) -> u32 {
        match (&self.build.substrate, &self.build.tank) {
            (Some(substrate), Some(tank)) if substrate.bag_size_pounds > 0.0 => {
                let pounds = substrate.pounds_per_gallon * tank.volume_gallons;
                (pounds / substrate.bag_size_pounds).ceil() as u32
            }
            _ => 0,
        }
    }

    fn total_cost(&self) -> f32 {
        let build = &self.build;
        let mut cost = 0.0;
        if let Some(tank) = &build.tank {
            cost += tank.price;
        }
        for entry in &build.fish {
            cost += entry.item.price * entry.quantity as f32;
        }
        for entry in &build.inverts {
            cost += entry.item.price * entry.quantity as f32;
        }
        for entry in &build.plants {
            cost += entry.item.price * entry.quantity as f32;
        }
        let slots = &build.equipment;
        for item in [&slots.filter, &slots.heater, &slots.light, &slots.co2, &slots.air_pump]
            .into_iter()
            .flatten()
        {
            cost += item.price;
        }
        for item in &slots.other {
            cost += item.price;
        }
        if let Some(substrate) = &build.substrate {
            cost += substrate.price * build.substrate_bags as f32;
        }
        cost
    }
}

// Inhabitant lists share one id accessor; plants have their own. The
// *_by variants exist so both entity shapes go through the same logic.

fn upsert(list: &mut Vec<BuildItem<Inhabitant>>, item: Inhabitant, quantity: u32) {
    upsert_by(list, item, quantity, |i| &i.id)
}

fn remove(list: &mut Vec<BuildItem<Inhabitant>>, id: &str) -> Result<(), StoreError> {
    remove_by(list, id, |i| &i.id)
}

fn set_quantity(
    list: &mut Vec<BuildItem<Inhabitant>>,
    id: &str,
    quantity: u32,
) -> Result<(), StoreError> {
    set_quantity_by(list, id, quantity, |i| &i.id)
}

fn upsert_by<T>(
    list: &mut Vec<BuildItem<T>>,
    item: T,
    quantity: u32,
    id_of: impl Fn(&T) -> &str,
) {
    if quantity == 0 {
        return;
    }
    match list.iter_mut().find(|entry| id_of(&entry.item) == id_of(&item)) {
        Some(entry) => entry.quantity += quantity,
        None => list.push(BuildItem::new(item, quantity)),
    }
}

fn remove_by<T>(
    list: &mut Vec<BuildItem<T>>,
    id: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<(), StoreError> {
    let before = list.len();
    list.retain(|entry| id_of(&entry.item) != id);
    if list.len() == before {
        return Err(StoreError::UnknownItem(id.to_string()));
    }
    Ok(())
}

fn set_quantity_by<T>(
    list: &mut Vec<BuildItem<T>>,
    id: &str,
    quantity: u32,
    id_of: impl Fn(&T) -> &str,
) -> Result<(), StoreError> {
    if quantity == 0 {
        // Zero quantity means "remove from build", not "present with zero".
        return remove_by(list, id, id_of);
    }
    match list.iter_mut().find(|entry| id_of(&entry.item) == id) {
        Some(entry) => {
            entry.quantity = quantity;
            Ok(())
        }
        None => Err(StoreError::UnknownItem(id.to_string())),
    }
}
