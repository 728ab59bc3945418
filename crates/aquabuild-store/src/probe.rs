//! Candidate probing — "would adding this item break the build?"
//!
//! Part browsers call this before the user commits, to grey out or flag
//! catalog entries that would conflict with the current build. The probe
//! appends one unit of the candidate to a hypothetical copy, re-evaluates,
//! and diffs issue ids against the baseline report — stable issue ids make
//! the diff reliable across runs.

use aquabuild_logic::build::{
    AquariumBuild, BuildItem, Equipment, EquipmentCategory, Substrate, Tank,
};
use aquabuild_logic::evaluate::evaluate;
use aquabuild_logic::issue::CompatibilityIssue;
use aquabuild_logic::species::{Inhabitant, Plant};

/// A catalog item under consideration. Livestock routes to the fish or
/// invertebrate list by its kind tag.
#[derive(Debug, Clone)]
pub enum Candidate {
    Livestock(Inhabitant),
    Plant(Plant),
    Tank(Tank),
    Equipment(Equipment),
    Substrate(Substrate),
}

/// What one unit of the candidate would change.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// True when the candidate introduces no new error-severity issue.
    /// New warnings alone (e.g. a schooling shortfall that more units
    /// would fix) do not make a candidate incompatible.
    pub compatible: bool,
    /// Issues present after the addition that the baseline build lacked.
    pub new_issues: Vec<CompatibilityIssue>,
}

/// Evaluate the build with one unit of `candidate` appended and report the
/// issues that appearance introduced. The real build is never touched.
pub fn probe_candidate(build: &AquariumBuild, candidate: Candidate) -> ProbeResult {
    let baseline = evaluate(build);

    let mut hypothetical = build.clone();
    match candidate {
        Candidate::Livestock(species) => {
            let list = if species.is_fish() {
                &mut hypothetical.fish
            } else {
                &mut hypothetical.inverts
            };
            match list.iter_mut().find(|entry| entry.item.id == species.id) {
                Some(entry) => entry.quantity += 1,
                None => list.push(BuildItem::new(species, 1)),
            }
        }
        Candidate::Plant(plant) => {
            match hypothetical
                .plants
                .iter_mut()
                .find(|entry| entry.item.id == plant.id)
            {
                Some(entry) => entry.quantity += 1,
                None => hypothetical.plants.push(BuildItem::new(plant, 1)),
            }
        }
        Candidate::Tank(tank) => hypothetical.tank = Some(tank),
        Candidate::Equipment(item) => {
            let slots = &mut hypothetical.equipment;
            match item.category {
                EquipmentCategory::Filter => slots.filter = Some(item),
                EquipmentCategory::Heater => slots.heater = Some(item),
                EquipmentCategory::Light => slots.light = Some(item),
                EquipmentCategory::Co2 => slots.co2 = Some(item),
                EquipmentCategory::AirPump => slots.air_pump = Some(item),
                EquipmentCategory::Other => slots.other.push(item),
            }
        }
        Candidate::Substrate(substrate) => hypothetical.substrate = Some(substrate),
    }

    let report = evaluate(&hypothetical);
    let new_issues: Vec<CompatibilityIssue> = report
        .issues
        .into_iter()
        .filter(|issue| baseline.issues.iter().all(|known| known.id != issue.id))
        .collect();
    let compatible = !new_issues.iter().any(|issue| issue.is_error());

    ProbeResult {
        compatible,
        new_issues,
    }
}
