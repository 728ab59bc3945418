//! The compatibility orchestrator — the single entry point consumers call.
//!
//! Composes the water, stocking, aggression, and equipment checks over one
//! immutable build snapshot and merges their findings into a single report.
//! Sub-checks never call each other; ordering here only determines the
//! order of issues in the report.
//!
//! The function is pure and deterministic: the same snapshot always yields
//! the same report, and it never panics on type-valid input.

use crate::aggression::check_aggression;
use crate::build::{AquariumBuild, TargetParams};
use crate::equipment::check_equipment;
use crate::issue::{CompatibilityIssue, IssueCategory, Severity};
use crate::species::Inhabitant;
use crate::stocking::stocking_level;
use crate::water::check_water_parameters;

/// Stocking percentage above which the tank is overstocked outright.
pub const OVERSTOCKED_PERCENT: u32 = 100;

/// Stocking percentage above which maintenance demands close attention.
pub const HIGH_STOCKING_PERCENT: u32 = 85;

/// Aggregate result of one evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityReport {
    pub issues: Vec<CompatibilityIssue>,
    pub stocking_level: u32,
    pub target_params: TargetParams,
}

/// Evaluate a build snapshot.
///
/// Water and aggression checks are tank-independent and always run.
/// Everything that needs a capacity reference (stocking thresholds,
/// per-species minimum tank size, equipment sizing) is skipped when no
/// tank is selected; in that case a single "No Tank Selected" error stands
/// in for them whenever livestock is present.
pub fn evaluate(build: &AquariumBuild) -> CompatibilityReport {
    let mut issues: Vec<CompatibilityIssue> = Vec::new();

    if build.tank.is_none() && build.has_livestock() {
        issues.push(CompatibilityIssue {
            id: "no-tank".to_string(),
            severity: Severity::Error,
            category: IssueCategory::Space,
            title: "No Tank Selected".to_string(),
            description: "Select a tank to assess stocking and space.".to_string(),
            affected_items: vec!["tank".to_string()],
            suggestion: Some("Add a tank from the catalog.".to_string()),
        });
    }

    let inhabitants: Vec<&Inhabitant> = build
        .fish
        .iter()
        .chain(build.inverts.iter())
        .map(|entry| &entry.item)
        .collect();
    let plants: Vec<_> = build.plants.iter().map(|entry| &entry.item).collect();

    let water = check_water_parameters(&inhabitants, &plants);
    issues.extend(water.issues);

    let stocking = stocking_level(build.tank.as_ref(), &build.fish, &build.inverts);
    if build.tank.is_some() {
        if stocking > OVERSTOCKED_PERCENT {
            issues.push(CompatibilityIssue {
                id: "overstocking".to_string(),
                severity: Severity::Error,
                category: IssueCategory::Space,
                title: "Tank Overstocked".to_string(),
                description: format!(
                    "Stocking level is {stocking}%. This exceeds the recommended capacity."
                ),
                affected_items: vec!["tank".to_string()],
                suggestion: Some(
                    "Remove some fish or upgrade filtration significantly.".to_string(),
                ),
            });
        } else if stocking > HIGH_STOCKING_PERCENT {
            issues.push(CompatibilityIssue {
                id: "high-stocking".to_string(),
                severity: Severity::Warning,
                category: IssueCategory::Space,
                title: "High Stocking Level".to_string(),
                description: format!(
                    "Stocking level is {stocking}%. Monitor water quality closely."
                ),
                affected_items: vec!["tank".to_string()],
                suggestion: Some("Ensure you have excellent filtration.".to_string()),
            });
        }
    }

    issues.extend(check_aggression(&build.livestock()));

    if let Some(tank) = &build.tank {
        // Per-species minimum volume. Errors for fish, warnings for
        // invertebrates, which tolerate tight quarters better.
        for entry in build.livestock() {
            let species = &entry.item;
            if species.min_tank_gallons > tank.volume_gallons {
                let is_fish = species.is_fish();
                issues.push(CompatibilityIssue {
                    id: format!("size-{}", species.id),
                    severity: if is_fish {
                        Severity::Error
                    } else {
                        Severity::Warning
                    },
                    category: IssueCategory::Space,
                    title: "Tank Too Small".to_string(),
                    description: format!(
                        "{} {} at least {} gallons. Current: {}g.",
                        species.common_name,
                        if is_fish { "requires" } else { "prefers" },
                        species.min_tank_gallons,
                        tank.volume_gallons
                    ),
                    affected_items: vec![species.id.clone(), "tank".to_string()],
                    suggestion: Some(format!(
                        "Upgrade to a larger tank or remove {}.",
                        species.common_name
                    )),
                });
            }
        }

        issues.extend(check_equipment(
            build.equipment.filter.as_ref(),
            build.equipment.heater.as_ref(),
            tank,
            &build.fish,
        ));
    }

    CompatibilityReport {
        issues,
        stocking_level: stocking,
        target_params: TargetParams {
            temp: water.temp,
            ph: water.ph,
            hardness: water.hardness,
        },
    }
}
