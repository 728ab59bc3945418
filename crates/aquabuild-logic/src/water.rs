//! Water-parameter overlap across every living thing in the build.
//!
//! Temperature and pH intersect fish, invertebrates, and plants;
//! hardness intersects fish and invertebrates only (plants carry no
//! hardness tolerance). Per axis, an empty intersection is an error
//! finding and a barely viable temperature band is a warning.

use crate::issue::{CompatibilityIssue, IssueCategory, Severity};
use crate::range::{overlap, Range};
use crate::species::{Inhabitant, Plant};

/// A temperature overlap this narrow (°F) still works, but leaves no margin
/// for heater drift.
pub const NARROW_TEMP_BAND_F: f32 = 2.0;

/// Result of the water-parameter check: findings plus the per-axis safe
/// envelope, which becomes the build's advertised target parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterCheckResult {
    pub issues: Vec<CompatibilityIssue>,
    pub temp: Option<Range>,
    pub ph: Option<Range>,
    pub hardness: Option<Range>,
}

/// Intersect tolerance ranges across all inhabitants and plants and report
/// axes with no (or nearly no) mutually viable value.
///
/// With nothing stocked and nothing planted there is no envelope to compute:
/// every axis is `None` and no issue is emitted.
pub fn check_water_parameters(
    inhabitants: &[&Inhabitant],
    plants: &[&Plant],
) -> WaterCheckResult {
    let mut temp_ranges: Vec<Range> = Vec::new();
    let mut ph_ranges: Vec<Range> = Vec::new();
    let mut hardness_ranges: Vec<Range> = Vec::new();

    for item in inhabitants {
        temp_ranges.push(item.water.temp());
        ph_ranges.push(item.water.ph());
        hardness_ranges.push(item.water.hardness());
    }
    for plant in plants {
        temp_ranges.push(plant.tolerance.temp());
        ph_ranges.push(plant.tolerance.ph());
    }

    let temp = overlap(&temp_ranges);
    let ph = overlap(&ph_ranges);
    let hardness = overlap(&hardness_ranges);

    let mut issues = Vec::new();

    if !temp_ranges.is_empty() {
        match temp {
            None => issues.push(CompatibilityIssue {
                id: "temp-mismatch".to_string(),
                severity: Severity::Error,
                category: IssueCategory::Water,
                title: "Incompatible Temperature Requirements".to_string(),
                description:
                    "Selected species have conflicting temperature requirements with no overlap."
                        .to_string(),
                affected_items: vec![],
                suggestion: Some("Remove species with extreme temperature needs.".to_string()),
            }),
            Some(r) if r.width() <= NARROW_TEMP_BAND_F => issues.push(CompatibilityIssue {
                id: "temp-narrow".to_string(),
                severity: Severity::Warning,
                category: IssueCategory::Water,
                title: "Narrow Temperature Range".to_string(),
                description: format!(
                    "The overlap for temperature is very narrow ({}-{}°F). Precise control required.",
                    r.min, r.max
                ),
                affected_items: vec![],
                suggestion: Some(
                    "Ensure your heater is precise and monitor temperature closely.".to_string(),
                ),
            }),
            Some(_) => {}
        }

        if ph.is_none() {
            issues.push(CompatibilityIssue {
                id: "ph-mismatch".to_string(),
                severity: Severity::Error,
                category: IssueCategory::Water,
                title: "Incompatible pH Requirements".to_string(),
                description: "Selected species have conflicting pH requirements.".to_string(),
                affected_items: vec![],
                suggestion: Some(
                    "Group species that prefer either acidic or alkaline water.".to_string(),
                ),
            });
        }

        // Hardness only applies when something living (non-plant) is stocked.
        if hardness.is_none() && !inhabitants.is_empty() {
            issues.push(CompatibilityIssue {
                id: "hardness-mismatch".to_string(),
                severity: Severity::Error,
                category: IssueCategory::Water,
                title: "Incompatible Hardness Requirements".to_string(),
                description: "Selected species have conflicting water hardness requirements."
                    .to_string(),
                affected_items: vec![],
                suggestion: None,
            });
        }
    }

    WaterCheckResult {
        issues,
        temp,
        ph,
        hardness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::species::WaterParams;

    fn fish_with_temp(id: &str, min: f32, max: f32) -> crate::species::Inhabitant {
        crate::species::Inhabitant {
            water: WaterParams {
                temp_min: min,
                temp_max: max,
                ..fixtures::fish(id, id).water
            },
            ..fixtures::fish(id, id)
        }
    }

    #[test]
    fn test_empty_build_has_no_issues_and_no_envelope() {
        let result = check_water_parameters(&[], &[]);
        assert!(result.issues.is_empty());
        assert_eq!(result.temp, None);
        assert_eq!(result.ph, None);
        assert_eq!(result.hardness, None);
    }

    #[test]
    fn test_temperature_conflict_is_an_error() {
        let cold = fish_with_temp("f1", 55.0, 65.0);
        let warm = fish_with_temp("f2", 74.0, 82.0);
        let result = check_water_parameters(&[&cold, &warm], &[]);
        let issue = result
            .issues
            .iter()
            .find(|i| i.id == "temp-mismatch")
            .expect("temperature mismatch issue");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.category, IssueCategory::Water);
        assert_eq!(result.temp, None);
    }

    #[test]
    fn test_narrow_temperature_band_warns_instead_of_erroring() {
        // [72,76] and [74,82] overlap at [74,76], width exactly 2.
        let a = fish_with_temp("f1", 72.0, 76.0);
        let b = fish_with_temp("f2", 74.0, 82.0);
        let result = check_water_parameters(&[&a, &b], &[]);
        assert_eq!(result.temp, Some(Range::new(74.0, 76.0)));
        let issue = result
            .issues
            .iter()
            .find(|i| i.id == "temp-narrow")
            .expect("narrow range warning");
        assert_eq!(issue.severity, Severity::Warning);
        assert!(result.issues.iter().all(|i| i.id != "temp-mismatch"));
    }

    #[test]
    fn test_comfortable_overlap_emits_nothing() {
        let a = fish_with_temp("f1", 70.0, 80.0);
        let b = fish_with_temp("f2", 72.0, 82.0);
        let result = check_water_parameters(&[&a, &b], &[]);
        assert!(result.issues.is_empty());
        assert_eq!(result.temp, Some(Range::new(72.0, 80.0)));
    }

    #[test]
    fn test_ph_conflict_is_an_error() {
        let mut acidic = fixtures::fish("f1", "Acid Lover");
        acidic.water.ph_min = 5.0;
        acidic.water.ph_max = 6.0;
        let mut alkaline = fixtures::fish("f2", "Rift Cichlid");
        alkaline.water.ph_min = 7.8;
        alkaline.water.ph_max = 8.6;
        let result = check_water_parameters(&[&acidic, &alkaline], &[]);
        assert!(result.issues.iter().any(|i| i.id == "ph-mismatch"));
        assert_eq!(result.ph, None);
    }

    #[test]
    fn test_plants_join_temp_and_ph_but_not_hardness() {
        let mut coldwater_plant = fixtures::plant("p1", "Cold Plant");
        coldwater_plant.tolerance.temp_min = 50.0;
        coldwater_plant.tolerance.temp_max = 60.0;
        let tropical = fish_with_temp("f1", 74.0, 82.0);
        let result = check_water_parameters(&[&tropical], &[&coldwater_plant]);
        // The plant narrows temperature to nothing...
        assert!(result.issues.iter().any(|i| i.id == "temp-mismatch"));
        // ...but hardness is still just the fish's own range.
        assert_eq!(result.hardness, Some(tropical.water.hardness()));
    }

    #[test]
    fn test_plants_alone_never_raise_hardness_issues() {
        let plant = fixtures::plant("p1", "Java Fern");
        let result = check_water_parameters(&[], &[&plant]);
        assert!(result.issues.iter().all(|i| i.id != "hardness-mismatch"));
        assert_eq!(result.hardness, None);
        assert!(result.temp.is_some());
    }
}
