//! Filter and heater adequacy against tank volume and stocked livestock.
//!
//! These checks only make sense relative to a tank, so the orchestrator
//! skips them entirely when no tank is selected.

use crate::build::{BuildItem, Equipment, Tank};
use crate::issue::{CompatibilityIssue, IssueCategory, Severity};
use crate::species::Inhabitant;

/// Fish whose minimum temperature is above this need heated water.
pub const TROPICAL_TEMP_MIN_F: f32 = 72.0;

/// Watts per gallon below which a heater struggles to hold temperature.
pub const MIN_WATTS_PER_GALLON: f32 = 2.5;

/// Validate filter and heater selections for the given tank and fish list.
pub fn check_equipment(
    filter: Option<&Equipment>,
    heater: Option<&Equipment>,
    tank: &Tank,
    fish: &[BuildItem<Inhabitant>],
) -> Vec<CompatibilityIssue> {
    let mut issues = Vec::new();

    match filter {
        Some(filter) => {
            if let Some(max_gallons) = filter.max_tank_gallons {
                if max_gallons < tank.volume_gallons {
                    issues.push(CompatibilityIssue {
                        id: "filter-undersized".to_string(),
                        severity: Severity::Warning,
                        category: IssueCategory::Equipment,
                        title: "Filter Undersized".to_string(),
                        description: format!(
                            "{} is rated for up to {} gallons.",
                            filter.name, max_gallons
                        ),
                        affected_items: vec![filter.id.clone()],
                        suggestion: Some("Upgrade to a larger filter.".to_string()),
                    });
                }
            }
        }
        None if !fish.is_empty() => {
            issues.push(CompatibilityIssue {
                id: "no-filter".to_string(),
                severity: Severity::Error,
                category: IssueCategory::Equipment,
                title: "No Filter Selected".to_string(),
                description: "A filter is essential for maintaining water quality with fish."
                    .to_string(),
                affected_items: vec![],
                suggestion: Some("Add a filter from the equipment section.".to_string()),
            });
        }
        None => {}
    }

    match heater {
        Some(heater) => {
            let watts_per_gallon = match heater.watts {
                Some(watts) if tank.volume_gallons > 0.0 => watts / tank.volume_gallons,
                _ => 0.0,
            };
            if watts_per_gallon < MIN_WATTS_PER_GALLON {
                issues.push(CompatibilityIssue {
                    id: "heater-weak".to_string(),
                    severity: Severity::Warning,
                    category: IssueCategory::Equipment,
                    title: "Heater May Be Weak".to_string(),
                    description: format!(
                        "Current heating is {:.1} W/gal. Recommended is 3-5 W/gal.",
                        watts_per_gallon
                    ),
                    affected_items: vec![heater.id.clone()],
                    suggestion: Some("Consider a higher wattage heater.".to_string()),
                });
            }
        }
        None => {
            let needs_heat = fish
                .iter()
                .any(|f| f.item.water.temp_min > TROPICAL_TEMP_MIN_F);
            if needs_heat {
                issues.push(CompatibilityIssue {
                    id: "no-heater".to_string(),
                    severity: Severity::Warning,
                    category: IssueCategory::Equipment,
                    title: "No Heater Selected".to_string(),
                    description:
                        "Tropical fish require a heater to maintain stable temperature."
                            .to_string(),
                    affected_items: vec![],
                    suggestion: Some("Add a heater.".to_string()),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn tropical_fish() -> BuildItem<Inhabitant> {
        let mut f = fixtures::fish("f1", "Betta");
        f.water.temp_min = 75.0;
        BuildItem::new(f, 1)
    }

    fn coldwater_fish() -> BuildItem<Inhabitant> {
        let mut f = fixtures::fish("f2", "White Cloud");
        f.water.temp_min = 60.0;
        BuildItem::new(f, 6)
    }

    #[test]
    fn test_missing_filter_with_fish_is_an_error() {
        let tank = fixtures::tank(20.0);
        let issues = check_equipment(None, None, &tank, &[coldwater_fish()]);
        let filter = issues.iter().find(|i| i.id == "no-filter").unwrap();
        assert_eq!(filter.severity, Severity::Error);
        assert_eq!(filter.category, IssueCategory::Equipment);
    }

    #[test]
    fn test_missing_filter_without_fish_is_fine() {
        let tank = fixtures::tank(20.0);
        assert!(check_equipment(None, None, &tank, &[]).is_empty());
    }

    #[test]
    fn test_undersized_filter_warns() {
        let tank = fixtures::tank(40.0);
        let filter = fixtures::filter(20.0);
        let issues = check_equipment(Some(&filter), None, &tank, &[]);
        let issue = issues.iter().find(|i| i.id == "filter-undersized").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.affected_items, vec!["filter-test"]);
    }

    #[test]
    fn test_adequate_filter_is_quiet() {
        let tank = fixtures::tank(20.0);
        let filter = fixtures::filter(30.0);
        assert!(check_equipment(Some(&filter), None, &tank, &[]).is_empty());
    }

    #[test]
    fn test_tropical_fish_without_heater_warns() {
        let tank = fixtures::tank(10.0);
        let filter = fixtures::filter(20.0);
        let issues = check_equipment(Some(&filter), None, &tank, &[tropical_fish()]);
        let issue = issues.iter().find(|i| i.id == "no-heater").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_coldwater_fish_need_no_heater() {
        let tank = fixtures::tank(10.0);
        let filter = fixtures::filter(20.0);
        assert!(check_equipment(Some(&filter), None, &tank, &[coldwater_fish()]).is_empty());
    }

    #[test]
    fn test_weak_heater_warns_with_watts_per_gallon() {
        // 50W on 40 gallons is 1.2 W/gal.
        let tank = fixtures::tank(40.0);
        let heater = fixtures::heater(50.0);
        let issues = check_equipment(None, Some(&heater), &tank, &[]);
        let issue = issues.iter().find(|i| i.id == "heater-weak").unwrap();
        assert!(issue.description.contains("1.2 W/gal"), "{}", issue.description);
    }

    #[test]
    fn test_strong_heater_is_quiet() {
        // 100W on 20 gallons is 5 W/gal.
        let tank = fixtures::tank(20.0);
        let heater = fixtures::heater(100.0);
        assert!(check_equipment(None, Some(&heater), &tank, &[]).is_empty());
    }
}
