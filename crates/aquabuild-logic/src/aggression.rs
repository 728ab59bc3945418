//! Social compatibility — schooling minimums and pairwise aggression.
//!
//! Pairwise checks run over every ordered pair of distinct build items
//! (fish and invertebrates pooled), at item granularity rather than per
//! individual animal. A mutual incompatibility therefore yields two
//! directional findings, one per aggressor; `affected_items` lists the
//! aggressor first.

use crate::build::BuildItem;
use crate::issue::{CompatibilityIssue, IssueCategory, Severity};
use crate::species::Inhabitant;

/// Check schooling-group minimums and every directional species pair.
pub fn check_aggression(livestock: &[&BuildItem<Inhabitant>]) -> Vec<CompatibilityIssue> {
    let mut issues = Vec::new();

    // Schooling minimums apply to fish only; solitary species (size 1)
    // never trigger.
    for entry in livestock {
        let species = &entry.item;
        if species.is_fish()
            && species.schooling_size > 1
            && entry.quantity < species.schooling_size
        {
            let missing = species.schooling_size - entry.quantity;
            issues.push(CompatibilityIssue {
                id: format!("schooling-{}", species.id),
                severity: Severity::Warning,
                category: IssueCategory::Aggression,
                title: "Schooling Group Too Small".to_string(),
                description: format!(
                    "{} prefers a group of at least {}. Current: {}.",
                    species.common_name, species.schooling_size, entry.quantity
                ),
                affected_items: vec![species.id.clone()],
                suggestion: Some(format!(
                    "Add {} more {}.",
                    missing, species.common_name
                )),
            });
        }
    }

    for a_entry in livestock {
        for b_entry in livestock {
            let a = &a_entry.item;
            let b = &b_entry.item;
            if a.id == b.id {
                continue;
            }

            if a.incompatible_with.iter().any(|r| b.is_referenced_by(r)) {
                issues.push(CompatibilityIssue {
                    id: format!("incomp-{}-{}", a.id, b.id),
                    severity: Severity::Error,
                    category: IssueCategory::Aggression,
                    title: "Incompatible Species".to_string(),
                    description: format!(
                        "{} is listed as incompatible with {}.",
                        a.common_name, b.common_name
                    ),
                    affected_items: vec![a.id.clone(), b.id.clone()],
                    suggestion: Some("Do not keep these species together.".to_string()),
                });
            }

            if a.predator_of.iter().any(|r| b.is_referenced_by(r)) {
                issues.push(CompatibilityIssue {
                    id: format!("predator-{}-{}", a.id, b.id),
                    severity: Severity::Error,
                    category: IssueCategory::Aggression,
                    title: "Predator Risk".to_string(),
                    description: format!(
                        "{} is a potential predator of {}.",
                        a.common_name, b.common_name
                    ),
                    affected_items: vec![a.id.clone(), b.id.clone()],
                    suggestion: Some(format!(
                        "Remove {} or {}.",
                        a.common_name, b.common_name
                    )),
                });
            }

            if a.nips_at_fins() && b.is_long_finned() {
                issues.push(CompatibilityIssue {
                    id: format!("nipping-{}-{}", a.id, b.id),
                    severity: Severity::Warning,
                    category: IssueCategory::Aggression,
                    title: "Fin Nipping Risk".to_string(),
                    description: format!(
                        "{} may nip the fins of {}.",
                        a.common_name, b.common_name
                    ),
                    affected_items: vec![a.id.clone(), b.id.clone()],
                    suggestion: None,
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
    use crate::species::{InhabitantKind, SpeciesRef};

    fn item(species: Inhabitant, quantity: u32) -> BuildItem<Inhabitant> {
        BuildItem::new(species, quantity)
    }

    #[test]
    fn test_schooling_shortfall_warns_with_count() {
        let mut tetra = fixtures::fish("f1", "Neon Tetra");
        tetra.schooling_size = 6;
        let entry = item(tetra, 3);
        let issues = check_aggression(&[&entry]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "schooling-f1");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].suggestion.as_deref(),
            Some("Add 3 more Neon Tetra.")
        );
    }

    #[test]
    fn test_solitary_species_never_trigger_schooling() {
        let betta = fixtures::fish("f1", "Betta"); // schooling_size = 1
        let entry = item(betta, 1);
        assert!(check_aggression(&[&entry]).is_empty());
    }

    #[test]
    fn test_full_school_is_quiet() {
        let mut tetra = fixtures::fish("f1", "Neon Tetra");
        tetra.schooling_size = 6;
        let entry = item(tetra, 6);
        assert!(check_aggression(&[&entry]).is_empty());
    }

    #[test]
    fn test_mutual_incompatibility_reports_both_directions() {
        let mut a = fixtures::fish("f1", "Tiger Barb");
        a.incompatible_with = vec![SpeciesRef::Id("f2".to_string())];
        let mut b = fixtures::fish("f2", "Betta");
        b.incompatible_with = vec![SpeciesRef::Id("f1".to_string())];
        let (a, b) = (item(a, 1), item(b, 1));
        let issues = check_aggression(&[&a, &b]);
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert!(ids.contains(&"incomp-f1-f2"));
        assert!(ids.contains(&"incomp-f2-f1"));
        assert_eq!(issues.len(), 2);
        // Aggressor first in affected_items.
        let forward = issues.iter().find(|i| i.id == "incomp-f1-f2").unwrap();
        assert_eq!(forward.affected_items, vec!["f1", "f2"]);
    }

    #[test]
    fn test_category_reference_matches_whole_category() {
        let mut cichlid = fixtures::fish("f1", "Oscar");
        cichlid.predator_of = vec![SpeciesRef::Category("Tetra".to_string())];
        let mut tetra = fixtures::fish("f2", "Neon Tetra");
        tetra.category = "Tetra".to_string();
        let (a, b) = (item(cichlid, 1), item(tetra, 6));
        let issues = check_aggression(&[&a, &b]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "predator-f1-f2");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_absent_predator_raises_nothing() {
        // Neon Tetra is prey to Angelfish, but no Angelfish is in the build:
        // prey_to alone never produces a finding.
        let mut tetra = fixtures::fish("f1", "Neon Tetra");
        tetra.prey_to = vec![SpeciesRef::Id("fish-3".to_string())];
        let mut betta = fixtures::fish("f2", "Betta");
        betta.incompatible_with = vec![SpeciesRef::Id("f2".to_string())];
        betta.territorial_radius = 12.0;
        let (a, b) = (item(tetra, 6), item(betta, 1));
        assert!(check_aggression(&[&a, &b]).is_empty());
    }

    #[test]
    fn test_fin_nipper_with_long_finned_tankmate_warns() {
        let mut barb = fixtures::fish("f1", "Tiger Barb");
        barb.kind = InhabitantKind::Fish {
            nips_at_fins: true,
            long_finned: false,
            incompatible_with_long_finned: false,
        };
        let mut betta = fixtures::fish("f2", "Betta");
        betta.kind = InhabitantKind::Fish {
            nips_at_fins: false,
            long_finned: true,
            incompatible_with_long_finned: false,
        };
        let (a, b) = (item(barb, 6), item(betta, 1));
        let issues = check_aggression(&[&a, &b]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "nipping-f1-f2");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_invertebrates_join_pairwise_but_not_schooling() {
        // A predator fish that eats shrimp, and a shrimp colony below its
        // schooling size: only the predation finding should appear.
        let mut loach = fixtures::fish("f1", "Clown Loach");
        loach.predator_of = vec![SpeciesRef::Category("Shrimp".to_string())];
        let mut shrimp = fixtures::invert(
            "i1",
            "Cherry Shrimp",
            crate::species::BioloadTier::Minimal,
        );
        shrimp.schooling_size = 10; // ignored for invertebrates
        let (a, b) = (item(loach, 1), item(shrimp, 2));
        let issues = check_aggression(&[&a, &b]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "predator-f1-i1");
    }
}
