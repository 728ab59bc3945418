//! Bioload-weighted stocking calculation.
//!
//! Stocking is not a head count: a single 12-inch fish strains a tank far
//! more than twelve one-inch fish. Each fish contributes its adult length
//! scaled by a size-dependent waste factor; invertebrates contribute far
//! less per inch, scaled by their catalog waste tier. The total, divided by
//! tank volume, is the stocking percentage (100% = nominal safe ceiling,
//! values above are meaningful and drive overstocking findings).

use crate::build::{BuildItem, Tank};
use crate::species::{BioloadTier, Inhabitant};

/// Waste multiplier for a fish of the given adult length. Larger fish
/// produce disproportionately more waste per inch of body.
///
/// Boundary sizes take the higher tier, so a 12-inch fish weighs 3.0.
pub fn size_factor(adult_size_inches: f32) -> f32 {
    if adult_size_inches >= 12.0 {
        3.0
    } else if adult_size_inches >= 6.0 {
        2.0
    } else if adult_size_inches >= 4.0 {
        1.5
    } else {
        1.0
    }
}

/// Waste multiplier for an invertebrate at the given tier.
pub fn bioload_factor(tier: BioloadTier) -> f32 {
    match tier {
        BioloadTier::Minimal => 0.1,
        BioloadTier::Low => 0.2,
        BioloadTier::Medium => 0.5,
    }
}

/// Total bioload units for one build item, dispatching on kind.
fn item_bioload(item: &BuildItem<Inhabitant>) -> f32 {
    let per_unit = match item.item.bioload_tier() {
        Some(tier) => item.item.adult_size_inches * bioload_factor(tier),
        None => item.item.adult_size_inches * size_factor(item.item.adult_size_inches),
    };
    per_unit * item.quantity as f32
}

/// Stocking percentage of the build, rounded to the nearest integer.
///
/// Without a tank there is no capacity denominator, so the result is 0 —
/// "cannot assess", not "perfectly stocked". A zero- or negative-volume
/// tank is treated the same way rather than letting a division produce a
/// non-finite value.
pub fn stocking_level(
    tank: Option<&Tank>,
    fish: &[BuildItem<Inhabitant>],
    inverts: &[BuildItem<Inhabitant>],
) -> u32 {
    let Some(tank) = tank else {
        return 0;
    };
    if tank.volume_gallons <= 0.0 {
        return 0;
    }

    let total: f32 = fish.iter().chain(inverts.iter()).map(item_bioload).sum();

    (total / tank.volume_gallons * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn fish_item(size: f32, quantity: u32) -> BuildItem<Inhabitant> {
        let mut f = fixtures::fish("f1", "Test Fish");
        f.adult_size_inches = size;
        BuildItem::new(f, quantity)
    }

    #[test]
    fn test_size_factor_tiers() {
        assert_eq!(size_factor(1.5), 1.0);
        assert_eq!(size_factor(3.9), 1.0);
        assert_eq!(size_factor(4.0), 1.5);
        assert_eq!(size_factor(5.9), 1.5);
        assert_eq!(size_factor(6.0), 2.0);
        assert_eq!(size_factor(11.9), 2.0);
        assert_eq!(size_factor(12.0), 3.0);
        assert_eq!(size_factor(18.0), 3.0);
    }

    #[test]
    fn test_no_tank_means_zero() {
        assert_eq!(stocking_level(None, &[fish_item(2.0, 10)], &[]), 0);
    }

    #[test]
    fn test_zero_volume_tank_means_zero() {
        let tank = fixtures::tank(0.0);
        assert_eq!(stocking_level(Some(&tank), &[fish_item(2.0, 10)], &[]), 0);
    }

    #[test]
    fn test_empty_tank_is_zero_percent() {
        let tank = fixtures::tank(20.0);
        assert_eq!(stocking_level(Some(&tank), &[], &[]), 0);
    }

    #[test]
    fn test_small_fish_are_one_inch_per_unit() {
        // 10 fish of 1.5" in 20 gallons: 15 bioload units -> 75%.
        let tank = fixtures::tank(20.0);
        assert_eq!(stocking_level(Some(&tank), &[fish_item(1.5, 10)], &[]), 75);
    }

    #[test]
    fn test_large_fish_overstocks_a_small_tank() {
        // One 12" fish in 10 gallons: 12 * 3.0 = 36 units -> 360%.
        let tank = fixtures::tank(10.0);
        assert_eq!(stocking_level(Some(&tank), &[fish_item(12.0, 1)], &[]), 360);
    }

    #[test]
    fn test_invert_tiers_count_less_than_fish() {
        let tank = fixtures::tank(10.0);
        let shrimp = BuildItem::new(
            fixtures::invert("i1", "Cherry Shrimp", BioloadTier::Minimal),
            10,
        );
        // 10 shrimp of 1" at 0.1 = 1 unit -> 10%.
        assert_eq!(stocking_level(Some(&tank), &[], &[shrimp]), 10);

        let mut snail = fixtures::invert("i2", "Mystery Snail", BioloadTier::Medium);
        snail.adult_size_inches = 2.0;
        let snail = BuildItem::new(snail, 5);
        // 5 snails of 2" at 0.5 = 5 units -> 50%.
        assert_eq!(stocking_level(Some(&tank), &[], &[snail]), 50);
    }

    #[test]
    fn test_adding_fish_never_decreases_stocking() {
        let tank = fixtures::tank(29.0);
        let mut previous = 0;
        for quantity in 1..=20 {
            let level = stocking_level(Some(&tank), &[fish_item(2.5, quantity)], &[]);
            assert!(
                level >= previous,
                "stocking decreased from {previous}% to {level}% at quantity {quantity}"
            );
            previous = level;
        }
    }

    #[test]
    fn test_equal_inch_totals_can_differ_by_distribution() {
        // 12 one-inch fish vs one 12-inch fish: same inches, different load.
        let tank = fixtures::tank(20.0);
        let school = stocking_level(Some(&tank), &[fish_item(1.0, 12)], &[]);
        let single = stocking_level(Some(&tank), &[fish_item(12.0, 1)], &[]);
        assert!(single > school, "expected {single}% > {school}%");
    }
}
