//! Maintenance schedule derived from the evaluated build.
//!
//! The dashboard turns the cached stocking level into a water-change
//! cadence, and the planted/high-tech status into a plant-care cadence.
//! Pure tier functions, same shape as the stocking thresholds.

use serde::{Deserialize, Serialize};

/// Weekly water-change recommendation by stocking tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterChangeSchedule {
    /// Lightly stocked: 10% weekly.
    TenPercentWeekly,
    /// Moderately stocked (over 40%): 20% weekly.
    TwentyPercentWeekly,
    /// Heavily stocked (over 70%): 25% weekly.
    TwentyFivePercentWeekly,
    /// Near capacity (over 90%): 30-40% weekly.
    ThirtyToFortyPercentWeekly,
    /// Overstocked (over 110%): 50% twice weekly until restocked.
    FiftyPercentTwiceWeekly,
}

impl WaterChangeSchedule {
    /// Human-readable cadence for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::TenPercentWeekly => "10% Weekly",
            Self::TwentyPercentWeekly => "20% Weekly",
            Self::TwentyFivePercentWeekly => "25% Weekly",
            Self::ThirtyToFortyPercentWeekly => "30-40% Weekly",
            Self::FiftyPercentTwiceWeekly => "50% Twice Weekly (Overstocked)",
        }
    }
}

/// Water-change cadence for a given stocking percentage.
pub fn water_change_schedule(stocking_level: u32) -> WaterChangeSchedule {
    if stocking_level > 110 {
        WaterChangeSchedule::FiftyPercentTwiceWeekly
    } else if stocking_level > 90 {
        WaterChangeSchedule::ThirtyToFortyPercentWeekly
    } else if stocking_level > 70 {
        WaterChangeSchedule::TwentyFivePercentWeekly
    } else if stocking_level > 40 {
        WaterChangeSchedule::TwentyPercentWeekly
    } else {
        WaterChangeSchedule::TenPercentWeekly
    }
}

/// Plant and glass care cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantCare {
    /// No live plants: scrub algae bi-weekly.
    AlgaeScrubBiWeekly,
    /// Low-tech planted tank: trim and fertilize bi-weekly.
    TrimAndFertilizeBiWeekly,
    /// High-tech planted tank (CO2 or dedicated light): weekly trimming.
    TrimAndFertilizeWeekly,
}

/// Plant-care cadence from whether the build is planted and whether it runs
/// CO2 injection or a dedicated plant light.
pub fn plant_care(has_plants: bool, high_tech: bool) -> PlantCare {
    if !has_plants {
        PlantCare::AlgaeScrubBiWeekly
    } else if high_tech {
        PlantCare::TrimAndFertilizeWeekly
    } else {
        PlantCare::TrimAndFertilizeBiWeekly
    }
}
