//! AquaBuild Headless Validation Harness
//!
//! Exercises the compatibility engine and the build store end to end
//! without any UI. Runs entirely in-process — no database, no networking,
//! no rendering.
//!
//! Usage:
//!   cargo run -p aquabuild-simtest
//!   cargo run -p aquabuild-simtest -- --verbose

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use aquabuild_logic::build::{AquariumBuild, BuildItem};
use aquabuild_logic::equipment::check_equipment;
use aquabuild_logic::evaluate::evaluate;
use aquabuild_logic::issue::Severity;
use aquabuild_logic::maintenance::{
    plant_care, water_change_schedule, PlantCare, WaterChangeSchedule,
};
use aquabuild_logic::range::{overlap, Range};
use aquabuild_logic::species::SpeciesRef;
use aquabuild_logic::stocking::{size_factor, stocking_level};
use aquabuild_store::catalog;
use aquabuild_store::probe::{probe_candidate, Candidate};
use aquabuild_store::store::BuildStore;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== AquaBuild Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Sample catalog integrity
    results.extend(validate_catalog());

    // 2. Water-parameter overlap
    results.extend(validate_water_logic());

    // 3. Stocking heuristic sweep
    results.extend(validate_stocking_logic());

    // 4. Aggression and schooling scenarios
    results.extend(validate_aggression_logic());

    // 5. Equipment sizing
    results.extend(validate_equipment_logic());

    // 6. Orchestrator end-to-end scenarios
    results.extend(validate_orchestrator(verbose));

    // 7. Candidate probe
    results.extend(validate_probe());

    // 8. Build store semantics
    results.extend(validate_store());

    // 9. Maintenance tiers
    results.extend(validate_maintenance());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Sample catalog ───────────────────────────────────────────────────

fn validate_catalog() -> Vec<TestResult> {
    println!("--- Sample Catalog ---");
    let mut results = Vec::new();

    let fish = catalog::sample_fish();
    let inverts = catalog::sample_inverts();

    results.push(check(
        "catalog_not_empty",
        !fish.is_empty() && !inverts.is_empty() && !catalog::sample_tanks().is_empty(),
        format!(
            "{} fish, {} inverts, {} tanks",
            fish.len(),
            inverts.len(),
            catalog::sample_tanks().len()
        ),
    ));

    let bad_ranges: Vec<&str> = fish
        .iter()
        .chain(inverts.iter())
        .filter(|s| {
            s.water.temp_min > s.water.temp_max
                || s.water.ph_min > s.water.ph_max
                || s.water.hardness_min > s.water.hardness_max
        })
        .map(|s| s.id.as_str())
        .collect();
    results.push(check(
        "catalog_ranges_well_formed",
        bad_ranges.is_empty(),
        if bad_ranges.is_empty() {
            "all tolerance ranges satisfy min <= max".to_string()
        } else {
            format!("inverted ranges on: {}", bad_ranges.join(", "))
        },
    ));

    let known: Vec<&str> = fish
        .iter()
        .chain(inverts.iter())
        .map(|s| s.id.as_str())
        .collect();
    let dangling = fish
        .iter()
        .chain(inverts.iter())
        .flat_map(|s| {
            s.incompatible_with
                .iter()
                .chain(&s.predator_of)
                .chain(&s.prey_to)
        })
        .filter(|r| matches!(r, SpeciesRef::Id(id) if !known.contains(&id.as_str())))
        .count();
    results.push(check(
        "catalog_relationships_closed",
        dangling == 0,
        format!("{dangling} dangling id references"),
    ));

    results
}

// ── 2. Water-parameter overlap ──────────────────────────────────────────

fn validate_water_logic() -> Vec<TestResult> {
    println!("--- Water Parameters ---");
    let mut results = Vec::new();

    let narrow = overlap(&[Range::new(72.0, 76.0), Range::new(74.0, 82.0)]);
    results.push(check(
        "overlap_narrow_band",
        narrow == Some(Range::new(74.0, 76.0)),
        format!("overlap of [72,76] and [74,82] is {narrow:?}"),
    ));

    let disjoint = overlap(&[Range::new(55.0, 65.0), Range::new(74.0, 82.0)]);
    results.push(check(
        "overlap_disjoint_is_none",
        disjoint.is_none(),
        format!("overlap of disjoint ranges is {disjoint:?}"),
    ));

    // Whole catalog in one tank: temp and pH must still intersect.
    let mut store = BuildStore::new("sweep", "Catalog Sweep");
    store.set_tank(catalog::sample_tanks().remove(1));
    for f in catalog::sample_fish() {
        store.add_fish(f, 6);
    }
    let envelope = store.build().target_params;
    results.push(check(
        "catalog_fish_share_an_envelope",
        envelope.temp.is_some() && envelope.ph.is_some() && envelope.hardness.is_some(),
        format!(
            "temp={:?} ph={:?} hardness={:?}",
            envelope.temp, envelope.ph, envelope.hardness
        ),
    ));

    results
}

// ── 3. Stocking heuristic ───────────────────────────────────────────────

fn validate_stocking_logic() -> Vec<TestResult> {
    println!("--- Stocking ---");
    let mut results = Vec::new();

    results.push(check(
        "size_factor_steps",
        size_factor(1.5) == 1.0
            && size_factor(4.0) == 1.5
            && size_factor(6.0) == 2.0
            && size_factor(12.0) == 3.0,
        "tiers at 4\" / 6\" / 12\" with boundaries taking the higher factor",
    ));

    // One 12" fish in 10 gallons should land at 360%.
    let mut pleco = catalog::sample_fish().remove(2);
    pleco.adult_size_inches = 12.0;
    let mut tank = catalog::sample_tanks().remove(0);
    tank.volume_gallons = 10.0;
    let level = stocking_level(Some(&tank), &[BuildItem::new(pleco.clone(), 1)], &[]);
    results.push(check(
        "overstocking_scenario",
        level == 360,
        format!("12\" fish in 10 gallons is {level}%"),
    ));

    // Randomized monotonicity: more of the same fish never lowers stocking.
    let mut rng = StdRng::seed_from_u64(42);
    let mut violations = 0;
    for _ in 0..200 {
        let mut fish = catalog::sample_fish().remove(0);
        fish.adult_size_inches = rng.gen_range(0.5f32..18.0);
        let volume = rng.gen_range(1.0f32..150.0);
        let mut tank = catalog::sample_tanks().remove(0);
        tank.volume_gallons = volume;
        let q = rng.gen_range(1..30u32);
        let before = stocking_level(Some(&tank), &[BuildItem::new(fish.clone(), q)], &[]);
        let after = stocking_level(Some(&tank), &[BuildItem::new(fish, q + 1)], &[]);
        if after < before {
            violations += 1;
        }
    }
    results.push(check(
        "stocking_monotonic_in_quantity",
        violations == 0,
        format!("{violations} violations over 200 randomized cases"),
    ));

    let zero = stocking_level(None, &[BuildItem::new(pleco, 4)], &[]);
    results.push(check(
        "no_tank_is_zero",
        zero == 0,
        format!("stocking without a tank is {zero}%"),
    ));

    results
}

// ── 4. Aggression scenarios ─────────────────────────────────────────────

fn validate_aggression_logic() -> Vec<TestResult> {
    println!("--- Aggression & Schooling ---");
    let mut results = Vec::new();

    // Betta + full tetra school, no angelfish: peaceful.
    let mut store = BuildStore::new("b", "Betta Community");
    store.set_tank(catalog::sample_tanks().remove(0));
    store.add_fish(catalog::sample_fish().remove(1), 1); // betta
    store.add_fish(catalog::sample_fish().remove(0), 6); // tetras
    let aggression_issues = store
        .build()
        .warnings
        .iter()
        .filter(|i| i.id.starts_with("incomp-") || i.id.starts_with("predator-"))
        .count();
    results.push(check(
        "betta_tetra_peaceful",
        aggression_issues == 0,
        format!("{aggression_issues} pairwise findings"),
    ));

    // Angelfish joins: predation in exactly one direction.
    store.add_fish(catalog::sample_fish().remove(2), 1);
    let forward = store
        .build()
        .warnings
        .iter()
        .any(|i| i.id == "predator-fish-3-fish-1");
    let reverse = store
        .build()
        .warnings
        .iter()
        .any(|i| i.id == "predator-fish-1-fish-3");
    results.push(check(
        "predation_is_directional",
        forward && !reverse,
        format!("forward={forward} reverse={reverse}"),
    ));

    // Schooling shortfall names the missing count.
    let mut short = BuildStore::new("b", "Short School");
    short.set_tank(catalog::sample_tanks().remove(0));
    short.add_fish(catalog::sample_fish().remove(0), 3);
    let suggestion = short
        .build()
        .warnings
        .iter()
        .find(|i| i.id == "schooling-fish-1")
        .and_then(|i| i.suggestion.clone())
        .unwrap_or_default();
    results.push(check(
        "schooling_suggestion_counts_missing",
        suggestion.contains("3 more"),
        format!("suggestion: {suggestion:?}"),
    ));

    results
}

// ── 5. Equipment sizing ─────────────────────────────────────────────────

fn validate_equipment_logic() -> Vec<TestResult> {
    println!("--- Equipment ---");
    let mut results = Vec::new();

    // Filter rated to 50 gallons on a 60 gallon tank: undersized warning.
    let mut big_tank = catalog::sample_tanks().remove(0);
    big_tank.volume_gallons = 60.0;
    let filter = catalog::sample_equipment().remove(0);
    let issues = check_equipment(Some(&filter), None, &big_tank, &[]);
    results.push(check(
        "undersized_filter_warns",
        issues.iter().any(|i| i.id == "filter-undersized"),
        format!("{} findings on the oversized tank", issues.len()),
    ));

    // 100W heater on 20 gallons is 5 W/gal: adequate. On 60 gallons it is
    // 1.7 W/gal: weak.
    let heater = catalog::sample_equipment().remove(1);
    let small_tank = catalog::sample_tanks().remove(0);
    let ok = check_equipment(None, Some(&heater), &small_tank, &[]);
    let weak = check_equipment(None, Some(&heater), &big_tank, &[]);
    results.push(check(
        "heater_watts_per_gallon",
        ok.is_empty() && weak.iter().any(|i| i.id == "heater-weak"),
        format!(
            "{} findings at 5 W/gal, {} at 1.7 W/gal",
            ok.len(),
            weak.len()
        ),
    ));

    // Tropical fish in an unheated, unfiltered tank: both findings, only
    // the missing filter is an error.
    let betta = catalog::sample_fish().remove(1);
    let issues = check_equipment(None, None, &small_tank, &[BuildItem::new(betta, 1)]);
    let filter_error = issues
        .iter()
        .any(|i| i.id == "no-filter" && i.severity == Severity::Error);
    let heater_warning = issues
        .iter()
        .any(|i| i.id == "no-heater" && i.severity == Severity::Warning);
    results.push(check(
        "bare_tank_findings",
        filter_error && heater_warning,
        format!("filter_error={filter_error} heater_warning={heater_warning}"),
    ));

    results
}

// ── 6. Orchestrator ─────────────────────────────────────────────────────

fn validate_orchestrator(verbose: bool) -> Vec<TestResult> {
    println!("--- Orchestrator ---");
    let mut results = Vec::new();

    // Empty build: nothing to report.
    let empty = evaluate(&AquariumBuild::new("e", "Empty"));
    results.push(check(
        "empty_build_is_silent",
        empty.issues.is_empty()
            && empty.stocking_level == 0
            && empty.target_params.temp.is_none(),
        format!(
            "{} issues, {}% stocking",
            empty.issues.len(),
            empty.stocking_level
        ),
    ));

    // Livestock without a tank: a single no-tank error leads the report.
    let mut homeless = AquariumBuild::new("h", "No Tank");
    homeless
        .fish
        .push(BuildItem::new(catalog::sample_fish().remove(0), 6));
    let report = evaluate(&homeless);
    results.push(check(
        "no_tank_error_leads",
        report.issues.first().map(|i| i.id.as_str()) == Some("no-tank"),
        format!(
            "first issue: {:?}",
            report.issues.first().map(|i| i.id.clone())
        ),
    ));

    // Determinism: same snapshot, same report.
    let again = evaluate(&homeless);
    results.push(check(
        "evaluation_deterministic",
        report == again,
        "two passes over one snapshot agree",
    ));

    // Full community report serializes cleanly (the data contract the
    // frontend consumes).
    let mut store = BuildStore::new("demo", "Demo Community");
    store.set_tank(catalog::sample_tanks().remove(0));
    store.add_fish(catalog::sample_fish().remove(0), 6);
    store.add_invert(catalog::sample_inverts().remove(0), 5);
    store.add_plant(catalog::sample_plants().remove(0), 3);
    for item in catalog::sample_equipment() {
        store.set_equipment(item);
    }
    store.set_substrate(catalog::sample_substrates().remove(0));
    match serde_json::to_string_pretty(store.build()) {
        Ok(json) => {
            if verbose {
                println!("{json}");
            }
            results.push(check(
                "build_serializes",
                json.contains("stocking_level"),
                format!("{} bytes of JSON", json.len()),
            ));
        }
        Err(e) => results.push(check("build_serializes", false, format!("{e}"))),
    }

    results
}

// ── 7. Candidate probe ──────────────────────────────────────────────────

fn validate_probe() -> Vec<TestResult> {
    println!("--- Candidate Probe ---");
    let mut results = Vec::new();

    let mut store = BuildStore::new("p", "Probe Base");
    store.set_tank(catalog::sample_tanks().remove(0));
    store.add_fish(catalog::sample_fish().remove(0), 6);
    for item in catalog::sample_equipment() {
        store.set_equipment(item);
    }
    let build = store.build();

    let angel = probe_candidate(build, Candidate::Livestock(catalog::sample_fish().remove(2)));
    results.push(check(
        "probe_flags_predator",
        !angel.compatible,
        format!("{} new issues", angel.new_issues.len()),
    ));

    let fern = probe_candidate(build, Candidate::Plant(catalog::sample_plants().remove(0)));
    results.push(check(
        "probe_accepts_plant",
        fern.compatible && fern.new_issues.is_empty(),
        format!("{} new issues", fern.new_issues.len()),
    ));

    let shrimp = probe_candidate(
        build,
        Candidate::Livestock(catalog::sample_inverts().remove(0)),
    );
    results.push(check(
        "probe_accepts_shrimp",
        shrimp.compatible,
        format!(
            "compatible={} with {} new issues",
            shrimp.compatible,
            shrimp.new_issues.len()
        ),
    ));

    results
}

// ── 8. Build store ──────────────────────────────────────────────────────

fn validate_store() -> Vec<TestResult> {
    println!("--- Build Store ---");
    let mut results = Vec::new();

    let mut store = BuildStore::new("s", "Store Checks");
    store.set_tank(catalog::sample_tanks().remove(0));
    let tetra = catalog::sample_fish().remove(0);
    store.add_fish(tetra.clone(), 3);
    store.add_fish(tetra, 3);
    results.push(check(
        "add_merges_quantity",
        store.build().fish.len() == 1 && store.build().fish[0].quantity == 6,
        format!(
            "{} entries, quantity {}",
            store.build().fish.len(),
            store.build().fish.first().map(|f| f.quantity).unwrap_or(0)
        ),
    ));

    let removed = store.set_fish_quantity("fish-1", 0).is_ok();
    results.push(check(
        "zero_quantity_removes",
        removed && store.build().fish.is_empty(),
        format!("{} fish entries remain", store.build().fish.len()),
    ));

    let missing = store.remove_fish("fish-404");
    results.push(check(
        "unknown_id_errors",
        missing.is_err(),
        format!("{missing:?}"),
    ));

    // Cached warnings always match a fresh evaluation.
    store.add_fish(catalog::sample_fish().remove(2), 1);
    let fresh = evaluate(store.build());
    results.push(check(
        "cache_matches_fresh_eval",
        store.build().warnings == fresh.issues
            && store.build().stocking_level == fresh.stocking_level,
        "cached report equals re-evaluation",
    ));

    results
}

// ── 9. Maintenance tiers ────────────────────────────────────────────────

fn validate_maintenance() -> Vec<TestResult> {
    println!("--- Maintenance ---");
    let mut results = Vec::new();

    results.push(check(
        "water_change_tiers",
        water_change_schedule(30) == WaterChangeSchedule::TenPercentWeekly
            && water_change_schedule(60) == WaterChangeSchedule::TwentyPercentWeekly
            && water_change_schedule(80) == WaterChangeSchedule::TwentyFivePercentWeekly
            && water_change_schedule(100) == WaterChangeSchedule::ThirtyToFortyPercentWeekly
            && water_change_schedule(150) == WaterChangeSchedule::FiftyPercentTwiceWeekly,
        "five tiers from lightly stocked to overstocked",
    ));

    results.push(check(
        "plant_care_tiers",
        plant_care(false, false) == PlantCare::AlgaeScrubBiWeekly
            && plant_care(true, false) == PlantCare::TrimAndFertilizeBiWeekly
            && plant_care(true, true) == PlantCare::TrimAndFertilizeWeekly,
        "unplanted, low-tech, and high-tech cadences",
    ));

    // Severity ordering sanity: overstocking produces an error finding and
    // the harshest water-change tier.
    let mut store = BuildStore::new("m", "Overstocked");
    let mut tank = catalog::sample_tanks().remove(0);
    tank.volume_gallons = 10.0;
    store.set_tank(tank);
    let mut big = catalog::sample_fish().remove(2);
    big.adult_size_inches = 12.0;
    big.min_tank_gallons = 10.0;
    store.add_fish(big, 1);
    let overstocked = store
        .build()
        .warnings
        .iter()
        .any(|i| i.id == "overstocking" && i.severity == Severity::Error);
    results.push(check(
        "overstocked_build_gets_harshest_tier",
        overstocked
            && water_change_schedule(store.build().stocking_level)
                == WaterChangeSchedule::FiftyPercentTwiceWeekly,
        format!("stocking {}%", store.build().stocking_level),
    ));

    results
}
