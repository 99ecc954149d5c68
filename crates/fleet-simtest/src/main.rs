//! Fleet Headless Validation Harness
//!
//! Validates the vessel registry model and the bundled fleet manifest.
//! Runs entirely in-process with no storage or networking.
//!
//! Usage:
//!   cargo run -p fleet-simtest
//!   cargo run -p fleet-simtest -- --verbose
//!   RUST_LOG=debug cargo run -p fleet-simtest

use fleet_logic::constants::KNOTS_TO_METERS_PER_SECOND;
use fleet_logic::error::VesselErrorKind;
use fleet_logic::manifest::FleetManifest;
use fleet_logic::policy::ValidationPolicy;
use fleet_logic::speed::{Speed, SpeedUnit};
use fleet_logic::vessel::{Vessel, VesselClass};
use tracing_subscriber::EnvFilter;

// ── Bundled fleet manifest ──────────────────────────────────────────────
const MANIFEST_JSON: &str = include_str!("../../../data/fleet_manifest.json");

/// Rows of the bundled manifest that must fail validation: (index, name, kind).
const EXPECTED_REJECTIONS: [(usize, &str, VesselErrorKind); 3] = [
    (5, "Relic", VesselErrorKind::TooOld),
    (6, "NULL", VesselErrorKind::InvalidName),
    (7, "Kraken", VesselErrorKind::ParseError),
];

/// Fixed year used by the synthetic checks, so results never drift with the clock.
const REFERENCE_YEAR: i32 = 2024;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Fleet Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Construction rules
    results.extend(validate_construction(verbose));

    // 2. Speed units and formatting
    results.extend(validate_speed(verbose));

    // 3. Description rendering
    results.extend(validate_descriptions(verbose));

    // 4. Bundled manifest
    results.extend(validate_manifest(verbose));

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

// ── 1. Construction ─────────────────────────────────────────────────────

fn validate_construction(verbose: bool) -> Vec<TestResult> {
    println!("--- Construction ---");
    let policy = ValidationPolicy::as_of(REFERENCE_YEAR);
    let ferry = VesselClass::Ferry { passengers: 50 };
    let mut results = Vec::new();

    let kind_of = |name: &str, year: &str| {
        Vessel::with_policy(name, year, ferry, &policy)
            .err()
            .map(|e| e.kind())
    };

    let boundary = (REFERENCE_YEAR - policy.max_age_years as i32).to_string();
    let past_boundary = (REFERENCE_YEAR - policy.max_age_years as i32 - 1).to_string();

    results.push(TestResult::check(
        "accepts_at_age_limit",
        kind_of("Titan", &boundary).is_none(),
        format!("built {boundary}, reference {REFERENCE_YEAR}"),
    ));
    results.push(TestResult::check(
        "rejects_past_age_limit",
        kind_of("Titan", &past_boundary) == Some(VesselErrorKind::TooOld),
        format!("built {past_boundary}, reference {REFERENCE_YEAR}"),
    ));
    results.push(TestResult::check(
        "rejects_null_name",
        kind_of("NULL", "2020") == Some(VesselErrorKind::InvalidName),
        "sentinel name",
    ));
    results.push(TestResult::check(
        "null_name_checked_first",
        kind_of("NULL", "n/a") == Some(VesselErrorKind::InvalidName),
        "sentinel name with malformed year",
    ));
    results.push(TestResult::check(
        "reports_malformed_year",
        kind_of("Titan", "n/a") == Some(VesselErrorKind::ParseError),
        "year \"n/a\"",
    ));
    results.push(TestResult::check(
        "accepts_future_year",
        kind_of("Prototype", "2030").is_none(),
        "built 2030",
    ));

    match Vessel::with_policy("Titan", "2010", ferry, &policy) {
        Ok(v) => results.push(TestResult::check(
            "accessors_return_inputs",
            v.name() == "Titan" && v.year_built() == "2010" && v.passengers() == Some(50),
            format!("{v:?}"),
        )),
        Err(e) => results.push(TestResult::check("accessors_return_inputs", false, e.to_string())),
    }

    if verbose {
        println!("  policy: max age {} years", policy.max_age_years);
    }
    results
}

// ── 2. Speed ────────────────────────────────────────────────────────────

fn validate_speed(verbose: bool) -> Vec<TestResult> {
    println!("--- Speed ---");
    let speed = Speed::new(10.0);
    let cases = [
        ("format_ms", "MS", "5.144 m/s"),
        ("format_kn", "KN", "10 knots"),
        ("format_unknown_defaults_to_knots", "XX", "10 knots"),
        ("format_empty_defaults_to_knots", "", "10 knots"),
    ];

    let mut results: Vec<TestResult> = cases
        .iter()
        .map(|(name, code, expected)| {
            let actual = speed.format(code);
            TestResult::check(name, actual == *expected, format!("{code:?} → {actual:?}"))
        })
        .collect();

    // Conversion must be linear in knots
    let linear = (1..=40).all(|k| {
        let s = Speed::new(k as f64);
        (s.value_in(SpeedUnit::MetersPerSecond) - k as f64 * KNOTS_TO_METERS_PER_SECOND).abs() < 1e-9
    });
    results.push(TestResult::check(
        "conversion_linear",
        linear,
        "1..=40 knots",
    ));

    if verbose {
        for knots in [5.0, 12.5, 30.0] {
            let s = Speed::new(knots);
            println!("  {} = {}", s, s.format("MS"));
        }
    }
    results
}

// ── 3. Descriptions ─────────────────────────────────────────────────────

fn validate_descriptions(verbose: bool) -> Vec<TestResult> {
    println!("--- Descriptions ---");
    let policy = ValidationPolicy::as_of(REFERENCE_YEAR);
    let cases = [
        (
            "Titan",
            VesselClass::Ferry { passengers: 50 },
            "Vessel: Titan (2010), Passengers: 50",
        ),
        (
            "Hercules",
            VesselClass::Tugboat { max_force: 800 },
            "Vessel: Hercules (2010), Max Force: 800",
        ),
        (
            "Nautilus",
            VesselClass::Submarine { max_depth: 300 },
            "Vessel: Nautilus (2010), Max Depth: 300",
        ),
    ];

    let mut results = Vec::new();
    for (name, class, expected) in cases {
        let check_name = format!("describe_{}", class.name().to_lowercase());
        match Vessel::with_policy(name, "2010", class, &policy) {
            Ok(v) => {
                let actual = v.describe();
                if verbose {
                    println!("  {actual}");
                }
                results.push(TestResult::check(&check_name, actual == expected, actual));
            }
            Err(e) => results.push(TestResult::check(&check_name, false, e.to_string())),
        }
    }
    results
}

// ── 4. Manifest ─────────────────────────────────────────────────────────

fn validate_manifest(verbose: bool) -> Vec<TestResult> {
    println!("--- Fleet Manifest ---");
    let mut results = Vec::new();

    let manifest = match FleetManifest::from_json(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult::check("manifest_parse", false, e.to_string()));
            return results;
        }
    };

    results.push(TestResult::check(
        "manifest_not_empty",
        !manifest.vessels.is_empty(),
        format!("{} entries", manifest.vessels.len()),
    ));

    let load = manifest.build();
    results.push(TestResult::check(
        "manifest_fully_accounted",
        load.vessels.len() + load.rejected.len() == manifest.vessels.len(),
        format!(
            "{} accepted + {} rejected",
            load.vessels.len(),
            load.rejected.len()
        ),
    ));

    // Bundled manifest carries one bad row per error kind
    let rejected: Vec<(usize, &str, VesselErrorKind)> = load
        .rejected
        .iter()
        .map(|r| (r.index, r.name.as_str(), r.error.kind()))
        .collect();
    results.push(TestResult::check(
        "manifest_rejects_expected_rows",
        rejected == EXPECTED_REJECTIONS,
        format!("{rejected:?}"),
    ));

    // Every accepted vessel must revalidate under the same policy
    let revalidates = load.vessels.iter().all(|v| {
        Vessel::with_policy(v.name(), v.year_built(), v.class(), &manifest.policy).is_ok()
    });
    results.push(TestResult::check(
        "accepted_vessels_revalidate",
        revalidates,
        "name/year/class round-trip",
    ));

    let counts = load.count_by_class();
    let all_classes = ["Ferry", "Tugboat", "Submarine"]
        .iter()
        .all(|c| counts.get(*c).copied().unwrap_or(0) > 0);
    results.push(TestResult::check(
        "every_class_represented",
        all_classes,
        format!("{counts:?}"),
    ));

    if verbose {
        for v in &load.vessels {
            let speed = v
                .speed()
                .map_or("speed unknown".to_string(), |s| s.format("KN"));
            println!("  {v} [{speed}]");
        }
        for r in &load.rejected {
            println!("  rejected #{} {:?}: {}", r.index, r.name, r.error);
        }
    }

    log::info!("manifest check complete: {} vessels", load.vessels.len());
    results
}
