//! Architecture boundary tests: run with `cargo test -p firmware --test arch_boundaries`
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]
//!
//! Layering rules:
//!   Rule 1: platform (traits + newtypes) depends on no other workspace crate
//!   Rule 2: pipeline (control logic) must not depend on firmware or a chip HAL
//!   Rule 3: only firmware may pull in embassy-stm32 and the hardware runtime
//!
//! The dependency graph is the enforcement; these tests read each crate's
//! manifest so a stray dependency fails CI with a readable message.

const PLATFORM_TOML: &str = include_str!("../../platform/Cargo.toml");
const PIPELINE_TOML: &str = include_str!("../../pipeline/Cargo.toml");

/// Crates that tie code to the STM32 target.
const HARDWARE_ONLY: &[&str] = &[
    "embassy-stm32",
    "embassy-executor",
    "cortex-m",
    "cortex-m-rt",
    "defmt-rtt",
    "panic-probe",
];

/// The `[dependencies]` table of a manifest, without dev-dependencies.
fn runtime_dependencies(manifest: &str) -> Vec<&str> {
    manifest
        .lines()
        .skip_while(|l| l.trim() != "[dependencies]")
        .skip(1)
        .take_while(|l| !l.trim_start().starts_with('['))
        .filter(|l| !l.trim_start().starts_with('#'))
        .filter_map(|l| l.split(['=', '.']).next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn manifests_have_dependency_tables() {
    assert!(runtime_dependencies(PLATFORM_TOML).contains(&"smart-leds"));
    assert!(runtime_dependencies(PIPELINE_TOML).contains(&"platform"));
}

#[test]
fn platform_has_no_workspace_dependencies() {
    let deps = runtime_dependencies(PLATFORM_TOML);
    for forbidden in ["pipeline", "firmware"] {
        assert!(
            !deps.contains(&forbidden),
            "platform must not depend on {forbidden}"
        );
    }
}

#[test]
fn pipeline_does_not_depend_on_firmware() {
    assert!(!runtime_dependencies(PIPELINE_TOML).contains(&"firmware"));
}

#[test]
fn only_firmware_links_hardware_crates() {
    for (name, manifest) in [("platform", PLATFORM_TOML), ("pipeline", PIPELINE_TOML)] {
        let deps = runtime_dependencies(manifest);
        for crate_name in HARDWARE_ONLY {
            assert!(
                !deps.contains(crate_name),
                "{name} must stay target-independent but depends on {crate_name}"
            );
        }
    }
}

/// If this compiles, the pipeline is generic over every device it drives:
/// the platform mocks satisfy its bounds without any firmware type.
#[test]
fn pipeline_accepts_platform_mocks() {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use platform::mocks::{MockAcquisition, MockDimmer, MockDisplay, MockLedStrip, MockTone};

    fn assert_pipeline<'a>(
        _: &pipeline::Pipeline<
            'a,
            NoopRawMutex,
            MockAcquisition,
            MockDimmer,
            MockTone,
            MockLedStrip,
            MockDisplay,
        >,
    ) {
    }

    let config = pipeline::PipelineConfig::default_config().validate().unwrap();
    let cell = pipeline::BalanceCell::<NoopRawMutex>::from_config(&config);
    let p = pipeline::Pipeline::new(
        &config,
        &cell,
        pipeline::Devices {
            source: MockAcquisition::new(&[0]),
            dimmer: MockDimmer::new(),
            tone: MockTone::new(),
            strip: MockLedStrip::new(),
            display: MockDisplay::new(),
        },
    );
    assert_pipeline(&p);
    assert_eq!(p.ticks(), 0);
}
